//! The month length table embedded in this crate.
//!
//! The table is tabulated in `data/month_lengths.txt`, which is compressed
//! at build time and decoded once, on first use.

use std::sync::{Arc, LazyLock};

use bs_month_table::MonthLengthTable;
use flate2::bufread::DeflateDecoder;

include!(env!("BS_MONTH_TABLE_BOUNDS"));

/// Day of the week of Baisakh 1, [`MIN_YEAR`], with 0 for Sunday.
///
/// 2000 Baisakh 1 was a Wednesday.
pub const EPOCH_WEEKDAY: u8 = 3;

static BUILTIN: LazyLock<Arc<MonthLengthTable>> = LazyLock::new(|| {
    let reader = DeflateDecoder::new(include_bytes!(env!("BS_MONTH_TABLE_FILE")).as_slice());
    let table = MonthLengthTable::deserialize(reader).expect("unable to parse month length data");

    assert_eq!(
        (table.first_year(), table.last_year()),
        (MIN_YEAR, MAX_YEAR),
        "month length data doesn't match compiled bounds",
    );

    Arc::new(table)
});

/// Get a handle to the built-in month length table.
///
/// ```
/// use bikram_sambat::table::{builtin, MAX_YEAR, MIN_YEAR};
///
/// let table = builtin();
/// assert_eq!(table.first_year(), MIN_YEAR);
/// assert_eq!(table.last_year(), MAX_YEAR);
/// assert_eq!(table.days_in_month(MIN_YEAR, 0), Some(30));
/// ```
pub fn builtin() -> Arc<MonthLengthTable> {
    BUILTIN.clone()
}
