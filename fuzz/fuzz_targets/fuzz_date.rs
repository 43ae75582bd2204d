#![no_main]
use bikram_sambat::fuzzing::{run_fuzz_date, Data};
use libfuzzer_sys::{fuzz_target, Corpus};

fuzz_target!(|data: Data| -> Corpus {
    if run_fuzz_date(data) {
        Corpus::Keep
    } else {
        Corpus::Reject
    }
});
