//! Labels used to display a calendar.

use std::str::FromStr;

use crate::error::UnknownLanguage;

/// Names of the months, from Baisakh to Chaitra.
pub const MONTH_NAMES: [&str; 12] = [
    "Baisakh", "Jestha", "Ashad", "Shrawan", "Bhadra", "Ashwin", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

/// Short English names of the days of the week, starting from Sunday.
pub const ENGLISH_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Short Nepali names of the days of the week, starting from Sunday.
pub const NEPALI_WEEKDAYS: [&str; 7] = ["आइत", "सोम", "मंगल", "बुध", "बिही", "शुक्र", "शनि"];

/// Language of the labels of the days of the week.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Language {
    #[default]
    Nepali,
    English,
}

impl Language {
    /// Short code of this language, as accepted by [`Language::from_str`].
    pub fn code(self) -> &'static str {
        match self {
            Self::Nepali => "nep",
            Self::English => "eng",
        }
    }

    /// Labels of the days of the week, starting from Sunday.
    pub fn weekday_labels(self) -> &'static [&'static str; 7] {
        match self {
            Self::Nepali => &NEPALI_WEEKDAYS,
            Self::English => &ENGLISH_WEEKDAYS,
        }
    }

    /// Label of a day of the week, with 0 for Sunday.
    ///
    /// ```
    /// use bikram_sambat::localization::Language;
    ///
    /// assert_eq!(Language::English.weekday_label(6), Some("Sat"));
    /// assert_eq!(Language::Nepali.weekday_label(0), Some("आइत"));
    /// assert_eq!(Language::English.weekday_label(7), None);
    /// ```
    pub fn weekday_label(self, weekday: u8) -> Option<&'static str> {
        self.weekday_labels().get(usize::from(weekday)).copied()
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nep" => Ok(Self::Nepali),
            "eng" => Ok(Self::English),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// Name of a month, `month0` being zero-based.
///
/// ```
/// use bikram_sambat::localization::month_name;
///
/// assert_eq!(month_name(0), Some("Baisakh"));
/// assert_eq!(month_name(11), Some("Chaitra"));
/// assert_eq!(month_name(12), None);
/// ```
pub fn month_name(month0: u8) -> Option<&'static str> {
    MONTH_NAMES.get(usize::from(month0)).copied()
}
