mod consts;
pub mod numeral;
mod prelude;
mod types;
mod wareki;

pub use consts::*;
pub use numeral::NumeralError;
pub use types::ToJapanDate;
pub use wareki::{Wareki, WarekiError};

use crate::prelude::*;
use crate::types::jst;
use jiff::Zoned;
use jiff::civil::Date;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// A Japanese imperial era (元号).
///
/// The five modern eras, [`MEIJI`] through [`REIWA`], are compile-time
/// constants and the only values of this type; see [`GENGO_LIST`].
/// Each era carries four name encodings (native, native abbreviation,
/// Romanized, Romanized abbreviation) and the first day it is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{name}")]
pub struct Gengo {
    name: &'static str,
    abbr_name: &'static str,
    roman_name: &'static str,
    abbr_roman_name: &'static str,
    since: Date,
}

/// Error type for era lookups.
#[derive(Debug, thiserror::Error)]
pub enum GengoError {
    /// The date precedes the earliest catalogued era (1868-01-25 JST).
    #[error("date out of range: {0}")]
    OutOfRange(Date),

    /// Year/month/day did not form a valid calendar date.
    #[error(transparent)]
    InvalidDate(#[from] jiff::Error),

    /// The string named no catalogued era.
    #[error("unknown era: {0}")]
    UnknownEra(String),
}

impl Gengo {
    pub(crate) const fn new(
        name: &'static str,
        abbr_name: &'static str,
        roman_name: &'static str,
        abbr_roman_name: &'static str,
        since: Date,
    ) -> Self {
        Self {
            name,
            abbr_name,
            roman_name,
            abbr_roman_name,
            since,
        }
    }

    /// Canonical native-script name (令和)
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Single-character native-script abbreviation (令)
    #[inline]
    pub const fn abbr_name(&self) -> &'static str {
        self.abbr_name
    }

    /// Romanized name (Reiwa)
    #[inline]
    pub const fn roman_name(&self) -> &'static str {
        self.roman_name
    }

    /// Single-letter Romanized abbreviation (R)
    #[inline]
    pub const fn abbr_roman_name(&self) -> &'static str {
        self.abbr_roman_name
    }

    /// First day the era is in effect, as a civil date in Japan.
    #[inline]
    pub const fn since(&self) -> Date {
        self.since
    }

    /// First instant the era is in effect: midnight JST of [`Gengo::since`].
    #[allow(clippy::expect_used)]
    pub fn since_zoned(&self) -> Zoned {
        // A fixed-offset zone has no gaps, so midnight always resolves.
        self.since
            .to_zoned(jst())
            .expect("midnight resolves in a fixed-offset zone")
    }

    /// All catalogued eras, most recent first.
    pub const fn list() -> &'static [Gengo; 5] {
        &GENGO_LIST
    }

    /// The era in effect right now.
    ///
    /// # Errors
    /// Returns [`GengoError::OutOfRange`] only if the system clock is set
    /// before 1868.
    pub fn now() -> Result<Self, GengoError> {
        Self::from_date(Zoned::now())
    }

    /// The era in effect on the given date.
    ///
    /// Accepts any [`ToJapanDate`] input: a civil date or datetime (read as
    /// Japan local time), a zone-aware datetime, or a timestamp.
    ///
    /// # Errors
    /// Returns [`GengoError::OutOfRange`] if the date precedes the earliest
    /// catalogued era.
    pub fn from_date<D: ToJapanDate>(date: D) -> Result<Self, GengoError> {
        let target = date.japan_date();
        GENGO_LIST
            .iter()
            .find(|gengo| gengo.since <= target)
            .copied()
            .ok_or(GengoError::OutOfRange(target))
    }

    /// The era in effect on the given calendar date components.
    ///
    /// # Errors
    /// Returns [`GengoError::InvalidDate`] if the components do not form a
    /// valid date, and [`GengoError::OutOfRange`] as [`Gengo::from_date`].
    pub fn from_iso_date(year: i16, month: i8, day: i8) -> Result<Self, GengoError> {
        Self::from_date(Date::new(year, month, day)?)
    }

    /// Looks an era up by any of its four name encodings, case-insensitively.
    ///
    /// An unknown name is a normal miss (`None`), not an error. No trimming
    /// or partial matching is done.
    pub fn of(name_or_code: &str) -> Option<Self> {
        GENGO_LIST
            .iter()
            .copied()
            .find(|gengo| gengo.matches(name_or_code))
    }

    fn matches(&self, s: &str) -> bool {
        eq_ignore_case(self.name, s)
            || eq_ignore_case(self.abbr_name, s)
            || eq_ignore_case(self.roman_name, s)
            || eq_ignore_case(self.abbr_roman_name, s)
    }

    /// Whether the string names any catalogued era in any encoding.
    /// `None` is always invalid.
    pub fn is_valid<'a>(name_or_code: impl Into<Option<&'a str>>) -> bool {
        let Some(s) = name_or_code.into() else {
            return false;
        };
        Self::is_valid_name(s)
            || Self::is_valid_abbr_name(s)
            || Self::is_valid_roman_name(s)
            || Self::is_valid_abbr_roman_name(s)
    }

    /// Whether the string is a native-script era name.
    pub fn is_valid_name<'a>(name: impl Into<Option<&'a str>>) -> bool {
        field_matches(name.into(), |gengo| gengo.name)
    }

    /// Whether the string is a native-script era abbreviation.
    pub fn is_valid_abbr_name<'a>(abbr_name: impl Into<Option<&'a str>>) -> bool {
        field_matches(abbr_name.into(), |gengo| gengo.abbr_name)
    }

    /// Whether the string is a Romanized era name.
    pub fn is_valid_roman_name<'a>(roman_name: impl Into<Option<&'a str>>) -> bool {
        field_matches(roman_name.into(), |gengo| gengo.roman_name)
    }

    /// Whether the string is a Romanized era abbreviation.
    pub fn is_valid_abbr_roman_name<'a>(abbr_roman_name: impl Into<Option<&'a str>>) -> bool {
        field_matches(abbr_roman_name.into(), |gengo| gengo.abbr_roman_name)
    }
}

fn field_matches(input: Option<&str>, field: fn(&Gengo) -> &'static str) -> bool {
    input.is_some_and(|s| GENGO_LIST.iter().any(|gengo| eq_ignore_case(field(gengo), s)))
}

/// The table's Roman fields are ASCII and its native-script fields have no
/// case, so ASCII folding is a full case-insensitive comparison here.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

impl FromStr for Gengo {
    type Err = GengoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s).ok_or_else(|| GengoError::UnknownEra(s.to_owned()))
    }
}

impl Serialize for Gengo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name)
    }
}

impl<'de> Deserialize<'de> for Gengo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;
    use jiff::civil::date;
    use std::collections::HashSet;

    #[test]
    fn test_list_has_five_entries_descending() {
        let list = Gengo::list();
        assert_eq!(list.len(), 5);
        for pair in list.windows(2) {
            assert!(
                pair[0].since() > pair[1].since(),
                "{} must start after {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_list_name_fields_are_unique() {
        let list = Gengo::list();
        for field in [
            Gengo::name as fn(&Gengo) -> &'static str,
            Gengo::abbr_name,
            Gengo::roman_name,
            Gengo::abbr_roman_name,
        ] {
            let names: HashSet<&str> = list.iter().map(field).collect();
            assert_eq!(names.len(), list.len());
        }
    }

    #[test]
    fn test_properties() {
        assert_eq!(MEIJI.name(), "明治");
        assert_eq!(TAISHO.abbr_name(), "大");
        assert_eq!(SHOWA.roman_name(), "Showa");
        assert_eq!(HEISEI.abbr_roman_name(), "H");
        assert_eq!(REIWA.since(), date(2019, 5, 1));
    }

    #[test]
    fn test_since_zoned_is_midnight_jst() {
        let z = REIWA.since_zoned();
        assert_eq!(z.date(), date(2019, 5, 1));
        assert_eq!(z.time(), jiff::civil::time(0, 0, 0, 0));
        assert_eq!(z.offset().seconds(), 9 * 60 * 60);
    }

    #[test]
    fn test_display_is_native_name() {
        assert_eq!(REIWA.to_string(), "令和");
        assert_eq!(MEIJI.to_string(), "明治");
    }

    #[test]
    fn test_equality() {
        assert_eq!(MEIJI, MEIJI);
        assert_ne!(MEIJI, TAISHO);
        assert_eq!(Gengo::list()[0], REIWA);
    }

    #[test]
    fn test_from_date_at_each_era_start() {
        for gengo in Gengo::list() {
            let found = Gengo::from_date(gengo.since()).unwrap();
            assert_eq!(found, *gengo, "start date of {gengo} must map to itself");
        }
    }

    #[test]
    fn test_from_date_within_one_era_is_constant() {
        assert_eq!(
            Gengo::from_date(date(1990, 6, 15)).unwrap(),
            Gengo::from_date(date(2019, 4, 30)).unwrap()
        );
        assert_eq!(
            Gengo::from_date(date(1927, 1, 1)).unwrap(),
            Gengo::from_date(date(1989, 1, 7)).unwrap()
        );
    }

    #[test]
    fn test_from_date_era_boundaries() {
        assert_eq!(Gengo::from_date(date(1912, 7, 29)).unwrap(), MEIJI);
        assert_eq!(Gengo::from_date(date(1912, 7, 30)).unwrap(), TAISHO);
        assert_eq!(Gengo::from_date(date(1926, 12, 24)).unwrap(), TAISHO);
        assert_eq!(Gengo::from_date(date(1926, 12, 25)).unwrap(), SHOWA);
        assert_eq!(Gengo::from_date(date(2019, 4, 30)).unwrap(), HEISEI);
        assert_eq!(Gengo::from_date(date(2019, 5, 1)).unwrap(), REIWA);
    }

    #[test]
    fn test_from_date_out_of_range() {
        let result = Gengo::from_date(date(1868, 1, 24));
        assert!(matches!(result, Err(GengoError::OutOfRange(d)) if d == date(1868, 1, 24)));

        let result = Gengo::from_date(date(1600, 12, 31));
        assert!(matches!(result, Err(GengoError::OutOfRange(_))));
    }

    #[test]
    fn test_from_date_with_datetime() {
        let dt = date(1989, 1, 7).at(23, 59, 59, 0);
        assert_eq!(Gengo::from_date(dt).unwrap(), SHOWA);
    }

    #[test]
    fn test_from_date_with_timestamp() {
        // Midnight JST on Reiwa day one is 15:00 UTC the day before.
        let ts: Timestamp = "2019-04-30T15:00:00Z".parse().unwrap();
        assert_eq!(Gengo::from_date(ts).unwrap(), REIWA);

        let ts: Timestamp = "2019-04-30T14:59:59Z".parse().unwrap();
        assert_eq!(Gengo::from_date(ts).unwrap(), HEISEI);
    }

    #[test]
    fn test_from_iso_date() {
        assert_eq!(Gengo::from_iso_date(2021, 1, 1).unwrap(), REIWA);
        assert_eq!(Gengo::from_iso_date(1989, 1, 7).unwrap(), SHOWA);
        assert_eq!(Gengo::from_iso_date(1989, 1, 8).unwrap(), HEISEI);
        assert_eq!(Gengo::from_iso_date(1868, 1, 25).unwrap(), MEIJI);
    }

    #[test]
    fn test_from_iso_date_invalid_components() {
        let result = Gengo::from_iso_date(2021, 13, 1);
        assert!(matches!(result, Err(GengoError::InvalidDate(_))));

        let result = Gengo::from_iso_date(2021, 2, 30);
        assert!(matches!(result, Err(GengoError::InvalidDate(_))));
    }

    #[test]
    fn test_now_succeeds() {
        let gengo = Gengo::now().unwrap();
        assert_eq!(gengo, Gengo::from_date(Zoned::now()).unwrap());
    }

    #[test]
    fn test_of_all_encodings() {
        for input in ["令和", "令", "Reiwa", "reiwa", "REIWA", "R", "r"] {
            assert_eq!(Gengo::of(input), Some(REIWA), "of({input})");
        }
        assert_eq!(Gengo::of("平成"), Some(HEISEI));
        assert_eq!(Gengo::of("昭"), Some(SHOWA));
        assert_eq!(Gengo::of("Taisho"), Some(TAISHO));
        assert_eq!(Gengo::of("m"), Some(MEIJI));
    }

    #[test]
    fn test_of_miss_is_none() {
        assert_eq!(Gengo::of("xyz"), None);
        assert_eq!(Gengo::of(""), None);
        // No trimming or partial matching.
        assert_eq!(Gengo::of(" 令和 "), None);
        assert_eq!(Gengo::of("令和時代"), None);
    }

    #[test]
    fn test_is_valid() {
        assert!(!Gengo::is_valid(None::<&str>));
        assert!(Gengo::is_valid("明治"));
        assert!(Gengo::is_valid("明"));
        assert!(Gengo::is_valid("meiji"));
        assert!(Gengo::is_valid("s"));
        assert!(!Gengo::is_valid("bogus"));
        assert!(!Gengo::is_valid(""));
    }

    #[test]
    fn test_is_valid_field_predicates() {
        assert!(Gengo::is_valid_name("明治"));
        assert!(!Gengo::is_valid_name("明"));
        assert!(!Gengo::is_valid_name(None::<&str>));

        assert!(Gengo::is_valid_abbr_name("明"));
        assert!(!Gengo::is_valid_abbr_name("明治"));

        assert!(Gengo::is_valid_roman_name("showa"));
        assert!(!Gengo::is_valid_roman_name("S"));

        assert!(Gengo::is_valid_abbr_roman_name("S"));
        assert!(Gengo::is_valid_abbr_roman_name("s"));
        assert!(!Gengo::is_valid_abbr_roman_name("Showa"));
    }

    #[test]
    fn test_from_str() {
        let gengo: Gengo = "令和".parse().unwrap();
        assert_eq!(gengo, REIWA);

        let result = "xyz".parse::<Gengo>();
        assert!(matches!(result, Err(GengoError::UnknownEra(s)) if s == "xyz"));
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&HEISEI).unwrap();
        assert_eq!(json, r#""平成""#);

        let parsed: Gengo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, HEISEI);
    }

    #[test]
    fn test_serde_rejects_unknown_era() {
        let result: Result<Gengo, _> = serde_json::from_str(r#""元禄""#);
        assert!(result.is_err());
    }
}
