use std::str::FromStr;

use jiff::Zoned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::numeral::{self, NumeralError};
use crate::prelude::*;
use crate::{GENGO_LIST, Gengo, GengoError, MAX_NEN, ToJapanDate};

/// A year of the Japanese era calendar (和暦): an era plus a year within it.
///
/// `平成1` is 1989, the year Heisei began. Era years are calendar-year based,
/// so 1989-01-07 (Showa 64) and 1989-01-08 (Heisei 1) both fall in 1989.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{gengo}{nen}")]
pub struct Wareki {
    gengo: Gengo,
    nen: i16,
}

/// Error type for era-year operations.
#[derive(Debug, thiserror::Error)]
pub enum WarekiError {
    /// The era year is zero, negative, or past the era's last year.
    #[error("invalid era year: {gengo} year {nen}")]
    InvalidNen { gengo: Gengo, nen: i16 },

    /// The string was not an era name followed by a year.
    #[error("invalid era-year string: {0}")]
    InvalidFormat(String),

    /// Error from the underlying era lookup.
    #[error(transparent)]
    Gengo(#[from] GengoError),

    /// Error parsing a kanji numeral year.
    #[error(transparent)]
    Numeral(#[from] NumeralError),
}

impl Wareki {
    /// Creates an era year, validating the combination.
    ///
    /// # Errors
    /// Returns [`WarekiError::InvalidNen`] if `nen` is not a year that
    /// occurred (or can occur) in `gengo`.
    pub fn new(gengo: Gengo, nen: i16) -> Result<Self, WarekiError> {
        if Self::is_valid(gengo, nen) {
            Ok(Self { gengo, nen })
        } else {
            Err(WarekiError::InvalidNen { gengo, nen })
        }
    }

    /// The era.
    #[inline]
    pub const fn gengo(&self) -> Gengo {
        self.gengo
    }

    /// The year within the era, starting at 1.
    #[inline]
    pub const fn nen(&self) -> i16 {
        self.nen
    }

    /// Gregorian year of this era year.
    pub fn year(&self) -> i16 {
        Self::to_year(self.gengo, self.nen)
    }

    /// Gregorian year for a year of the given era.
    pub fn to_year(gengo: Gengo, nen: i16) -> i16 {
        gengo.since().year() + nen - 1
    }

    /// The current era year.
    ///
    /// # Errors
    /// Only if the system clock is set before 1868.
    pub fn now() -> Result<Self, WarekiError> {
        Self::from_date(Zoned::now())
    }

    /// The era year a date falls in.
    ///
    /// # Errors
    /// Returns [`GengoError::OutOfRange`] (wrapped) if the date precedes the
    /// earliest catalogued era.
    pub fn from_date<D: ToJapanDate>(date: D) -> Result<Self, WarekiError> {
        let target = date.japan_date();
        let gengo = Gengo::from_date(target)?;
        let nen = target.year() - gengo.since().year() + 1;
        Self::new(gengo, nen)
    }

    /// Whether `nen` is a year that actually occurred (or can occur) in
    /// `gengo`. The last year of an era is the calendar year its successor
    /// began; the newest era is capped at [`MAX_NEN`].
    pub fn is_valid(gengo: Gengo, nen: i16) -> bool {
        nen >= 1 && last_nen(gengo).is_some_and(|last| nen <= last)
    }

    /// Traditional rendering of the year: `元` for the first year of an era,
    /// kanji numerals otherwise.
    pub fn nen_kanji(&self) -> String {
        if self.nen == 1 {
            "元".to_owned()
        } else {
            numeral::format(self.nen.unsigned_abs().into())
        }
    }
}

/// Last valid year of an era, or `None` if the value is not in the table.
fn last_nen(gengo: Gengo) -> Option<i16> {
    let idx = GENGO_LIST.iter().position(|entry| *entry == gengo)?;
    Some(if idx == 0 {
        MAX_NEN
    } else {
        // The list is descending, so the successor sits one slot earlier.
        GENGO_LIST[idx - 1].since().year() - gengo.since().year() + 1
    })
}

impl FromStr for Wareki {
    type Err = WarekiError;

    /// Parses an era name in any encoding followed by an ASCII year
    /// (`令和3`, `R3`), or a native-script era name followed by `元` or
    /// kanji numerals (`平成元`, `令和三`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(idx) = s.find(|c: char| c.is_ascii_digit()) {
            let (era, digits) = s.split_at(idx);
            let gengo =
                Gengo::of(era).ok_or_else(|| WarekiError::InvalidFormat(s.to_owned()))?;
            let nen = digits
                .parse()
                .map_err(|_| WarekiError::InvalidFormat(s.to_owned()))?;
            return Self::new(gengo, nen);
        }
        // No ASCII digits: the year part is 元 or kanji numerals.
        for gengo in Gengo::list() {
            for prefix in [gengo.name(), gengo.abbr_name()] {
                if let Some(rest) = s.strip_prefix(prefix) {
                    let nen = if rest == "元" {
                        1
                    } else {
                        i16::try_from(numeral::parse(rest)?)
                            .map_err(|_| WarekiError::InvalidFormat(s.to_owned()))?
                    };
                    return Self::new(*gengo, nen);
                }
            }
        }
        Err(WarekiError::InvalidFormat(s.to_owned()))
    }
}

impl Serialize for Wareki {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Wareki {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
