use jiff::civil::{Date, DateTime};
use jiff::tz::{self, TimeZone};
use jiff::{Timestamp, Zoned};

use crate::consts::JST_OFFSET_HOURS;

/// Japan Standard Time as a fixed-offset zone. JST has had no transitions
/// since 1888 and no DST, so a fixed offset is exact for every catalogued era.
pub(crate) fn jst() -> TimeZone {
    TimeZone::fixed(tz::offset(JST_OFFSET_HOURS))
}

/// Date-like inputs accepted by era lookup.
///
/// Civil (zone-less) values are interpreted as Japan local time, the zone era
/// boundaries are defined in, with bare dates standing for their midnight.
/// Zone-aware values are converted to JST before the civil date is taken, so
/// an instant late on the UTC eve of an era change resolves to the new era.
pub trait ToJapanDate {
    /// The civil date in Japan on which this value falls.
    fn japan_date(&self) -> Date;
}

impl ToJapanDate for Date {
    fn japan_date(&self) -> Date {
        *self
    }
}

impl ToJapanDate for DateTime {
    fn japan_date(&self) -> Date {
        self.date()
    }
}

impl ToJapanDate for Zoned {
    fn japan_date(&self) -> Date {
        self.timestamp().to_zoned(jst()).date()
    }
}

impl ToJapanDate for Timestamp {
    fn japan_date(&self) -> Date {
        self.to_zoned(jst()).date()
    }
}

impl<T: ToJapanDate + ?Sized> ToJapanDate for &T {
    fn japan_date(&self) -> Date {
        (**self).japan_date()
    }
}
