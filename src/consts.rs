use jiff::civil::date;

use crate::Gengo;

/// UTC offset of Japan Standard Time, in hours.
/// Era boundaries are defined at midnight in this zone.
pub const JST_OFFSET_HOURS: i8 = 9;

/// Era years allowed for the newest era, which has no recorded successor.
pub const MAX_NEN: i16 = 99;

/// 明治 (1868-01-25 – 1912-07-29)
pub const MEIJI: Gengo = Gengo::new("明治", "明", "Meiji", "M", date(1868, 1, 25));

/// 大正 (1912-07-30 – 1926-12-24)
pub const TAISHO: Gengo = Gengo::new("大正", "大", "Taisho", "T", date(1912, 7, 30));

/// 昭和 (1926-12-25 – 1989-01-07)
pub const SHOWA: Gengo = Gengo::new("昭和", "昭", "Showa", "S", date(1926, 12, 25));

/// 平成 (1989-01-08 – 2019-04-30)
pub const HEISEI: Gengo = Gengo::new("平成", "平", "Heisei", "H", date(1989, 1, 8));

/// 令和 (2019-05-01 – )
pub const REIWA: Gengo = Gengo::new("令和", "令", "Reiwa", "R", date(2019, 5, 1));

/// All catalogued eras, most recent first.
///
/// The descending order is load-bearing: date lookup returns the first entry
/// whose start is on or before the target, which in this order is the latest
/// era already in effect.
pub const GENGO_LIST: [Gengo; 5] = [REIWA, HEISEI, SHOWA, TAISHO, MEIJI];
