//! Kanji numerals (漢数字).
//!
//! [`format`] writes a non-negative integer the traditional way: digits
//! 〇 through 九, positional 十/百/千 within each group of four, and the
//! myriad markers 万/億/兆/京 between groups. [`parse`] is the inverse.

/// Digits 〇 through 九.
const NUMERALS: [char; 10] = ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// 十, 百, 千: value 10^(index + 1).
const DECIMAL_NUMERALS: [char; 3] = ['十', '百', '千'];

/// 万, 億, 兆, 京: value 10^(4 * (index + 1)).
const MYRIAD_NUMERALS: [char; 4] = ['万', '億', '兆', '京'];

/// Decimal places a `u64` can occupy.
const MAX_PLACES: usize = 20;

/// Error type for kanji numeral parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    /// The input string is empty.
    #[error("empty numeral string")]
    Empty,

    /// A character is not a kanji numeral.
    #[error("invalid character: {0}")]
    InvalidChar(char),

    /// The numeral does not fit in a `u64`.
    #[error("numeral out of range")]
    Overflow,
}

/// Formats a number as kanji numerals: `format(1205)` is `千二百五`,
/// `format(0)` is `〇`.
pub fn format(number: u64) -> String {
    if number == 0 {
        return NUMERALS[0].to_string();
    }
    let digits: Vec<usize> = number
        .to_string()
        .bytes()
        .map(|b| usize::from(b - b'0'))
        .collect();
    let mut out = String::new();
    // Set once a group of four has written anything, so all-zero groups do
    // not emit their myriad marker (一億, not 一億万).
    let mut group_written = false;
    for (i, &num) in digits.iter().enumerate() {
        let place = digits.len() - i - 1;
        let decimal = place % 4;
        let myriad = if decimal == 0 { place / 4 } else { 0 };
        // 十/百/千 carry an implied leading 一
        if num != 0 && !(num == 1 && decimal > 0) {
            out.push(NUMERALS[num]);
            group_written = true;
        }
        if num != 0 && decimal != 0 {
            out.push(DECIMAL_NUMERALS[decimal - 1]);
            group_written = true;
        }
        if group_written && myriad > 0 {
            out.push(MYRIAD_NUMERALS[myriad - 1]);
            group_written = false;
        }
    }
    out
}

/// Parses kanji numerals back into a number.
///
/// # Errors
/// Returns [`NumeralError::Empty`] for an empty string,
/// [`NumeralError::InvalidChar`] for any character that is not a kanji
/// numeral, and [`NumeralError::Overflow`] if the value exceeds `u64`.
pub fn parse(s: &str) -> Result<u64, NumeralError> {
    if s.is_empty() {
        return Err(NumeralError::Empty);
    }
    // Walk from the lowest place, assigning each digit to the slot named by
    // the most recent positional and myriad markers: 千二百五 -> [5, 0, 2, 1].
    let mut digits = [0u64; MAX_PLACES];
    let mut myriad = 0;
    let mut decimal = 0;
    for c in s.chars().rev() {
        if let Some(i) = MYRIAD_NUMERALS.iter().position(|&m| m == c) {
            myriad = i + 1;
            decimal = 0;
        } else if let Some(i) = DECIMAL_NUMERALS.iter().position(|&d| d == c) {
            decimal = i + 1;
            *digits
                .get_mut(myriad * 4 + decimal)
                .ok_or(NumeralError::Overflow)? = 1;
        } else if let Some(i) = NUMERALS.iter().position(|&n| n == c) {
            *digits
                .get_mut(myriad * 4 + decimal)
                .ok_or(NumeralError::Overflow)? = i as u64;
        } else {
            return Err(NumeralError::InvalidChar(c));
        }
    }
    let mut value: u64 = 0;
    for &digit in digits.iter().rev() {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or(NumeralError::Overflow)?;
    }
    Ok(value)
}
