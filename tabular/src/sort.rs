//! Sort strategies derived from column data types.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use crate::dates::NO_DATE;
use crate::metadata::ColumnDataType;
use crate::value::CellValue;

/// How a column orders its cell values.
///
/// Three strategies cover the column data types: plain numeric comparison,
/// chronological comparison, and natural alphanumeric ordering for
/// everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    /// Plain numeric comparison; empty cells sort first.
    Basic,
    /// Chronological comparison; the no-date sentinel sorts first.
    Datetime,
    /// Case- and number-aware alphanumeric comparison.
    Alphanumeric,
}

impl SortStrategy {
    /// The strategy a data type sorts with.
    pub const fn for_data_type(data_type: ColumnDataType) -> Self {
        match data_type {
            ColumnDataType::Number => Self::Basic,
            ColumnDataType::Date => Self::Datetime,
            ColumnDataType::Text => Self::Alphanumeric,
        }
    }

    /// Compares two cell values under this strategy.
    pub fn compare(self, a: &CellValue, b: &CellValue) -> Ordering {
        match self {
            Self::Basic => {
                let a = a.as_number().unwrap_or(f64::NEG_INFINITY);
                let b = b.as_number().unwrap_or(f64::NEG_INFINITY);
                a.total_cmp(&b)
            }
            Self::Datetime => {
                let a = a.as_date().unwrap_or(NO_DATE);
                let b = b.as_date().unwrap_or(NO_DATE);
                a.cmp(&b)
            }
            Self::Alphanumeric => alphanumeric_cmp(&a.to_string(), &b.to_string()),
        }
    }
}

/// Natural ordering: digit runs compare as numbers, everything else compares
/// case-insensitively, so `a2` sorts before `a10` and `Open` equals `OPEN`.
fn alphanumeric_cmp(a: &str, b: &str) -> Ordering {
    let mut a_chars = a.chars().peekable();
    let mut b_chars = b.chars().peekable();

    loop {
        match (a_chars.peek().copied(), b_chars.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(a_char), Some(b_char)) => {
                if a_char.is_ascii_digit() && b_char.is_ascii_digit() {
                    let ordering = take_number(&mut a_chars).cmp(&take_number(&mut b_chars));
                    if ordering != Ordering::Equal {
                        return ordering;
                    }
                } else {
                    let ordering = a_char
                        .to_lowercase()
                        .cmp(b_char.to_lowercase());
                    if ordering != Ordering::Equal {
                        return ordering;
                    }
                    a_chars.next();
                    b_chars.next();
                }
            }
        }
    }
}

/// Consumes a digit run, saturating rather than overflowing on absurd input.
fn take_number(chars: &mut Peekable<Chars<'_>>) -> u128 {
    let mut value: u128 = 0;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = value.saturating_mul(10).saturating_add(u128::from(digit));
        chars.next();
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_strategy_per_data_type() {
        assert_eq!(
            SortStrategy::for_data_type(ColumnDataType::Number),
            SortStrategy::Basic
        );
        assert_eq!(
            SortStrategy::for_data_type(ColumnDataType::Date),
            SortStrategy::Datetime
        );
        assert_eq!(
            SortStrategy::for_data_type(ColumnDataType::Text),
            SortStrategy::Alphanumeric
        );
    }

    #[test]
    fn test_basic_is_numeric_not_lexical() {
        let nine = CellValue::Number(9.0);
        let ten = CellValue::Number(10.0);
        assert_eq!(SortStrategy::Basic.compare(&nine, &ten), Ordering::Less);
    }

    #[test]
    fn test_basic_empty_sorts_first() {
        let empty = CellValue::Empty;
        let zero = CellValue::Number(0.0);
        assert_eq!(SortStrategy::Basic.compare(&empty, &zero), Ordering::Less);
    }

    #[test]
    fn test_datetime_sentinel_sorts_before_real_dates() {
        let sentinel = CellValue::Date(NO_DATE);
        let real = CellValue::Date(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(
            SortStrategy::Datetime.compare(&sentinel, &real),
            Ordering::Less
        );
        assert_eq!(
            SortStrategy::Datetime.compare(&CellValue::Empty, &real),
            Ordering::Less
        );
    }

    #[test]
    fn test_alphanumeric_digit_runs_compare_numerically() {
        assert_eq!(alphanumeric_cmp("a2", "a10"), Ordering::Less);
        assert_eq!(alphanumeric_cmp("apt 9", "apt 12"), Ordering::Less);
    }

    #[test]
    fn test_alphanumeric_is_case_insensitive() {
        assert_eq!(alphanumeric_cmp("Open", "OPEN"), Ordering::Equal);
        assert_eq!(alphanumeric_cmp("close", "OPEN"), Ordering::Less);
    }

    #[test]
    fn test_alphanumeric_prefix_sorts_first() {
        assert_eq!(alphanumeric_cmp("4A", "4AB"), Ordering::Less);
    }
}
