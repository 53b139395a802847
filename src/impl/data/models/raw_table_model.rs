use std::borrow::Cow;

use chrono::NaiveDate;

/// Untyped cell as read from a CSV or spreadsheet source.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RawCell {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

/// Header row plus body rows, before any schema mapping.
#[derive(Debug, Default)]
pub(crate) struct RawTable {
    pub(crate) headers: Vec<String>,
    pub(crate) rows: Vec<Vec<RawCell>>,
}

impl RawCell {
    pub(crate) fn text(&self) -> Cow<'_, str> {
        match self {
            RawCell::Empty => Cow::Borrowed(""),
            RawCell::Text(s) => Cow::Borrowed(s),
            RawCell::Number(n) => Cow::Owned(number_text(*n)),
            RawCell::Date(d) => Cow::Owned(d.format("%Y-%m-%d").to_string()),
        }
    }

    /// Whether the cell carries no value. Whitespace-only text counts as
    /// empty.
    pub(crate) fn is_blank(&self) -> bool {
        match self {
            RawCell::Empty => true,
            RawCell::Text(s) => s.trim().is_empty(),
            RawCell::Number(_) | RawCell::Date(_) => false,
        }
    }
}

/// Integral spreadsheet numbers (HS codes, whole-naira amounts) print without a
/// trailing ".0".
fn number_text(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_print_without_fraction() {
        assert_eq!(RawCell::Number(8703.0).text(), "8703");
        assert_eq!(RawCell::Number(8703.231).text(), "8703.231");
        assert_eq!(RawCell::Number(-12.0).text(), "-12");
    }

    #[test]
    fn whitespace_text_is_blank() {
        assert!(RawCell::Text("  ".to_string()).is_blank());
        assert!(!RawCell::Text(" NG".to_string()).is_blank());
        assert!(!RawCell::Number(0.0).is_blank());
    }
}
