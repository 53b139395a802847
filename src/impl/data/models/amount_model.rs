use std::str::FromStr;

/// Currency amount as written in customs extracts: optional naira prefix
/// ("₦", "N" or "NGN"), thousands commas, and parentheses for negatives.
#[derive(Debug)]
pub(crate) struct AmountModel(pub f64);

/// Unparseable or non-finite amount text.
#[derive(Debug)]
pub(crate) struct InvalidAmountText;

impl FromStr for AmountModel {
    type Err = InvalidAmountText;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(',', "");
        let trimmed = raw.trim();
        let is_negative = trimmed.starts_with('(') && trimmed.ends_with(')');
        let unwrapped = trimmed.trim_matches(|c| c == '(' || c == ')').trim();
        let numeric_part = ["NGN", "₦", "N"]
            .iter()
            .find_map(|prefix| unwrapped.strip_prefix(prefix))
            .unwrap_or(unwrapped)
            .trim();
        let amount = numeric_part
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .ok_or(InvalidAmountText)?;
        Ok(AmountModel(if is_negative { -amount } else { amount }))
    }
}

impl Into<f64> for AmountModel {
    fn into(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Option<f64> {
        AmountModel::from_str(s).ok().map(Into::into)
    }

    #[test]
    fn accepts_accounting_notation() {
        assert_eq!(parse("1,234,567.50"), Some(1_234_567.5));
        assert_eq!(parse("(2,000)"), Some(-2000.0));
        assert_eq!(parse("₦ 5,000"), Some(5000.0));
        assert_eq!(parse("NGN1000"), Some(1000.0));
        assert_eq!(parse("-12.5"), Some(-12.5));
        assert_eq!(parse(" 0 "), Some(0.0));
    }

    #[test]
    fn rejects_text_and_non_finite_values() {
        assert_eq!(parse("n/a"), None);
        assert_eq!(parse("NaN"), None);
        assert_eq!(parse("inf"), None);
        assert_eq!(parse(""), None);
    }
}
