use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Rounds to whole units and groups thousands ('1,234,567', '-2,000').
///
/// For consistency, uses en locale regardless of user's locale or currency.
pub fn format_grouped(value: f64) -> String {
    (value.round() as i64).to_formatted_string(&Locale::en)
}

/// Format cash amount in whole currency units with thousands separators and
/// the currency symbol (ex. '1,234,567 ₦'). Minor units are not shown.
pub fn format_amount(amount: f64, currency: Currency) -> String {
    format!("{} {}", format_grouped(amount), currency.symbol())
}
