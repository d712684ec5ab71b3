//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// The first letter of every word of a name, for avatar tiles.
///
/// Usage in templates: `{{ customer.name|initials }}` ("Sarah Johnson" -> "SJ")
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn initials(name: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(name_initials(&name.to_string()))
}

/// Long dates as shown in tables: "Jan 15, 2024".
///
/// Usage in templates: `{{ order.order_date|short_date }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn short_date(date: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let raw = date.to_string();
    Ok(chrono::NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_or(raw, |parsed| parsed.format("%b %-d, %Y").to_string()))
}

fn name_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_initials() {
        assert_eq!(name_initials("Sarah Johnson"), "SJ");
        assert_eq!(name_initials("emily  rodriguez"), "ER");
        assert_eq!(name_initials("Mary Anne Wilson"), "MAW");
        assert_eq!(name_initials("Cher"), "C");
        assert_eq!(name_initials(""), "");
    }
}
