use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a monetary amount with a currency symbol, thousands separators and
/// no fraction digits, e.g. `$1,250,000` or `-€3,400`.
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{symbol}{grouped}")
    } else {
        format!("{symbol}{grouped}")
    }
}

/// Formats a percentage with one decimal, e.g. `33.7%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{:.1}%", value)
}

/// Formats a change with an explicit sign, e.g. `+15.3%`.
pub fn format_signed_percent(value: Decimal) -> String {
    if value.is_sign_negative() && !value.is_zero() {
        format!("{:.1}%", value)
    } else {
        format!("+{:.1}%", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(dec!(970000), "$"), "$970,000");
        assert_eq!(format_currency(dec!(18400000), "$"), "$18,400,000");
        assert_eq!(format_currency(dec!(999), "€"), "€999");
        assert_eq!(format_currency(dec!(0), "$"), "$0");
    }

    #[test]
    fn test_format_currency_negative_and_rounding() {
        assert_eq!(format_currency(dec!(-3400.4), "€"), "-€3,400");
        assert_eq!(format_currency(dec!(1234.5), "$"), "$1,235");
        assert_eq!(format_currency(dec!(-0.2), "$"), "$0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(33.7)), "33.7%");
        assert_eq!(format_percent(dec!(30)), "30.0%");
        assert_eq!(format_signed_percent(dec!(15.3)), "+15.3%");
        assert_eq!(format_signed_percent(dec!(-2.5)), "-2.5%");
        assert_eq!(format_signed_percent(dec!(0)), "+0.0%");
    }
}
