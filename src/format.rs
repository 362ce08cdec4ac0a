use crate::loan::TenureUnit;

pub const CURRENCY_GLYPH: char = '₹';

/// Formats an amount as rupees with lakh/crore digit grouping.
///
/// The amount is rounded to whole rupees first. Grouping keeps the last
/// three digits together and pairs every digit to the left of them:
///
/// ```
/// use emi::format::format_currency;
///
/// assert_eq!(format_currency(500.), "₹500");
/// assert_eq!(format_currency(1234567.), "₹12,34,567");
/// assert_eq!(format_currency(123456789.), "₹12,34,56,789");
/// ```
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}{}", CURRENCY_GLYPH, amount);
    }
    let rounded = amount.round();
    // `{:.0}` prints every integer digit of an f64, even past u64 range
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0. { "-" } else { "" };
    format!("{}{}{}", sign, CURRENCY_GLYPH, group_indian(&digits))
}

/// Same grouping as [`format_currency`] for plain counts, without the glyph.
pub fn format_indian_number(num: u64) -> String {
    group_indian(&num.to_string())
}

pub fn format_rate(annual_rate: f64) -> String {
    format!("{:.1}%", annual_rate)
}

pub fn format_tenure(tenure: f64, unit: TenureUnit) -> String {
    let noun = match (unit, tenure == 1.) {
        (TenureUnit::Years, true) => "Year",
        (TenureUnit::Years, false) => "Years",
        (TenureUnit::Months, true) => "Month",
        (TenureUnit::Months, false) => "Months",
    };
    format!("{} {}", tenure, noun)
}

// peel the trailing 3 digits once, then pairs leftwards
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (mut rest, last_three) = digits.split_at(digits.len() - 3);
    let mut groups = vec![last_three];
    while rest.len() > 2 {
        let (left, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::{format_currency, format_indian_number, format_rate, format_tenure, group_indian};
    use crate::loan::TenureUnit;
    use test_log::test;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.), "₹0");
        assert_eq!(format_currency(7.), "₹7");
        assert_eq!(format_currency(500.), "₹500");
        assert_eq!(format_currency(1000.), "₹1,000");
        assert_eq!(format_currency(12345.), "₹12,345");
        assert_eq!(format_currency(100000.), "₹1,00,000");
        assert_eq!(format_currency(1234567.), "₹12,34,567");
        assert_eq!(format_currency(12345678.), "₹1,23,45,678");
        assert_eq!(format_currency(123456789.), "₹12,34,56,789");
    }

    #[test]
    fn test_format_currency_beyond_crores() {
        assert_eq!(format_currency(1234567890.), "₹1,23,45,67,890");
        assert_eq!(format_currency(98765432109876.), "₹9,87,65,43,21,09,876");
    }

    #[test]
    fn test_format_currency_rounds() {
        assert_eq!(format_currency(12398.568887), "₹12,399");
        assert_eq!(format_currency(12345.4), "₹12,345");
        assert_eq!(format_currency(99999.5), "₹1,00,000");
        assert_eq!(format_currency(0.4), "₹0");
        assert_eq!(format_currency(-0.4), "₹0");
    }

    #[test]
    fn test_format_currency_negative_and_non_finite() {
        assert_eq!(format_currency(-1234567.), "-₹12,34,567");
        assert_eq!(format_currency(f64::NAN), "₹NaN");
        assert_eq!(format_currency(f64::INFINITY), "₹inf");
    }

    #[test]
    fn test_format_indian_number() {
        assert_eq!(format_indian_number(0), "0");
        assert_eq!(format_indian_number(999), "999");
        assert_eq!(format_indian_number(1000), "1,000");
        assert_eq!(format_indian_number(360000), "3,60,000");
        assert_eq!(format_indian_number(10000000), "1,00,00,000");
        assert_eq!(
            format_indian_number(u64::MAX),
            "1,84,46,74,40,73,70,95,51,615"
        );
    }

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian("1"), "1");
        assert_eq!(group_indian("1234"), "1,234");
        assert_eq!(group_indian("123456"), "1,23,456");
    }

    #[test]
    fn test_labels() {
        assert_eq!(format_rate(8.5), "8.5%");
        assert_eq!(format_rate(12.), "12.0%");
        assert_eq!(format_tenure(1., TenureUnit::Years), "1 Year");
        assert_eq!(format_tenure(10., TenureUnit::Years), "10 Years");
        assert_eq!(format_tenure(1., TenureUnit::Months), "1 Month");
        assert_eq!(format_tenure(120., TenureUnit::Months), "120 Months");
    }
}
