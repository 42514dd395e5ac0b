//! Display formatting for table cells

/// USD price of one SOL used for the dollar column under SOL amounts
pub const SOL_PRICE: f64 = 200.0;

/// Group an integer string with commas: `1234567` -> `1,234,567`
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// en-US USD currency with exactly two decimals: `-1234.5` -> `-$1,234.50`
pub fn format_money(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{}$∞", sign);
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

/// Integer count with thousands separators, as in the followers column
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// A SOL amount in USD, rounded to whole dollars before formatting
pub fn format_sol_usd(sol: f64) -> String {
    format_money((sol * SOL_PRICE).round())
}

/// Leading integer of `s`, the way `parseInt` reads it
fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Compact duration from `"<N> minutes"`: `45m`, `3h`, `2d`.
///
/// Input without a leading integer is returned unchanged.
pub fn format_avg_hold(value: &str) -> String {
    let first = value.split(' ').next().unwrap_or_default();
    let Some(minutes) = parse_int_prefix(first) else {
        return value.to_string();
    };
    if minutes < 60 {
        format!("{}m", minutes)
    } else if minutes < 1440 {
        format!("{}h", minutes / 60)
    } else {
        format!("{}d", minutes / 1440)
    }
}

/// Shorten an address to `start` leading and `end` trailing characters.
///
/// Addresses no longer than `start + end` are returned as-is.
pub fn format_address(address: &str, start: usize, end: usize, separator: &str) -> String {
    let len = address.chars().count();
    if len <= start + end {
        return address.to_string();
    }
    let head: String = address.chars().take(start).collect();
    let tail: String = address.chars().skip(len - end).collect();
    format!("{}{}{}", head, separator, tail)
}

/// [`format_address`] with 4/4 characters and `...`
pub fn format_address_short(address: &str) -> String {
    format_address(address, 4, 4, "...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(1234.5), "$1,234.50");
        assert_eq!(format_money(999.999), "$1,000.00");
        assert_eq!(format_money(-50.0), "-$50.00");
        assert_eq!(format_money(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_money(12.345678), "$12.35");
        assert_eq!(format_money(f64::NAN), "$NaN");
        assert_eq!(format_money(f64::NEG_INFINITY), "-$∞");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(49_999), "49,999");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_sol_usd() {
        assert_eq!(format_sol_usd(1.5), "$300.00");
        assert_eq!(format_sol_usd(0.123), "$25.00");
        assert_eq!(format_sol_usd(-2.0), "-$400.00");
    }

    #[test]
    fn test_format_avg_hold() {
        assert_eq!(format_avg_hold("45 minutes"), "45m");
        assert_eq!(format_avg_hold("59 min"), "59m");
        assert_eq!(format_avg_hold("60 minutes"), "1h");
        assert_eq!(format_avg_hold("1439 minutes"), "23h");
        assert_eq!(format_avg_hold("1440 minutes"), "1d");
        assert_eq!(format_avg_hold("20164 minutes"), "14d");
        assert_eq!(format_avg_hold("12abc min"), "12m");
        assert_eq!(format_avg_hold("soon"), "soon");
    }

    #[test]
    fn test_format_address() {
        let address = "0x1234567890abcdef";
        assert_eq!(format_address_short(address), "0x12...cdef");
        assert_eq!(format_address(address, 6, 6, "…"), "0x1234…abcdef");
        assert_eq!(format_address("short", 4, 4, "..."), "short");
        assert_eq!(format_address("12345678", 4, 4, "..."), "12345678");
    }
}
