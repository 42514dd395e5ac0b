//! Numeric coercion for query-string bounds and free-text durations
//!
//! Bounds arrive from browser forms, so they are coerced with the same rules
//! a JavaScript `Number(..)` call applies: anything that is not a clean
//! numeric literal becomes NaN.

/// Coerce a raw bound string into a number.
///
/// Surrounding whitespace is ignored and a blank string is zero. Decimal and
/// exponent forms, `Infinity` and unsigned `0x`/`0o`/`0b` integer literals are
/// accepted. Everything else is NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_radix_literal(s) {
        return value;
    }

    // `str::parse::<f64>` also takes "inf", "NaN" and friends; those are not numbers here.
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    // Folded in f64 so literals wider than any integer type stay finite
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}

/// Leading integer of a `"<N> unit"` duration string.
///
/// Only the text before the first space is considered; an optional sign and
/// the run of digits that follows are kept (`"45 min"` is 45, `"12abc min"` is
/// 12). No digits means NaN.
pub fn parse_leading_int(duration: &str) -> f64 {
    let token = duration.split(' ').next().unwrap_or_default().trim_start();

    let (negative, rest) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return f64::NAN;
    }

    let value = rest[..end].parse::<f64>().unwrap_or(f64::NAN);
    if negative { -value } else { value }
}
