//! Parsing of the raw lucky-number field.

/// What the user typed into the number field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuckyInput {
    /// Nothing was entered; the reveal is skipped silently.
    Empty,
    /// A leading integer was found.
    Number(i64),
    /// Text with no leading integer.
    NotANumber,
}

/// Parse the number field leniently.
///
/// Leading whitespace and an optional sign are accepted, then the longest run
/// of ASCII digits; anything after it is ignored, so `"42abc"` and `"12.7"`
/// read as 42 and 12.
pub fn parse_lucky_number(raw: &str) -> LuckyInput {
    if raw.trim().is_empty() {
        return LuckyInput::Empty;
    }

    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut seen = false;
    let mut value: i64 = 0;
    for b in digits {
        seen = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(b - b'0'));
    }

    if !seen {
        return LuckyInput::NotANumber;
    }
    LuckyInput::Number(if negative { -value } else { value })
}
