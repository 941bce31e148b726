//! Token helpers for the textual form of datapoint values.
//!
//! Textual input arrives pre-tokenized (`&[&str]`, split on whitespace by
//! the caller). The helpers here return `Option` so each codec can decide
//! which error to raise; they never allocate.

use core::fmt::{self, Write as _};

/// Numeric token, optionally followed by the codec unit (`["21.5", "°C"]`).
///
/// Returns the number token if the layout matches.
pub fn numeric_token<'a>(args: &[&'a str], unit: Option<&str>) -> Option<&'a str> {
    match args {
        [number] => Some(*number),
        [number, suffix] if unit.is_some_and(|u| u == *suffix) => Some(*number),
        _ => None,
    }
}

/// Parse a decimal number (`.` as decimal separator, finite values only)
pub fn parse_number(token: &str) -> Option<f64> {
    if token.is_empty() {
        return None;
    }
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an unsigned decimal integer
pub fn parse_u8(token: &str) -> Option<u8> {
    if token.starts_with('+') {
        return None;
    }
    token.parse().ok()
}

/// Parse a `0x`-prefixed hex token into exactly `N` big-endian bytes.
///
/// Shorter hex strings are left-padded (`0x7` fits a 1 byte record).
pub fn parse_hex<const N: usize>(token: &str) -> Option<[u8; N]> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))?;
    if digits.is_empty() || digits.len() > 2 * N {
        return None;
    }
    let mut value: u64 = 0;
    for c in digits.chars() {
        value = (value << 4) | u64::from(c.to_digit(16)?);
    }
    let mut out = [0u8; N];
    for (i, slot) in out.iter_mut().rev().enumerate() {
        *slot = (value >> (8 * i)) as u8;
    }
    Some(out)
}

/// Join string tokens with single spaces.
///
/// Returns `None` if the joined text exceeds `N` bytes.
pub fn join_tokens<const N: usize>(args: &[&str]) -> Option<heapless::String<N>> {
    let mut text = heapless::String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            text.push(' ').ok()?;
        }
        text.push_str(arg).ok()?;
    }
    Some(text)
}

/// Check if `tokens` spell the (possibly multi-word) `label`, case-insensitive
pub fn matches_words(label: &str, tokens: &[&str]) -> bool {
    let mut words = label.split_whitespace();
    for token in tokens {
        match words.next() {
            Some(word) if word.eq_ignore_ascii_case(token) => {}
            _ => return false,
        }
    }
    !tokens.is_empty() && words.next().is_none()
}

/// Parse a boolean from `true/false/1/0` or one of the codec labels
pub fn parse_bool(labels: (&str, &str), tokens: &[&str]) -> Option<bool> {
    let (false_label, true_label) = labels;
    if let [single] = tokens {
        if single.eq_ignore_ascii_case("true") || *single == "1" {
            return Some(true);
        }
        if single.eq_ignore_ascii_case("false") || *single == "0" {
            return Some(false);
        }
    }
    if matches_words(true_label, tokens) {
        Some(true)
    } else if matches_words(false_label, tokens) {
        Some(false)
    } else {
        None
    }
}

/// Split `yyyy-mm-dd` into its fields (no calendar validation)
pub fn parse_date(token: &str) -> Option<(u16, u8, u8)> {
    let mut parts = token.split('-');
    let year = parts.next().filter(|p| p.len() == 4)?.parse().ok()?;
    let month = parts.next().filter(|p| p.len() <= 2)?.parse().ok()?;
    let day = parts.next().filter(|p| p.len() <= 2)?.parse().ok()?;
    parts.next().is_none().then_some((year, month, day))
}

/// Check if a token looks like a date (`dddd-...`), valid or not
pub fn looks_like_date(token: &str) -> bool {
    token.contains('-') && token.starts_with(|c: char| c.is_ascii_digit())
}

/// Split `hh:mm[:ss]` into its fields (no range validation)
pub fn parse_time(token: &str) -> Option<(u8, u8, u8)> {
    let mut parts = token.split(':');
    let hour = parts.next().filter(|p| (1..=2).contains(&p.len()))?.parse().ok()?;
    let minute = parts.next().filter(|p| p.len() == 2)?.parse().ok()?;
    let second = match parts.next() {
        Some(p) if p.len() == 2 => p.parse().ok()?,
        Some(_) => return None,
        None => 0,
    };
    parts.next().is_none().then_some((hour, minute, second))
}

/// Check if a token looks like a time of day (`..:..`), valid or not
pub fn looks_like_time(token: &str) -> bool {
    token.contains(':')
}

/// Write `value` with at most `max_decimals` decimals, trailing zeros removed.
///
/// `21.5` stays `21.5`, `100.0` becomes `100`.
pub fn write_decimal(f: &mut fmt::Formatter<'_>, value: f64, max_decimals: usize) -> fmt::Result {
    let mut text: heapless::String<48> = heapless::String::new();
    if write!(text, "{value:.max_decimals$}").is_err() {
        // Too long for the buffer (huge f32 values), fall back to plain formatting
        return write!(f, "{value}");
    }
    let mut trimmed = text.as_str();
    if trimmed.contains('.') {
        trimmed = trimmed.trim_end_matches('0').trim_end_matches('.');
    }
    if trimmed == "-0" {
        trimmed = "0";
    }
    f.write_str(trimmed)
}
