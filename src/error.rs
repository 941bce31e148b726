//! Error types for DPT operations following M-ERRORS-CANONICAL-STRUCTS guideline.
//!
//! This module provides structured error types with backtraces (when std is enabled)
//! and helper methods for error information. Every error produced while
//! decoding or encoding a datapoint carries enough context (DPT identifier,
//! offending bytes or text, bounds) to build an actionable message.

use core::fmt::{self, Write as _};

#[cfg(feature = "std")]
use std::backtrace::Backtrace;

use crate::dpt::charset::Charset;

/// Result type alias for KNX DPT operations.
pub type Result<T> = core::result::Result<T, KnxError>;

/// Maximum number of offending bytes kept in a [`BytesError`].
pub const MAX_CONTEXT_BYTES: usize = 16;
/// Maximum number of characters of offending input kept in an error.
pub const MAX_CONTEXT_TEXT: usize = 48;

/// Offending bytes captured by an error (truncated).
pub type ContextBytes = heapless::Vec<u8, MAX_CONTEXT_BYTES>;
/// Offending text captured by an error (truncated).
pub type ContextText = heapless::String<MAX_CONTEXT_TEXT>;

// =============================================================================
// Error Kind Enums (Internal)
// =============================================================================

/// Argument error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum ArgumentErrorKind {
    Null,
    Illegal(&'static str),
    IndexOutOfBounds { index: usize, len: usize },
}

/// Syntax error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum SyntaxErrorKind {
    Incompatible,
    Unsupported,
    MissingDate,
    InvalidDate,
    MissingTime,
    InvalidTime,
    TooLong { capacity: usize },
}

// =============================================================================
// Main Error Type
// =============================================================================

/// KNX DPT error types.
///
/// This is the main error type returned by all codec operations.
/// It contains a backtrace (when std feature is enabled) and detailed
/// error information through helper methods.
#[derive(Debug)]
pub enum KnxError {
    /// Missing or illegal argument (null input, duplicate ordinal, bad index)
    Argument(ArgumentError),
    /// Raw payload not accepted by the codec (length or content)
    Bytes(BytesError),
    /// Textual input rejected, or the codec has no textual form
    Syntax(SyntaxError),
    /// Value outside the closed range of the codec
    Range(RangeError),
    /// No enumeration entry matches the given ordinal or name
    Enum(EnumError),
    /// Text cannot be represented in the codec's charset
    Charset(CharsetError),
    /// Caller supplied buffer cannot hold the encoded payload
    BufferTooSmall,
}

// =============================================================================
// Structured Error Types
// =============================================================================

/// Argument error with optional backtrace
#[derive(Debug)]
pub struct ArgumentError {
    kind: ArgumentErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl ArgumentError {
    pub(crate) fn new(kind: ArgumentErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if a required argument was absent
    pub fn is_null(&self) -> bool {
        matches!(self.kind, ArgumentErrorKind::Null)
    }

    /// Check if the argument was present but not acceptable
    pub fn is_illegal(&self) -> bool {
        matches!(self.kind, ArgumentErrorKind::Illegal(_))
    }

    /// Check if an index was outside its valid range
    pub fn is_index_out_of_bounds(&self) -> bool {
        matches!(self.kind, ArgumentErrorKind::IndexOutOfBounds { .. })
    }
}

/// Incompatible bytes error with optional backtrace
#[derive(Debug)]
pub struct BytesError {
    id: &'static str,
    data: ContextBytes,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl BytesError {
    pub(crate) fn new(id: &'static str, data: &[u8]) -> Self {
        Self {
            id,
            data: data.iter().copied().take(MAX_CONTEXT_BYTES).collect(),
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Identifier of the DPT that rejected the bytes
    pub fn dpt_id(&self) -> &'static str {
        self.id
    }

    /// The rejected bytes (truncated to [`MAX_CONTEXT_BYTES`])
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Syntax error with optional backtrace
#[derive(Debug)]
pub struct SyntaxError {
    kind: SyntaxErrorKind,
    id: &'static str,
    input: ContextText,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl SyntaxError {
    pub(crate) fn new(kind: SyntaxErrorKind, id: &'static str, args: &[&str]) -> Self {
        Self {
            kind,
            id,
            input: context_text(args),
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Identifier of the DPT that rejected the input
    pub fn dpt_id(&self) -> &'static str {
        self.id
    }

    /// The rejected input, tokens joined by a single space (truncated)
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Check if the codec has no textual form at all
    pub fn is_unsupported(&self) -> bool {
        matches!(self.kind, SyntaxErrorKind::Unsupported)
    }

    /// Check if a required date token was missing
    pub fn is_missing_date(&self) -> bool {
        matches!(self.kind, SyntaxErrorKind::MissingDate)
    }

    /// Check if the date token was malformed
    pub fn is_invalid_date(&self) -> bool {
        matches!(self.kind, SyntaxErrorKind::InvalidDate)
    }

    /// Check if a required time token was missing
    pub fn is_missing_time(&self) -> bool {
        matches!(self.kind, SyntaxErrorKind::MissingTime)
    }

    /// Check if the time token was malformed
    pub fn is_invalid_time(&self) -> bool {
        matches!(self.kind, SyntaxErrorKind::InvalidTime)
    }

    /// Check if the text exceeds the codec capacity
    pub fn is_too_long(&self) -> bool {
        matches!(self.kind, SyntaxErrorKind::TooLong { .. })
    }
}

/// Out of range error with optional backtrace
#[derive(Debug)]
pub struct RangeError {
    id: &'static str,
    value: f64,
    lower: f64,
    upper: f64,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl RangeError {
    pub(crate) fn new(id: &'static str, value: f64, lower: f64, upper: f64) -> Self {
        Self {
            id,
            value,
            lower,
            upper,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Identifier of the DPT whose range was violated
    pub fn dpt_id(&self) -> &'static str {
        self.id
    }

    /// The offending value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Inclusive lower bound
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Inclusive upper bound
    pub fn upper(&self) -> f64 {
        self.upper
    }
}

/// Enumeration lookup error with optional backtrace
#[derive(Debug)]
pub struct EnumError {
    id: &'static str,
    input: ContextText,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl EnumError {
    pub(crate) fn new(id: &'static str, input: ContextText) -> Self {
        Self {
            id,
            input,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Identifier of the enumeration DPT
    pub fn dpt_id(&self) -> &'static str {
        self.id
    }

    /// The ordinal or name that did not match
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Charset error with optional backtrace
#[derive(Debug)]
pub struct CharsetError {
    id: &'static str,
    charset: Charset,
    character: char,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl CharsetError {
    pub(crate) fn new(id: &'static str, charset: Charset, character: char) -> Self {
        Self {
            id,
            charset,
            character,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Identifier of the string DPT
    pub fn dpt_id(&self) -> &'static str {
        self.id
    }

    /// Charset the text had to be encoded in
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// First character that could not be encoded
    pub fn character(&self) -> char {
        self.character
    }
}

// =============================================================================
// Convenience Constructors for KnxError
// =============================================================================

impl KnxError {
    // Argument errors
    pub(crate) fn null_argument() -> Self {
        Self::Argument(ArgumentError::new(ArgumentErrorKind::Null))
    }

    pub(crate) fn illegal_argument(reason: &'static str) -> Self {
        Self::Argument(ArgumentError::new(ArgumentErrorKind::Illegal(reason)))
    }

    pub(crate) fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::Argument(ArgumentError::new(ArgumentErrorKind::IndexOutOfBounds { index, len }))
    }

    // Payload errors
    pub(crate) fn incompatible_bytes(id: &'static str, data: &[u8]) -> Self {
        Self::Bytes(BytesError::new(id, data))
    }

    // Syntax errors
    pub(crate) fn incompatible_syntax(id: &'static str, args: &[&str]) -> Self {
        Self::Syntax(SyntaxError::new(SyntaxErrorKind::Incompatible, id, args))
    }

    pub(crate) fn unsupported_syntax(id: &'static str, args: &[&str]) -> Self {
        Self::Syntax(SyntaxError::new(SyntaxErrorKind::Unsupported, id, args))
    }

    pub(crate) fn syntax(kind: SyntaxErrorKind, id: &'static str, args: &[&str]) -> Self {
        Self::Syntax(SyntaxError::new(kind, id, args))
    }

    pub(crate) fn text_too_long(id: &'static str, text: &str, capacity: usize) -> Self {
        Self::syntax(SyntaxErrorKind::TooLong { capacity }, id, &[text])
    }

    // Range errors
    pub(crate) fn out_of_range(id: &'static str, value: f64, lower: f64, upper: f64) -> Self {
        Self::Range(RangeError::new(id, value, lower, upper))
    }

    // Enumeration errors
    pub(crate) fn enum_not_found(id: &'static str, args: &[&str]) -> Self {
        Self::Enum(EnumError::new(id, context_text(args)))
    }

    pub(crate) fn enum_ordinal_not_found(id: &'static str, ordinal: u8) -> Self {
        let mut input = ContextText::new();
        let written = write!(input, "{ordinal}");
        debug_assert!(written.is_ok());
        Self::Enum(EnumError::new(id, input))
    }

    // Charset errors
    pub(crate) fn charset(id: &'static str, charset: Charset, character: char) -> Self {
        Self::Charset(CharsetError::new(id, charset, character))
    }

    /// Check if a required argument was absent
    pub fn is_null_argument(&self) -> bool {
        matches!(self, KnxError::Argument(e) if e.is_null())
    }

    /// Check if an argument was rejected (duplicate ordinal, full registry, ...)
    pub fn is_illegal_argument(&self) -> bool {
        matches!(self, KnxError::Argument(e) if e.is_illegal())
    }

    /// Check if a bit or field index was out of bounds
    pub fn is_index_out_of_bounds(&self) -> bool {
        matches!(self, KnxError::Argument(e) if e.is_index_out_of_bounds())
    }

    /// Check if the raw payload was rejected
    pub fn is_incompatible_bytes(&self) -> bool {
        matches!(self, KnxError::Bytes(_))
    }

    /// Check if the textual input was rejected (any syntax error except unsupported)
    pub fn is_incompatible_syntax(&self) -> bool {
        matches!(self, KnxError::Syntax(e) if !e.is_unsupported())
    }

    /// Check if the codec has no textual form
    pub fn is_unsupported_syntax(&self) -> bool {
        matches!(self, KnxError::Syntax(e) if e.is_unsupported())
    }

    /// Check if a value was outside the codec range
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, KnxError::Range(_))
    }

    /// Check if an enumeration lookup failed
    pub fn is_enum_not_found(&self) -> bool {
        matches!(self, KnxError::Enum(_))
    }

    /// Check if text could not be represented in the codec charset
    pub fn is_charset_error(&self) -> bool {
        matches!(self, KnxError::Charset(_))
    }
}

/// Joins tokens with single spaces, keeping as much as fits.
fn context_text(args: &[&str]) -> ContextText {
    let mut text = ContextText::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 && text.push(' ').is_err() {
            return text;
        }
        for c in arg.chars() {
            if text.push(c).is_err() {
                return text;
            }
        }
    }
    text
}

// =============================================================================
// Display Implementation
// =============================================================================

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ArgumentErrorKind::Null => write!(f, "Required argument is missing"),
            ArgumentErrorKind::Illegal(reason) => write!(f, "Illegal argument: {reason}"),
            ArgumentErrorKind::IndexOutOfBounds { index, len } => {
                write!(f, "Index {index} out of bounds, valid range is [0, {len})")
            }
        }
    }
}

impl fmt::Display for BytesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DPT {} cannot decode bytes [", self.id)?;
        for (i, byte) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "0x{byte:02X}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (id, input) = (self.id, self.input.as_str());
        match self.kind {
            SyntaxErrorKind::Incompatible => write!(f, "DPT {id} cannot parse '{input}'"),
            SyntaxErrorKind::Unsupported => write!(f, "DPT {id} has no textual representation"),
            SyntaxErrorKind::MissingDate => {
                write!(f, "DPT {id}: date missing in '{input}' (expected yyyy-mm-dd)")
            }
            SyntaxErrorKind::InvalidDate => {
                write!(f, "DPT {id}: invalid date in '{input}' (expected yyyy-mm-dd)")
            }
            SyntaxErrorKind::MissingTime => {
                write!(f, "DPT {id}: time missing in '{input}' (expected hh:mm[:ss])")
            }
            SyntaxErrorKind::InvalidTime => {
                write!(f, "DPT {id}: invalid time in '{input}' (expected hh:mm[:ss])")
            }
            SyntaxErrorKind::TooLong { capacity } => {
                write!(f, "DPT {id}: '{input}' exceeds {capacity} bytes")
            }
        }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Value {} out of range [{}, {}] for DPT {}",
            self.value, self.lower, self.upper, self.id
        )
    }
}

impl fmt::Display for EnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DPT {} has no enumeration value '{}'", self.id, self.input)
    }
}

impl fmt::Display for CharsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DPT {}: character '{}' cannot be represented in {}",
            self.id, self.character, self.charset
        )
    }
}

impl fmt::Display for KnxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnxError::Argument(e) => write!(f, "Argument error: {e}"),
            KnxError::Bytes(e) => write!(f, "Incompatible bytes: {e}"),
            KnxError::Syntax(e) => write!(f, "Syntax error: {e}"),
            KnxError::Range(e) => write!(f, "Range error: {e}"),
            KnxError::Enum(e) => write!(f, "Enumeration error: {e}"),
            KnxError::Charset(e) => write!(f, "Charset error: {e}"),
            KnxError::BufferTooSmall => write!(f, "Buffer too small"),
        }

        // Note: Backtrace will be printed when std::error::Error::source() is called
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for KnxError {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            KnxError::Argument(e) => defmt::write!(f, "Argument error: {}", e.kind),
            KnxError::Bytes(e) => {
                defmt::write!(f, "DPT {} cannot decode {}", e.id, e.data.as_slice());
            }
            KnxError::Syntax(e) => {
                defmt::write!(f, "DPT {} syntax error {}: '{}'", e.id, e.kind, e.input.as_str());
            }
            KnxError::Range(e) => defmt::write!(
                f,
                "Value {} out of range [{}, {}] for DPT {}",
                e.value,
                e.lower,
                e.upper,
                e.id
            ),
            KnxError::Enum(e) => {
                defmt::write!(f, "DPT {} has no enumeration value '{}'", e.id, e.input.as_str());
            }
            KnxError::Charset(e) => {
                defmt::write!(f, "DPT {}: character {} not in {}", e.id, e.character, e.charset);
            }
            KnxError::BufferTooSmall => defmt::write!(f, "Buffer too small"),
        }
    }
}

// Implement std::error::Error for std-based applications
#[cfg(feature = "std")]
impl std::error::Error for KnxError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_error_message() {
        let err = KnxError::out_of_range("5.001", 101.0, 0.0, 100.0);
        assert!(err.is_out_of_range());
        assert_eq!(
            err.to_string(),
            "Range error: Value 101 out of range [0, 100] for DPT 5.001"
        );
    }

    #[test]
    fn test_bytes_error_message() {
        let err = KnxError::incompatible_bytes("9.001", &[0x0C, 0x38, 0xFF]);
        assert!(err.is_incompatible_bytes());
        assert_eq!(
            err.to_string(),
            "Incompatible bytes: DPT 9.001 cannot decode bytes [0x0C, 0x38, 0xFF]"
        );
    }

    #[test]
    fn test_bytes_error_truncates_context() {
        let data = [0xAAu8; 40];
        let KnxError::Bytes(e) = KnxError::incompatible_bytes("16.000", &data) else {
            panic!("expected bytes error");
        };
        assert_eq!(e.data().len(), MAX_CONTEXT_BYTES);
    }

    #[test]
    fn test_syntax_error_joins_tokens() {
        let KnxError::Syntax(e) = KnxError::incompatible_syntax("11.001", &["2023", "13", "01"])
        else {
            panic!("expected syntax error");
        };
        assert_eq!(e.input(), "2023 13 01");
        assert_eq!(e.dpt_id(), "11.001");
    }

    #[test]
    fn test_syntax_error_truncates_context() {
        let long = "x".repeat(200);
        let KnxError::Syntax(e) = KnxError::incompatible_syntax("16.000", &[long.as_str()]) else {
            panic!("expected syntax error");
        };
        assert_eq!(e.input().len(), MAX_CONTEXT_TEXT);
    }

    #[test]
    fn test_unsupported_is_not_incompatible() {
        let err = KnxError::unsupported_syntax("6.020", &["x"]);
        assert!(err.is_unsupported_syntax());
        assert!(!err.is_incompatible_syntax());
    }

    #[test]
    fn test_enum_ordinal_message() {
        let err = KnxError::enum_ordinal_not_found("20.102", 42);
        assert!(err.is_enum_not_found());
        assert_eq!(
            err.to_string(),
            "Enumeration error: DPT 20.102 has no enumeration value '42'"
        );
    }

    #[test]
    fn test_index_out_of_bounds_message() {
        let err = KnxError::index_out_of_bounds(16, 16);
        assert!(err.is_index_out_of_bounds());
        assert_eq!(
            err.to_string(),
            "Argument error: Index 16 out of bounds, valid range is [0, 16)"
        );
    }

    #[test]
    fn test_charset_message() {
        let err = KnxError::charset("4.001", Charset::Ascii, 'ä');
        assert!(err.is_charset_error());
        assert_eq!(
            err.to_string(),
            "Charset error: DPT 4.001: character 'ä' cannot be represented in US-ASCII"
        );
    }
}
