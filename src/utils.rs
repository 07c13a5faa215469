use once_cell::sync::Lazy;
use regex::Regex;

// Optional sign followed by the leading run of ASCII digits; anything after is ignored.
static LEADING_INT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").unwrap());

/// Reasons a custom target entry cannot be used as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetInputError {
    EmptyInput,
    NotANumber(String),
    NotPositive(i64),
    TooLarge,
}

impl std::fmt::Display for TargetInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetInputError::EmptyInput => write!(f, "Target cannot be empty"),
            TargetInputError::NotANumber(text) => write!(f, "'{}' is not a number", text),
            TargetInputError::NotPositive(v) => write!(f, "Target must be positive, got {}", v),
            TargetInputError::TooLarge => write!(f, "Target exceeds {}", i64::MAX),
        }
    }
}

impl std::error::Error for TargetInputError {}

/// Parse the integer prefix of `input`, the way a browser's `parseInt(_, 10)` does.
///
/// Leading whitespace is skipped, an optional sign is accepted, and parsing
/// stops at the first character that is not an ASCII digit. The sign is kept
/// so callers can tell "negative" apart from "not a number".
///
/// # Examples
/// ```
/// use tasbih_counter::utils::parse_leading_int;
///
/// assert_eq!(parse_leading_int(" 42 "), Ok(42));
/// assert_eq!(parse_leading_int("12abc"), Ok(12));
/// assert_eq!(parse_leading_int("3.9"), Ok(3));
/// assert_eq!(parse_leading_int("-5"), Ok(-5));
/// assert!(parse_leading_int("abc").is_err());
/// ```
pub fn parse_leading_int(input: &str) -> Result<i64, TargetInputError> {
    if input.trim().is_empty() {
        return Err(TargetInputError::EmptyInput);
    }

    let captures = LEADING_INT_REGEX
        .captures(input)
        .ok_or_else(|| TargetInputError::NotANumber(input.trim().to_string()))?;

    // Only ASCII digits were captured, so overflow is the one way this fails.
    captures[1]
        .parse::<i64>()
        .map_err(|_| TargetInputError::TooLarge)
}

/// Check that a numeric candidate is usable as a target.
pub fn validate_target(candidate: i64) -> Result<u64, TargetInputError> {
    match u64::try_from(candidate) {
        Ok(target) if target > 0 => Ok(target),
        _ => Err(TargetInputError::NotPositive(candidate)),
    }
}

/// Parse and validate free-form target text in one step.
pub fn parse_custom_target(input: &str) -> Result<u64, TargetInputError> {
    parse_leading_int(input).and_then(validate_target)
}
