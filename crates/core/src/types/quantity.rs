//! Quantity coercion at the cart boundary.
//!
//! Add-to-cart callers pass quantities from form fields, query strings, and
//! programmatic calls, so the raw input may be an integer, a float, text, or
//! absent entirely. The cart never rejects a quantity; everything funnels
//! through [`QuantityInput::coerce`] and comes out as a positive integer.

/// Raw quantity input prior to coercion.
///
/// ## Coercion rules
///
/// - Integers below 1 floor at 1.
/// - Floats truncate toward zero, then floor at 1; non-finite values
///   default to 1.
/// - Text parses a leading optional-sign integer prefix (`"12abc"` is 12);
///   anything unparseable defaults to 1.
/// - Missing input defaults to 1.
///
/// ## Examples
///
/// ```
/// use pomelo_core::QuantityInput;
///
/// assert_eq!(QuantityInput::from(3).coerce(), 3);
/// assert_eq!(QuantityInput::from(-7).coerce(), 1);
/// assert_eq!(QuantityInput::from("abc").coerce(), 1);
/// assert_eq!(QuantityInput::from(3.9).coerce(), 3);
/// assert_eq!(QuantityInput::Missing.coerce(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityInput {
    /// An integer quantity.
    Int(i64),
    /// A floating-point quantity.
    Float(f64),
    /// A textual quantity, parsed leniently.
    Text(String),
    /// No quantity supplied.
    Missing,
}

impl QuantityInput {
    /// Coerce the raw input into a positive integer quantity.
    ///
    /// Never fails; invalid input becomes 1.
    #[must_use]
    pub fn coerce(&self) -> u32 {
        match self {
            Self::Int(n) => clamp_positive(*n),
            Self::Float(f) => {
                if f.is_finite() {
                    // Truncation matches integer-parse semantics for floats.
                    clamp_positive(*f as i64)
                } else {
                    1
                }
            }
            Self::Text(s) => parse_leading_int(s).map_or(1, clamp_positive),
            Self::Missing => 1,
        }
    }
}

/// Floor at 1 and saturate into `u32` range.
fn clamp_positive(n: i64) -> u32 {
    if n < 1 {
        1
    } else {
        u32::try_from(n).unwrap_or(u32::MAX)
    }
}

/// Parse a leading optional-sign integer prefix, ignoring trailing garbage.
fn parse_leading_int(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    // Overflow on absurdly long digit strings saturates rather than failing.
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

impl From<i64> for QuantityInput {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for QuantityInput {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for QuantityInput {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for QuantityInput {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for QuantityInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for QuantityInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<Self>> From<Option<T>> for QuantityInput {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Missing, Into::into)
    }
}
