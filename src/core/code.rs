//! Secret code representation
//!
//! A Code is an ordered sequence of 4 pairwise-distinct decimal digits.

use std::fmt;
use std::str::FromStr;

/// Number of digits in a code
pub const CODE_LENGTH: usize = 4;

/// Size of the digit alphabet (0-9)
pub const ALPHABET_SIZE: u8 = 10;

/// A 4-digit code with pairwise-distinct digits
///
/// Stores the digits by position and a bitmask of which digits are present,
/// so shared-digit counting is a single `AND` + popcount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    digits: [u8; CODE_LENGTH],
    mask: u16,
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    NonDigit(char),
    DigitOutOfRange(u8),
    RepeatedDigit(u8),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly 4 digits, got {len} characters")
            }
            Self::NonDigit(ch) => write!(f, "Code must contain only digits, found '{ch}'"),
            Self::DigitOutOfRange(d) => write!(f, "Digit {d} is outside 0-9"),
            Self::RepeatedDigit(d) => write!(f, "Digit {d} appears more than once"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from its textual form, e.g. `"0123"`
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - Length is not exactly 4 characters
    /// - Any character is not an ASCII digit
    /// - Any digit repeats
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Code;
    ///
    /// let code = Code::new("0123").unwrap();
    /// assert_eq!(code.to_string(), "0123");
    ///
    /// assert!(Code::new("12345").is_err());
    /// assert!(Code::new("12a4").is_err());
    /// assert!(Code::new("1123").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, CodeError> {
        let text = text.trim();

        let len = text.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::InvalidLength(len));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(text.chars()) {
            let value = ch.to_digit(10).ok_or(CodeError::NonDigit(ch))?;
            *slot = value as u8;
        }

        Self::from_digits(digits)
    }

    /// Create a code from raw digit values
    ///
    /// # Errors
    /// Returns `CodeError` if a digit is outside 0-9 or repeats.
    pub fn from_digits(digits: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        let mut mask = 0u16;

        for &digit in &digits {
            if digit >= ALPHABET_SIZE {
                return Err(CodeError::DigitOutOfRange(digit));
            }

            let bit = 1u16 << digit;
            if mask & bit != 0 {
                return Err(CodeError::RepeatedDigit(digit));
            }
            mask |= bit;
        }

        Ok(Self { digits, mask })
    }

    /// Get the digits by position
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.digits
    }

    /// Get the digit at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.digits[position]
    }

    /// Check if the code contains a specific digit
    #[inline]
    #[must_use]
    pub const fn has_digit(&self, digit: u8) -> bool {
        digit < ALPHABET_SIZE && self.mask & (1 << digit) != 0
    }

    /// Bitmask of present digits (bit `d` set when digit `d` occurs)
    #[inline]
    pub(crate) const fn mask(&self) -> u16 {
        self.mask
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
