//! Bulls and cows feedback calculation and representation
//!
//! Feedback scores a guess against a secret:
//! - bulls = digits in the right position
//! - cows  = shared digits in the wrong position
//!
//! Because every code has pairwise-distinct digits, cows are simply the size of
//! the shared-digit set minus the bulls.

use super::{CODE_LENGTH, Code};
use std::fmt;

const MAX_SCORE: u8 = CODE_LENGTH as u8;

/// Bulls/cows feedback for a guess
///
/// Invariant: `bulls <= 4`, `cows <= 4` and `bulls + cows <= 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    bulls: u8,
    cows: u8,
}

/// Error type for invalid feedback values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    BullsOutOfRange(u8),
    CowsOutOfRange(u8),
    SumTooLarge { bulls: u8, cows: u8 },
    Unparseable(String),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BullsOutOfRange(b) => write!(f, "Bulls must be between 0 and 4, got {b}"),
            Self::CowsOutOfRange(c) => write!(f, "Cows must be between 0 and 4, got {c}"),
            Self::SumTooLarge { bulls, cows } => {
                write!(f, "Bulls + cows must not exceed 4, got {bulls} + {cows}")
            }
            Self::Unparseable(s) => {
                write!(f, "Invalid feedback '{s}': expected two digits like '21' or '2 1'")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// All four digits in place
    pub const SOLVED: Self = Self {
        bulls: MAX_SCORE,
        cows: 0,
    };

    /// Create feedback from raw counts, validating the ranges
    ///
    /// # Errors
    /// Returns `FeedbackError` if either count exceeds 4 or their sum exceeds 4.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Feedback;
    ///
    /// let feedback = Feedback::new(1, 2).unwrap();
    /// assert_eq!(feedback.bulls(), 1);
    /// assert_eq!(feedback.cows(), 2);
    ///
    /// assert!(Feedback::new(3, 2).is_err());
    /// assert!(Feedback::new(5, 0).is_err());
    /// ```
    pub const fn new(bulls: u8, cows: u8) -> Result<Self, FeedbackError> {
        if bulls > MAX_SCORE {
            return Err(FeedbackError::BullsOutOfRange(bulls));
        }
        if cows > MAX_SCORE {
            return Err(FeedbackError::CowsOutOfRange(cows));
        }
        if bulls + cows > MAX_SCORE {
            return Err(FeedbackError::SumTooLarge { bulls, cows });
        }
        Ok(Self { bulls, cows })
    }

    /// Score `guess` against `secret`
    ///
    /// Symmetric in its arguments, and `calculate(a, a)` is always
    /// [`Feedback::SOLVED`].
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Code, Feedback};
    ///
    /// let guess = Code::new("1234").unwrap();
    /// let secret = Code::new("1256").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.bulls(), 2);
    /// assert_eq!(feedback.cows(), 0);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        let bulls = guess
            .digits()
            .iter()
            .zip(secret.digits())
            .filter(|(g, s)| g == s)
            .count() as u8;

        let shared = (guess.mask() & secret.mask()).count_ones() as u8;

        Self {
            bulls,
            cows: shared - bulls,
        }
    }

    #[inline]
    #[must_use]
    pub const fn bulls(self) -> u8 {
        self.bulls
    }

    #[inline]
    #[must_use]
    pub const fn cows(self) -> u8 {
        self.cows
    }

    /// Check if this feedback ends the game (4 bulls)
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.bulls == MAX_SCORE
    }

    /// Parse feedback typed by a user
    ///
    /// Accepts `"21"`, `"2 1"`, `"2,1"` and `"2b1c"` style input (bulls first).
    ///
    /// # Errors
    /// Returns `FeedbackError::Unparseable` if the text does not contain exactly
    /// two digits (a minus sign counts as garbage), or a range error if the
    /// digits are not valid feedback.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Feedback;
    ///
    /// assert_eq!(Feedback::parse("2 1").unwrap(), Feedback::new(2, 1).unwrap());
    /// assert_eq!(Feedback::parse("40").unwrap(), Feedback::SOLVED);
    /// assert!(Feedback::parse("abc").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let digits: Vec<u8> = s
            .chars()
            .filter(|c| !matches!(c, ' ' | ',' | '/' | 'b' | 'B' | 'c' | 'C'))
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<_>>()
            .ok_or_else(|| FeedbackError::Unparseable(s.to_string()))?;

        match digits.as_slice() {
            &[bulls, cows] => Self::new(bulls, cows),
            _ => Err(FeedbackError::Unparseable(s.to_string())),
        }
    }

    /// Enumerate every valid feedback value ordered by bulls, then cows
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=MAX_SCORE).flat_map(|bulls| {
            (0..=MAX_SCORE - bulls).map(move |cows| Self { bulls, cows })
        })
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B {}C", self.bulls, self.cows)
    }
}
