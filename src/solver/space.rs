//! Code space generation and the candidate set
//!
//! The code space is every ordered arrangement of 4 distinct digits, generated
//! in lexicographic order so that "first remaining candidate" is reproducible.

use crate::core::{ALPHABET_SIZE, Code};

/// Number of valid codes: 10 × 9 × 8 × 7
pub const CODE_SPACE_SIZE: usize = 5040;

/// Generate every valid code in lexicographic order
///
/// # Examples
/// ```
/// use bulls_cows::solver::{CODE_SPACE_SIZE, generate};
///
/// let codes = generate();
/// assert_eq!(codes.len(), CODE_SPACE_SIZE);
/// assert_eq!(codes[0].to_string(), "0123");
/// assert_eq!(codes[codes.len() - 1].to_string(), "9876");
/// ```
#[must_use]
pub fn generate() -> Vec<Code> {
    let mut codes = Vec::with_capacity(CODE_SPACE_SIZE);

    for a in 0..ALPHABET_SIZE {
        for b in (0..ALPHABET_SIZE).filter(|&b| b != a) {
            for c in (0..ALPHABET_SIZE).filter(|&c| c != a && c != b) {
                for d in (0..ALPHABET_SIZE).filter(|&d| d != a && d != b && d != c) {
                    // Distinct and in range by construction
                    if let Ok(code) = Code::from_digits([a, b, c, d]) {
                        codes.push(code);
                    }
                }
            }
        }
    }

    codes
}

/// Codes still consistent with every observation so far
///
/// Keeps generation order. Members are only ever removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    codes: Vec<Code>,
}

impl CandidateSet {
    /// The full code space
    #[must_use]
    pub fn full() -> Self {
        Self { codes: generate() }
    }

    /// Build a set from codes already known to be unique and ordered
    pub(crate) const fn from_codes(codes: Vec<Code>) -> Self {
        Self { codes }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// First remaining code in generation order
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<Code> {
        self.codes.first().copied()
    }

    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        // Sorted by construction, so binary search is valid
        self.codes.binary_search(code).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Code> {
        self.codes.iter()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Code] {
        &self.codes
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::full()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Code;
    type IntoIter = std::slice::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}
