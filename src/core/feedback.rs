//! Feedback computation and representation
//!
//! Feedback is the per-position result of comparing a guess against a target:
//! - 0 = Absent (letter not matched anywhere)
//! - 1 = Misplaced (letter matched an unconsumed target letter elsewhere)
//! - 2 = Exact (letter in the correct position)
//!
//! A feedback of length L is also a base-3 number in `0..3^L`, position 0
//! being the least-significant trit. The encoding exists so the full feedback
//! space can be enumerated deterministically.

use super::Word;
use std::fmt;

/// Longest feedback whose code fits in a `u64` (3^40 < 2^64)
pub const MAX_ENCODED_LENGTH: usize = 40;

/// Outcome for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Mark {
    Absent = 0,
    Misplaced = 1,
    Exact = 2,
}

impl Mark {
    /// Symbol for a raw value, or `None` if the value is not 0, 1 or 2
    #[must_use]
    pub const fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Absent),
            1 => Some(Self::Misplaced),
            2 => Some(Self::Exact),
            _ => None,
        }
    }

    /// Trit value of this symbol
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    const fn from_trit(trit: u64) -> Self {
        match trit {
            2 => Self::Exact,
            1 => Self::Misplaced,
            _ => Self::Absent,
        }
    }

    const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '2' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '1' | '🟨' => Some(Self::Misplaced),
            '-' | '_' | '.' | 'X' | 'x' | '0' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    const fn letter(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Misplaced => 'Y',
            Self::Absent => '-',
        }
    }

    const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error type for feedback that cannot be constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// Requested length was zero
    InvalidLength,
    /// Code does not fit in the requested number of trits
    CodeOutOfRange { code: u64, len: usize },
    /// Character with no feedback meaning
    InvalidSymbol(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => write!(f, "Feedback length must be a positive integer"),
            Self::CodeOutOfRange { code, len } => {
                write!(f, "Feedback code {code} does not fit in {len} positions")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Invalid feedback symbol '{ch}' (use G/Y/- or 🟩🟨⬜)")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Feedback for one guess, position by position
///
/// Equality is structural: two feedbacks are equal iff their marks are equal
/// at every position. Every constructed value has at least one position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    marks: Vec<Mark>,
}

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Returns `None` if the words differ in length.
    ///
    /// # Algorithm
    /// 1. Exact pass: equal letters at equal positions are Exact and consume
    ///    that target position.
    /// 2. Misplaced pass: every remaining guess position consumes the
    ///    lowest-index unconsumed target position holding the same letter,
    ///    if any, and becomes Misplaced.
    ///
    /// Each target letter is consumed at most once, which is what scores
    /// repeated letters correctly.
    ///
    /// # Examples
    /// ```
    /// use wordle_variance::core::{Feedback, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("erase").unwrap();
    /// let feedback = Feedback::compute(&guess, &target).unwrap();
    ///
    /// // S(misplaced) P(absent) E(misplaced) E(misplaced) D(absent)
    /// assert_eq!(feedback.to_letters(), "Y-YY-");
    /// assert_eq!(feedback.code(), Some(37));
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, target: &Word) -> Option<Self> {
        if guess.len() != target.len() {
            return None;
        }

        let guess = guess.as_bytes();
        let target = target.as_bytes();
        let mut marks = vec![Mark::Absent; guess.len()];
        let mut consumed = vec![false; target.len()];

        for (i, (g, t)) in guess.iter().zip(target).enumerate() {
            if g == t {
                marks[i] = Mark::Exact;
                consumed[i] = true;
            }
        }

        for (i, &letter) in guess.iter().enumerate() {
            if marks[i] == Mark::Exact {
                continue;
            }
            if let Some(j) = (0..target.len()).find(|&j| !consumed[j] && target[j] == letter) {
                marks[i] = Mark::Misplaced;
                consumed[j] = true;
            }
        }

        Some(Self { marks })
    }

    /// Build feedback from externally supplied values
    ///
    /// Values that are not valid symbols are skipped, collection stops once
    /// `len` valid values are found, and a short result is padded with Absent.
    ///
    /// # Errors
    /// Returns `FeedbackError::InvalidLength` if `len` is zero.
    ///
    /// # Examples
    /// ```
    /// use wordle_variance::core::Feedback;
    ///
    /// let feedback = Feedback::from_raw([2, 7, 1, -1], 5).unwrap();
    /// assert_eq!(feedback.to_letters(), "GY---");
    /// assert!(Feedback::from_raw([2, 2], 0).is_err());
    /// ```
    pub fn from_raw<I>(values: I, len: usize) -> Result<Self, FeedbackError>
    where
        I: IntoIterator<Item = i64>,
    {
        if len == 0 {
            return Err(FeedbackError::InvalidLength);
        }

        let mut marks: Vec<Mark> = values
            .into_iter()
            .filter_map(Mark::from_value)
            .take(len)
            .collect();
        marks.resize(len, Mark::Absent);

        Ok(Self { marks })
    }

    /// Feedback of `len` Exact marks
    ///
    /// # Errors
    /// Returns `FeedbackError::InvalidLength` if `len` is zero.
    pub fn solved(len: usize) -> Result<Self, FeedbackError> {
        if len == 0 {
            return Err(FeedbackError::InvalidLength);
        }
        Ok(Self {
            marks: vec![Mark::Exact; len],
        })
    }

    /// Number of distinct feedbacks of length `len` (3^len)
    ///
    /// Returns `None` if the count overflows a `u64`.
    #[must_use]
    pub fn space_size(len: usize) -> Option<u64> {
        3u64.checked_pow(u32::try_from(len).ok()?)
    }

    /// Decode a base-3 code into a feedback of length `len`
    ///
    /// Missing high trits decode as Absent.
    ///
    /// # Errors
    /// Returns `FeedbackError::InvalidLength` if `len` is zero, and
    /// `FeedbackError::CodeOutOfRange` if `code >= 3^len`.
    pub fn decode(code: u64, len: usize) -> Result<Self, FeedbackError> {
        if len == 0 {
            return Err(FeedbackError::InvalidLength);
        }
        if let Some(size) = Self::space_size(len)
            && code >= size
        {
            return Err(FeedbackError::CodeOutOfRange { code, len });
        }
        Ok(Self::decode_unchecked(code, len))
    }

    fn decode_unchecked(mut code: u64, len: usize) -> Self {
        let mut marks = Vec::with_capacity(len);
        for _ in 0..len {
            marks.push(Mark::from_trit(code % 3));
            code /= 3;
        }
        Self { marks }
    }

    /// Iterate every feedback of length `len` in code order
    ///
    /// # Errors
    /// Returns `FeedbackError::InvalidLength` if `len` is zero or the space
    /// is too large to enumerate with `u64` codes.
    pub fn all(len: usize) -> Result<impl Iterator<Item = Self>, FeedbackError> {
        if len == 0 || len > MAX_ENCODED_LENGTH {
            return Err(FeedbackError::InvalidLength);
        }
        let size = Self::space_size(len).ok_or(FeedbackError::InvalidLength)?;
        Ok((0..size).map(move |code| Self::decode_unchecked(code, len)))
    }

    /// Base-3 code of this feedback
    ///
    /// Returns `None` when the feedback is longer than [`MAX_ENCODED_LENGTH`].
    #[must_use]
    pub fn code(&self) -> Option<u64> {
        self.marks.iter().rev().try_fold(0u64, |acc, mark| {
            acc.checked_mul(3)?.checked_add(u64::from(mark.value()))
        })
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Always false for constructed values
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Marks in position order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Check if every position is Exact
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|&m| m == Mark::Exact)
    }

    /// Count the positions carrying `mark`
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }

    /// Compact letter form, e.g. `"GY--G"`
    #[must_use]
    pub fn to_letters(&self) -> String {
        self.marks.iter().map(|m| m.letter()).collect()
    }

    /// Emoji form, e.g. `"🟩🟨⬜⬜🟩"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|m| m.emoji()).collect()
    }
}

/// Displays the letter form, e.g. `GY--G`
impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_letters())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    /// Parse a feedback string like `"GY-G-"` or `"🟩🟨⬜🟩⬜"`
    ///
    /// The length of the string sets the feedback length.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks = s
            .trim()
            .chars()
            .map(|ch| Mark::from_char(ch).ok_or(FeedbackError::InvalidSymbol(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        if marks.is_empty() {
            return Err(FeedbackError::InvalidLength);
        }

        Ok(Self { marks })
    }
}
