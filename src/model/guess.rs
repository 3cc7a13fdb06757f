use itertools::Itertools;

use crate::error::GuessError;

/// A structurally valid guess. Only `Guess::parse` builds one, so the digits
/// are unique and of the requested length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    digits: Vec<u8>,
}

impl Guess {
    /// Checks `input` against the guess rules for a `digit_count` game and
    /// reports the first one it breaks.
    pub fn parse(input: &str, digit_count: usize) -> Result<Self, GuessError> {
        if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
            return Err(GuessError::NonDigit);
        }
        // all ASCII from here, so bytes and chars line up
        if input.len() != digit_count {
            return Err(GuessError::WrongLength {
                expected: digit_count,
            });
        }
        if digit_count > 1 && input.starts_with('0') {
            return Err(GuessError::LeadingZero);
        }
        if !input.bytes().all_unique() {
            return Err(GuessError::DuplicateDigits {
                expected: digit_count,
            });
        }

        Ok(Self {
            digits: input.bytes().map(|b| b - b'0').collect(),
        })
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }
}
