use std::fmt::Display;

use itertools::Itertools;
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ConfigError;

pub const MAX_DIGIT_COUNT: usize = 10;

/// The hidden number of a single game: unique digits, no leading zero when
/// there is more than one digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretNumber {
    digits: Vec<u8>,
}

impl SecretNumber {
    /// Draws a secret from `rng`. Seeding the generator makes the draw
    /// reproducible.
    pub fn generate<R: Rng + ?Sized>(digit_count: usize, rng: &mut R) -> Result<Self, ConfigError> {
        if digit_count == 0 || digit_count > MAX_DIGIT_COUNT {
            return Err(ConfigError::InvalidDigitCount(digit_count));
        }

        let mut all_digits: Vec<u8> = (0..10).collect();
        all_digits.shuffle(rng);

        // one swap keeps every valid ordering equally likely
        if digit_count > 1 && all_digits[0] == 0 {
            all_digits.swap(0, 1);
        }

        all_digits.truncate(digit_count);
        trace!(target: "secret", "Secret digits: {:?}", all_digits);

        Ok(Self { digits: all_digits })
    }

    #[cfg(test)]
    pub fn from_digits(digits: &[u8]) -> Self {
        Self {
            digits: digits.to_vec(),
        }
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

impl Display for SecretNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digits.iter().join(""))
    }
}
