use std::collections::HashSet;
use std::fmt::Display;

use crate::helpers::correct_plural_form;
use crate::model::{Guess, SecretNumber};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub bulls: usize,
    pub cows: usize,
}

impl ScoreResult {
    /// Scores `guess` against `secret`. Both sides hold unique digits, so
    /// every shared digit is either a bull or exactly one cow.
    pub fn evaluate(secret: &SecretNumber, guess: &Guess) -> Self {
        let bulls = secret
            .digits()
            .iter()
            .zip(guess.digits())
            .filter(|(s, g)| s == g)
            .count();

        let secret_digits: HashSet<u8> = secret.digits().iter().copied().collect();
        let guess_digits: HashSet<u8> = guess.digits().iter().copied().collect();
        let common = secret_digits.intersection(&guess_digits).count();

        Self {
            bulls,
            cows: common - bulls,
        }
    }

    pub fn is_solved(&self, digit_count: usize) -> bool {
        self.bulls == digit_count
    }
}

impl Display for ScoreResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}, {} {}",
            self.bulls,
            correct_plural_form(self.bulls as u64, "bull"),
            self.cows,
            correct_plural_form(self.cows as u64, "cow")
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn score(secret: &[u8], guess: &str) -> ScoreResult {
        let secret = SecretNumber::from_digits(secret);
        let guess = Guess::parse(guess, secret.len()).unwrap();
        ScoreResult::evaluate(&secret, &guess)
    }

    #[test]
    fn test_bulls_and_cows() {
        assert_eq!(score(&[1, 2, 3, 4], "1243"), ScoreResult { bulls: 2, cows: 2 });
        assert_eq!(score(&[1, 2, 3, 4], "5678"), ScoreResult { bulls: 0, cows: 0 });
        assert_eq!(score(&[1, 2, 3, 4], "4321"), ScoreResult { bulls: 0, cows: 4 });
        assert_eq!(score(&[1, 2, 3, 4], "1567"), ScoreResult { bulls: 1, cows: 0 });
    }

    #[test]
    fn test_exact_match_is_solved() {
        let result = score(&[1, 2, 3, 4], "1234");
        assert_eq!(result, ScoreResult { bulls: 4, cows: 0 });
        assert!(result.is_solved(4));
        assert!(!score(&[1, 2, 3, 4], "1243").is_solved(4));
    }

    #[test]
    fn test_score_never_exceeds_length() {
        let mut rng = StdRng::seed_from_u64(99);
        for digit_count in 1..=10 {
            for _ in 0..100 {
                let secret = SecretNumber::generate(digit_count, &mut rng).unwrap();
                let other = SecretNumber::generate(digit_count, &mut rng).unwrap();
                let guess = Guess::parse(&other.to_string(), digit_count).unwrap();

                let result = ScoreResult::evaluate(&secret, &guess);
                assert!(result.bulls + result.cows <= digit_count);

                let own = Guess::parse(&secret.to_string(), digit_count).unwrap();
                assert_eq!(
                    ScoreResult::evaluate(&secret, &own),
                    ScoreResult {
                        bulls: digit_count,
                        cows: 0
                    }
                );
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ScoreResult { bulls: 1, cows: 0 }.to_string(), "1 bull, 0 cows");
        assert_eq!(ScoreResult { bulls: 2, cows: 1 }.to_string(), "2 bulls, 1 cow");
    }
}
