use std::io::{BufRead, Write};
use std::time::Instant;

use log::{debug, info, trace};
use uuid::Uuid;

use super::console::Console;
use super::settings::Settings;
use crate::error::{GameError, GuessError};
use crate::helpers::{correct_plural_form, format_duration};
use crate::model::{AttemptRecord, Guess, ScoreResult, SecretNumber, TimerState};

pub const GUESS_PROMPT: &str = ">>> ";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    AwaitingGuess,
    Solved(AttemptRecord),
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuessOutcome {
    /// Input broke a guess rule; the attempt counter is unchanged.
    Rejected(GuessError),
    Scored(ScoreResult),
    /// Also returned, unchanged, for input arriving after the solving guess.
    Solved(AttemptRecord),
}

/// One playthrough: a secret, a valid-attempt counter and a monotonic timer.
pub struct GameSession {
    secret: SecretNumber,
    attempts: u32,
    timer: TimerState,
    state: SessionState,
    playthrough_id: Uuid,
}

impl GameSession {
    pub fn new(secret: SecretNumber) -> Self {
        let playthrough_id = Uuid::new_v4();
        debug!(
            target: "session",
            "New game; digits: {}; playthrough: {}",
            secret.len(),
            playthrough_id
        );
        Self {
            secret,
            attempts: 0,
            timer: TimerState::default(),
            state: SessionState::AwaitingGuess,
            playthrough_id,
        }
    }

    pub fn digit_count(&self) -> usize {
        self.secret.len()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn start_timer(&mut self, now: Instant) {
        self.timer = TimerState::started_at(now);
    }

    pub fn submit(&mut self, input: &str) -> GuessOutcome {
        self.submit_at(input, Instant::now())
    }

    /// Advances the state machine by one line of input received at `now`.
    pub fn submit_at(&mut self, input: &str, now: Instant) -> GuessOutcome {
        if let SessionState::Solved(record) = self.state {
            return GuessOutcome::Solved(record);
        }

        let guess = match Guess::parse(input, self.digit_count()) {
            Ok(guess) => guess,
            Err(e) => {
                trace!(target: "session", "Rejected {:?}: {:?}", input, e);
                return GuessOutcome::Rejected(e);
            }
        };

        self.attempts += 1;
        let score = ScoreResult::evaluate(&self.secret, &guess);
        trace!(target: "session", "Attempt {}: {:?}", self.attempts, score);

        if !score.is_solved(self.digit_count()) {
            return GuessOutcome::Scored(score);
        }

        self.timer = self.timer.ended(now);
        let record = AttemptRecord::new(self.attempts, self.timer.elapsed());
        info!(
            target: "session",
            "Playthrough {} solved in {} attempts, {:.3}s",
            self.playthrough_id,
            record.attempts,
            record.duration_secs
        );
        self.state = SessionState::Solved(record);
        GuessOutcome::Solved(record)
    }

    /// Runs the session on `console` until the secret is guessed.
    pub fn play<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        settings: &Settings,
    ) -> Result<AttemptRecord, GameError> {
        let separator = settings.separator_line.as_str();
        console.say("\nHi there!")?;
        console.say(separator)?;
        console.say(format!(
            "I've generated a random {} digit number for you.",
            self.digit_count()
        ))?;
        console.say("Let's play a bulls and cows game!")?;
        console.say(separator)?;
        console.say("Enter a number:")?;
        console.say(separator)?;

        self.start_timer(Instant::now());

        loop {
            console.say(format!("Attempt #{}", self.attempts + 1))?;

            let score = loop {
                let input = console.prompt(GUESS_PROMPT)?.ok_or(GameError::InputClosed)?;
                match self.submit(&input) {
                    GuessOutcome::Rejected(e) => {
                        console.say(format!("Invalid input: {} Please try again.", e))?;
                    }
                    GuessOutcome::Scored(score) => break score,
                    GuessOutcome::Solved(record) => {
                        self.announce_win(console, &record)?;
                        return Ok(record);
                    }
                }
            };

            console.say(format!("Result: {}", score))?;
            console.say(separator)?;
        }
    }

    fn announce_win<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        record: &AttemptRecord,
    ) -> Result<(), GameError> {
        console.say(format!(
            "\nCorrect, you've guessed {} in {} {}.",
            self.secret,
            record.attempts,
            correct_plural_form(record.attempts as u64, "attempt")
        ))?;
        console.say(format!(
            "This game took you {}.",
            format_duration(record.duration_secs)
        ))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::time::Duration;

    use test_context::test_context;

    use super::*;
    use crate::tests::UsingLogger;

    fn session() -> GameSession {
        GameSession::new(SecretNumber::from_digits(&[1, 2, 3, 4]))
    }

    #[test]
    fn test_scores_then_solves() {
        let mut session = session();

        assert_eq!(
            session.submit("1243"),
            GuessOutcome::Scored(ScoreResult { bulls: 2, cows: 2 })
        );
        assert_eq!(session.state(), &SessionState::AwaitingGuess);

        let outcome = session.submit("1234");
        let GuessOutcome::Solved(record) = outcome else {
            panic!("expected a solved session, got {:?}", outcome);
        };
        assert_eq!(record.attempts, 2);
        assert_eq!(session.state(), &SessionState::Solved(record));

        assert_eq!(session.submit("5678"), GuessOutcome::Solved(record));
        assert_eq!(session.attempts(), 2);
    }

    #[test]
    fn test_invalid_guesses_do_not_count() {
        let mut session = session();

        assert_eq!(
            session.submit("12a3"),
            GuessOutcome::Rejected(GuessError::NonDigit)
        );
        assert_eq!(
            session.submit("0123"),
            GuessOutcome::Rejected(GuessError::LeadingZero)
        );
        assert_eq!(session.attempts(), 0);

        assert!(matches!(session.submit("1234"), GuessOutcome::Solved(_)));
        assert_eq!(session.attempts(), 1);
    }

    #[test]
    fn test_duration_measured_from_timer_start() {
        let mut session = session();
        let start = Instant::now();
        session.start_timer(start);

        let outcome = session.submit_at("1234", start + Duration::from_secs(90));
        let GuessOutcome::Solved(record) = outcome else {
            panic!("expected a solved session, got {:?}", outcome);
        };
        assert_eq!(record.duration_secs, 90.0);
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_play_transcript(_ctx: &mut UsingLogger) {
        let settings = Settings::default();
        let input = Cursor::new("abc\n1243\n 1234 \n");
        let mut console = Console::new(input, Vec::new());

        let record = session().play(&mut console, &settings).unwrap();
        assert_eq!(record.attempts, 2);

        let output = String::from_utf8(console.into_output()).unwrap();
        let separator = "-".repeat(47);
        assert!(output.starts_with(&format!(
            "\nHi there!\n{sep}\nI've generated a random 4 digit number for you.\n\
             Let's play a bulls and cows game!\n{sep}\nEnter a number:\n{sep}\nAttempt #1\n",
            sep = separator
        )));
        assert!(output.contains(">>> Invalid input: Input must contain only digits. Please try again.\n"));
        assert!(output.contains(&format!(">>> Result: 2 bulls, 2 cows\n{}\nAttempt #2\n", separator)));
        assert!(output.contains("\nCorrect, you've guessed 1234 in 2 attempts.\n"));
        assert!(output.contains("This game took you "));
    }

    #[test]
    fn test_play_reprompts_on_undecodable_input() {
        let settings = Settings::default();
        let input = Cursor::new(b"\xff\xfe12\n1234\n".to_vec());
        let mut console = Console::new(input, Vec::new());

        let record = session().play(&mut console, &settings).unwrap();
        assert_eq!(record.attempts, 1);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains(">>> Invalid input: Input must contain only digits. Please try again.\n"));
    }

    #[test]
    fn test_play_input_closed() {
        let settings = Settings::default();
        let mut console = Console::new(Cursor::new("1243\n"), Vec::new());

        let result = session().play(&mut console, &settings);
        assert!(matches!(result, Err(GameError::InputClosed)));
    }
}
