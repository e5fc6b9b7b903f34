use crate::core::normalize::{normalize, strip_line_ending};
use crate::core::{CardValidator, ConfigProvider};
use crate::domain::model::{AttemptOutcome, CandidateNumber, EmptyPolicy, SessionSummary};
use crate::utils::error::{CardError, Result};
use std::io::{BufRead, Write};

/// Prompt/read/check loop. Stops on the first verified number, at end of
/// input, or once the configured attempt limit is used up.
pub struct Session<V: CardValidator, C: ConfigProvider> {
    validator: V,
    config: C,
}

impl<V: CardValidator, C: ConfigProvider> Session<V, C> {
    pub fn new(validator: V, config: C) -> Self {
        Self { validator, config }
    }

    /// Check a single raw line, line terminator already removed.
    pub fn check_line(&self, raw: &str) -> AttemptOutcome {
        let normalized = normalize(raw);

        if normalized.is_empty() && self.config.empty_policy() == EmptyPolicy::Reject {
            return AttemptOutcome::rejected(CardError::EmptyInput);
        }

        match CandidateNumber::parse(&normalized) {
            Ok(number) => AttemptOutcome::checked(self.validator.is_valid(&number)),
            Err(e) => AttemptOutcome::rejected(e),
        }
    }

    /// `output` gets the prompt and verdicts, `diagnostics` gets the reason
    /// for every rejected line.
    pub fn run<R, W, E>(
        &self,
        mut input: R,
        mut output: W,
        mut diagnostics: E,
    ) -> Result<SessionSummary>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        tracing::info!("Starting card verification session");

        let mut attempts = 0usize;
        let mut buf = Vec::new();

        loop {
            write!(output, "{}", self.config.prompt())?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(output)?;
                tracing::warn!(attempts, "Input closed before a card number was verified");
                return Err(CardError::EndOfInput { attempts });
            }
            attempts += 1;

            // 無法解碼的位元組視為輸入錯誤，不中斷迴圈
            let outcome = match std::str::from_utf8(&buf) {
                Ok(line) => self.check_line(strip_line_ending(line)),
                Err(e) => AttemptOutcome::rejected(CardError::InvalidEncoding {
                    position: e.valid_up_to(),
                }),
            };
            if let Some(reason) = &outcome.rejection {
                tracing::debug!(attempt = attempts, error = %reason, "Input rejected");
                writeln!(diagnostics, "{}", reason.user_friendly_message())?;
                diagnostics.flush()?;
            }

            write!(output, "{}\n\n", outcome.verdict.message())?;
            output.flush()?;

            if outcome.verdict.is_verified() {
                tracing::info!(attempts, "Card number verified");
                return Ok(SessionSummary {
                    attempts,
                    verified: true,
                });
            }

            tracing::debug!(attempt = attempts, "Card number not verified");

            if let Some(max) = self.config.max_attempts() {
                if attempts >= max {
                    tracing::warn!(attempts, "Attempt limit reached");
                    return Err(CardError::AttemptsExhausted { attempts });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::core::luhn::LuhnValidator;
    use crate::domain::model::Verdict;

    fn session(config: SessionConfig) -> Session<LuhnValidator, SessionConfig> {
        Session::new(LuhnValidator, config)
    }

    #[test]
    fn test_check_line_normalizes_separators() {
        let s = session(SessionConfig::default());
        for raw in ["4532015112830366", "4532-0151-1283-0366", "4532 0151 1283 0366"] {
            let outcome = s.check_line(raw);
            assert_eq!(outcome.verdict, Verdict::Verified);
            assert!(outcome.rejection.is_none());
        }
        assert_eq!(s.check_line("4532-0151-1283-0367").verdict, Verdict::NotVerified);
    }

    #[test]
    fn test_check_line_empty_policy() {
        let reject = session(SessionConfig::default());
        let outcome = reject.check_line(" - ");
        assert_eq!(outcome.verdict, Verdict::NotVerified);
        assert!(matches!(outcome.rejection, Some(CardError::EmptyInput)));

        let accept = session(SessionConfig {
            empty_policy: EmptyPolicy::Accept,
            ..SessionConfig::default()
        });
        assert_eq!(accept.check_line("").verdict, Verdict::Verified);
        assert_eq!(accept.check_line(" - ").verdict, Verdict::Verified);
    }

    #[test]
    fn test_check_line_invalid_character_position_is_after_normalizing() {
        let s = session(SessionConfig::default());
        let outcome = s.check_line("45-32x");
        assert!(matches!(
            outcome.rejection,
            Some(CardError::InvalidCharacter {
                character: 'x',
                position: 4
            })
        ));
    }

    #[test]
    fn test_run_rejects_undecodable_line_and_continues() {
        let s = session(SessionConfig::default());
        let input = b"45\xff32\n4532015112830366\n";
        let mut out = Vec::new();
        let mut diag = Vec::new();

        let summary = s.run(&input[..], &mut out, &mut diag).unwrap();
        assert_eq!(summary.attempts, 2);
        assert!(summary.verified);
        assert!(String::from_utf8(out)
            .unwrap()
            .starts_with("Enter a CC Number: Credit card is not Verified\n\n"));
        assert_eq!(String::from_utf8(diag).unwrap().lines().count(), 1);
    }

    /// 單執行緒的驗證器，用 Rc 計算呼叫次數
    struct CountingValidator {
        calls: std::rc::Rc<std::cell::Cell<usize>>,
    }

    impl CardValidator for CountingValidator {
        fn is_valid(&self, number: &CandidateNumber) -> bool {
            self.calls.set(self.calls.get() + 1);
            LuhnValidator.is_valid(number)
        }
    }

    #[test]
    fn test_run_with_single_threaded_validator() {
        let calls = std::rc::Rc::new(std::cell::Cell::new(0));
        let s = Session::new(
            CountingValidator {
                calls: calls.clone(),
            },
            SessionConfig::default(),
        );
        let input = b"12x\n1234\n79927398713\n";

        let summary = s.run(&input[..], Vec::new(), Vec::new()).unwrap();
        assert_eq!(summary.attempts, 3);
        // 被拒絕的那行不會進到驗證器
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_run_stops_on_first_verified() {
        let s = session(SessionConfig::default());
        let input = b"1234\n4532015112830366\n79927398713\n";
        let mut out = Vec::new();
        let mut diag = Vec::new();

        let summary = s.run(&input[..], &mut out, &mut diag).unwrap();
        assert_eq!(
            summary,
            SessionSummary {
                attempts: 2,
                verified: true
            }
        );
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Enter a CC Number: Credit card is not Verified\n\n\
             Enter a CC Number: Credit Card is Verified.\n\n"
        );
        assert!(diag.is_empty());
    }
}
