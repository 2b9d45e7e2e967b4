/**
 * The quiz session state machine.
 *
 * A session owns everything about one run of the quiz: the questions chosen
 * for it, how far the user has gotten, the running score, and the log of
 * missed questions. The presentation layer drives it through `start`,
 * `current_question`, and `submit_answer`, and reads the final `report`; it
 * never mutates the session state directly.
 */
use rand::Rng;
use unicode_normalization::UnicodeNormalization;

use super::bank::QuestionBank;
use super::common::Result;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Finished,
}


/// A question the user answered incorrectly, with the answer they should
/// have given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissedQuestion {
    pub question: String,
    pub correct_answer: String,
}


/// The result of submitting one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct { session_complete: bool },
    Incorrect { correct_answer: String, session_complete: bool },
    /// The submitted answer was blank; the same question should be asked
    /// again.
    EmptyAnswer,
    /// The session has no question awaiting an answer (not started yet, or
    /// already finished).
    NotAcceptingInput,
}


/// The read-only summary of a finished session.
#[derive(Debug, Clone)]
pub struct QuizReport {
    pub final_score: usize,
    pub total: usize,
    pub missed: Vec<MissedQuestion>,
    pub time_finished: chrono::DateTime<chrono::Utc>,
}


#[derive(Debug)]
pub struct QuizSession {
    state: SessionState,
    selected_questions: Vec<String>,
    current: usize,
    score: usize,
    missed: Vec<MissedQuestion>,
}


impl QuizSession {
    pub fn new() -> Self {
        QuizSession {
            state: SessionState::NotStarted,
            selected_questions: Vec::new(),
            current: 0,
            score: 0,
            missed: Vec::new(),
        }
    }

    /// Begin a run of `n` questions sampled from `bank`. Allowed both on a
    /// fresh session and on a finished one; all progress is reset. If the
    /// bank is too small the error is propagated and the session is left in
    /// whatever state it was in.
    pub fn start<R: Rng>(
        &mut self, bank: &QuestionBank, n: usize, rng: &mut R
    ) -> Result<()> {
        let selected = bank.sample(n, rng)?;

        self.selected_questions = selected;
        self.current = 0;
        self.score = 0;
        self.missed.clear();
        self.state = SessionState::InProgress;
        Ok(())
    }

    /// The question awaiting an answer, or `None` once the session is over.
    pub fn current_question(&self) -> Option<&str> {
        if self.state == SessionState::InProgress
            && self.current < self.selected_questions.len()
        {
            Some(&self.selected_questions[self.current])
        } else {
            None
        }
    }

    /// The 1-based number of the current question, for display.
    pub fn position(&self) -> usize {
        self.current + 1
    }

    pub fn total(&self) -> usize {
        self.selected_questions.len()
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    /// Grade one answer against the bank and advance to the next question.
    /// Blank input asks for the same question again; submitting when no
    /// question is pending is a no-op. This never panics and never errors.
    pub fn submit_answer(&mut self, bank: &QuestionBank, input: &str) -> AnswerOutcome {
        let question = match self.current_question() {
            Some(question) => question.to_string(),
            None => return AnswerOutcome::NotAcceptingInput,
        };

        let guess = input.trim();
        if guess.is_empty() {
            return AnswerOutcome::EmptyAnswer;
        }

        // Sampled questions always resolve while the bank is untouched,
        // which the controller guarantees by loading before the first
        // session; a vanished entry is unanswerable, not a crash.
        let correct_answer = match bank.answer_for(&question) {
            Some(answer) => answer.to_string(),
            None => return AnswerOutcome::NotAcceptingInput,
        };

        let correct = normalize(guess) == normalize(&correct_answer);
        if correct {
            self.score += 1;
        } else {
            self.missed.push(MissedQuestion {
                question,
                correct_answer: correct_answer.clone(),
            });
        }

        self.current += 1;
        let session_complete = self.current == self.selected_questions.len();
        if session_complete {
            self.state = SessionState::Finished;
        }

        if correct {
            AnswerOutcome::Correct { session_complete }
        } else {
            AnswerOutcome::Incorrect { correct_answer, session_complete }
        }
    }

    /// The final report. Only available once every question has been
    /// answered.
    pub fn report(&self) -> Option<QuizReport> {
        if self.state != SessionState::Finished {
            return None;
        }
        Some(QuizReport {
            final_score: self.score,
            total: self.selected_questions.len(),
            missed: self.missed.clone(),
            time_finished: chrono::Utc::now(),
        })
    }
}


/// The case-insensitive, locale-independent form used to compare answers.
fn normalize(answer: &str) -> String {
    answer.to_lowercase().nfc().collect::<String>()
}


#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::super::common::QuizError;
    use super::*;

    #[test]
    fn grading_ignores_case_and_surrounding_whitespace() {
        let bank = QuestionBank::from_pairs(&[("What is the capital of France?", "Paris")]);
        let mut session = QuizSession::new();
        session.start(&bank, 1, &mut StepRng::new(0, 0)).unwrap();

        let outcome = session.submit_answer(&bank, "  paris ");
        assert_eq!(outcome, AnswerOutcome::Correct { session_complete: true });
        assert_eq!(session.score, 1);
    }

    #[test]
    fn grading_requires_an_exact_match() {
        let bank = QuestionBank::from_pairs(&[("What is the capital of France?", "Paris")]);
        let mut session = QuizSession::new();
        session.start(&bank, 1, &mut StepRng::new(0, 0)).unwrap();

        let outcome = session.submit_answer(&bank, "Pariss");
        assert_eq!(
            outcome,
            AnswerOutcome::Incorrect {
                correct_answer: s("Paris"),
                session_complete: true,
            }
        );
        assert_eq!(session.score, 0);
    }

    #[test]
    fn grading_normalizes_unicode() {
        let bank = QuestionBank::from_pairs(&[("traffic", "el tr\u{e1}fico")]);
        let mut session = QuizSession::new();
        session.start(&bank, 1, &mut StepRng::new(0, 0)).unwrap();

        // Combining accent instead of the precomposed character.
        let outcome = session.submit_answer(&bank, "el tra\u{301}fico");
        assert_eq!(outcome, AnswerOutcome::Correct { session_complete: true });
    }

    #[test]
    fn empty_answers_change_nothing() {
        let bank = QuestionBank::from_pairs(&[("a", "1"), ("b", "2")]);
        let mut session = QuizSession::new();
        session.start(&bank, 2, &mut StepRng::new(0, 0)).unwrap();
        let question_before = session.current_question().unwrap().to_string();

        for input in &["", "   "] {
            assert_eq!(session.submit_answer(&bank, input), AnswerOutcome::EmptyAnswer);
            assert_eq!(session.score, 0);
            assert_eq!(session.current, 0);
            assert_eq!(session.missed.len(), 0);
            assert_eq!(session.state, SessionState::InProgress);
            assert_eq!(session.current_question(), Some(question_before.as_str()));
        }
    }

    #[test]
    fn submitting_outside_a_session_is_a_noop() {
        let bank = QuestionBank::from_pairs(&[("a", "1")]);
        let mut session = QuizSession::new();

        assert_eq!(session.submit_answer(&bank, "1"), AnswerOutcome::NotAcceptingInput);

        session.start(&bank, 1, &mut StepRng::new(0, 0)).unwrap();
        session.submit_answer(&bank, "1");
        assert!(session.is_finished());
        assert_eq!(session.submit_answer(&bank, "1"), AnswerOutcome::NotAcceptingInput);
        assert_eq!(session.score, 1);
        assert_eq!(session.current, 1);
    }

    #[test]
    fn score_never_exceeds_position() {
        let bank = QuestionBank::from_pairs(&[
            ("a", "1"), ("b", "2"), ("c", "3"), ("d", "4"), ("e", "5"),
        ]);
        let mut session = QuizSession::new();
        session.start(&bank, 5, &mut StepRng::new(0, 0)).unwrap();

        // The constant generator selects "a" five times over.
        for input in &["1", "wrong", "1", "wrong", "1"] {
            session.submit_answer(&bank, input);
            assert!(session.score <= session.current);
            assert!(session.current <= session.total());
        }
        assert_eq!(session.score, 3);
    }

    #[test]
    fn missed_questions_are_logged_in_order() {
        let bank = QuestionBank::from_pairs(&[("a", "1"), ("b", "2"), ("c", "3")]);
        let mut session = QuizSession::new();
        session.start(&bank, 3, &mut StepRng::new(0, 0)).unwrap();

        session.submit_answer(&bank, "1");
        assert_eq!(session.missed.len(), 0);

        session.submit_answer(&bank, "nope");
        session.submit_answer(&bank, "also nope");
        assert_eq!(
            session.missed,
            vec![
                MissedQuestion { question: s("a"), correct_answer: s("1") },
                MissedQuestion { question: s("a"), correct_answer: s("1") },
            ]
        );
    }

    #[test]
    fn session_finishes_after_the_last_answer() {
        let pairs: Vec<(String, String)> = (0..10)
            .map(|i| (format!("q{:02}", i), format!("a{:02}", i)))
            .collect();
        let borrowed: Vec<(&str, &str)> = pairs
            .iter()
            .map(|(q, a)| (q.as_str(), a.as_str()))
            .collect();
        let bank = QuestionBank::from_pairs(&borrowed);
        let mut session = QuizSession::new();
        session.start(&bank, 10, &mut StepRng::new(0, 0)).unwrap();

        // The constant generator asks "q00" ten times; answer seven right
        // and three wrong.
        for i in 0..10 {
            let input = if i < 7 { "a00" } else { "wrong" };
            let outcome = session.submit_answer(&bank, input);
            let session_complete = i == 9;
            match outcome {
                AnswerOutcome::Correct { session_complete: complete } => {
                    assert_eq!(complete, session_complete);
                },
                AnswerOutcome::Incorrect { session_complete: complete, .. } => {
                    assert_eq!(complete, session_complete);
                },
                other => panic!("unexpected outcome {:?}", other),
            }
        }

        assert!(session.is_finished());
        assert_eq!(session.current_question(), None);

        let report = session.report().unwrap();
        assert_eq!(report.final_score, 7);
        assert_eq!(report.total, 10);
        assert_eq!(report.missed.len(), 3);
        for missed in report.missed.iter() {
            assert_eq!(missed.question, "q00");
            assert_eq!(missed.correct_answer, "a00");
        }
    }

    #[test]
    fn report_is_unavailable_before_the_end() {
        let bank = QuestionBank::from_pairs(&[("a", "1"), ("b", "2")]);
        let mut session = QuizSession::new();
        assert!(session.report().is_none());

        session.start(&bank, 2, &mut StepRng::new(0, 0)).unwrap();
        session.submit_answer(&bank, "1");
        assert!(session.report().is_none());

        session.submit_answer(&bank, "1");
        assert!(session.report().is_some());
    }

    #[test]
    fn a_finished_session_can_be_restarted() {
        let bank = QuestionBank::from_pairs(&[("a", "1")]);
        let mut session = QuizSession::new();
        session.start(&bank, 1, &mut StepRng::new(0, 0)).unwrap();
        session.submit_answer(&bank, "wrong");
        assert!(session.is_finished());
        assert_eq!(session.missed.len(), 1);

        session.start(&bank, 1, &mut StepRng::new(0, 0)).unwrap();
        assert_eq!(session.state, SessionState::InProgress);
        assert_eq!(session.score, 0);
        assert_eq!(session.current, 0);
        assert_eq!(session.missed.len(), 0);
        assert!(session.report().is_none());
        assert_eq!(session.current_question(), Some("a"));
    }

    #[test]
    fn a_failed_start_leaves_the_session_alone() {
        let bank = QuestionBank::from_pairs(&[("a", "1"), ("b", "2")]);
        let mut session = QuizSession::new();

        match session.start(&bank, 5, &mut StepRng::new(0, 0)) {
            Err(QuizError::InsufficientData { available, requested }) => {
                assert_eq!(available, 2);
                assert_eq!(requested, 5);
            },
            other => panic!("expected InsufficientData, got {:?}", other),
        }
        assert_eq!(session.state, SessionState::NotStarted);

        // The same applies to a restart of a finished session.
        session.start(&bank, 1, &mut StepRng::new(0, 0)).unwrap();
        session.submit_answer(&bank, "1");
        assert!(session.start(&bank, 5, &mut StepRng::new(0, 0)).is_err());
        assert!(session.is_finished());
        assert_eq!(session.report().unwrap().final_score, 1);
    }

    fn s(mystr: &str) -> String {
        String::from(mystr)
    }
}
