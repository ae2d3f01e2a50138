//! Quiz session state machine.
//!
//! Pure and synchronous: intents go in, snapshots come out. Timers and the question source are
//! driven from `SessionService`, which feeds their outcomes back in through tickets. Every
//! ticket carries the epoch it was issued in; resets bump the epoch so late outcomes are dropped.

use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{
    Notice, Progress, QuestionView, Quiz, QuizOverview, QuizResult, SessionPhase, SessionSnapshot,
    UserAnswer,
};
use crate::services::scoring_service::ScoringService;

pub const LOADED_MESSAGE: &str = "Quiz loaded successfully!";
pub const LOAD_FAILED_MESSAGE: &str = "Could not load quiz data. Please try again.";
pub const RESTARTED_MESSAGE: &str = "Quiz restarted! Good luck!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    epoch: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTicket {
    epoch: u64,
    question_index: usize,
}

impl RevealTicket {
    pub fn question_index(&self) -> usize {
        self.question_index
    }
}

/// Why an intent or timer outcome was ignored. Ignoring leaves the session untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    NoQuiz,
    WrongPhase(SessionPhase),
    QuestionMismatch { expected: String, got: String },
    AlreadyAnswered(String),
    UnknownOption(String),
    StaleTicket,
}

#[derive(Debug)]
pub struct QuizSession {
    phase: SessionPhase,
    quiz: Option<Quiz>,
    answers: Vec<UserAnswer>,
    result: Option<QuizResult>,
    notice: Option<Notice>,
    run_id: Option<Uuid>,
    epoch: u64,
    version: u64,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        QuizSession {
            phase: SessionPhase::Loading,
            quiz: None,
            answers: Vec::new(),
            result: None,
            notice: None,
            run_id: None,
            epoch: 0,
            version: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    pub fn answers(&self) -> &[UserAnswer] {
        &self.answers
    }

    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    pub fn run_id(&self) -> Option<Uuid> {
        self.run_id
    }

    /// Enter `Loading`, dropping the current quiz. Any load still in flight is superseded.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.epoch += 1;
        self.phase = SessionPhase::Loading;
        self.quiz = None;
        self.answers.clear();
        self.result = None;
        self.notice = None;
        self.run_id = None;
        self.touch();
        LoadTicket { epoch: self.epoch }
    }

    /// Apply the source's outcome. Success and failure both land in `Intro`; only success
    /// leaves a quiz behind to start.
    pub fn finish_load(&mut self, ticket: LoadTicket, outcome: AppResult<Quiz>) -> Result<(), Rejection> {
        if ticket.epoch != self.epoch || self.phase != SessionPhase::Loading {
            return Err(Rejection::StaleTicket);
        }

        match outcome.and_then(|quiz| quiz.ensure_valid().map(|_| quiz)) {
            Ok(quiz) => {
                log::info!(
                    "Quiz '{}' loaded with {} questions",
                    quiz.id,
                    quiz.question_count()
                );
                self.quiz = Some(quiz);
                self.notice = Some(Notice::success(LOADED_MESSAGE));
            }
            Err(AppError::MalformedQuiz(reason)) => {
                log::error!("Rejected malformed quiz: {}", reason);
                self.quiz = None;
                self.notice = Some(Notice::error(format!(
                    "Quiz data is malformed ({}). Please try again.",
                    reason
                )));
            }
            Err(err) => {
                log::warn!("Quiz load failed: {}", err);
                self.quiz = None;
                self.notice = Some(Notice::error(LOAD_FAILED_MESSAGE));
            }
        }

        self.answers.clear();
        self.result = None;
        self.phase = SessionPhase::Intro;
        self.touch();
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), Rejection> {
        match self.phase {
            SessionPhase::Intro | SessionPhase::Completed => {}
            other => return Err(Rejection::WrongPhase(other)),
        }
        self.reset_run()?;
        self.notice = None;
        Ok(())
    }

    pub fn restart(&mut self) -> Result<(), Rejection> {
        match self.phase {
            SessionPhase::Presenting { .. }
            | SessionPhase::Revealing { .. }
            | SessionPhase::Completed => {}
            other => return Err(Rejection::WrongPhase(other)),
        }
        self.reset_run()?;
        self.notice = Some(Notice::success(RESTARTED_MESSAGE));
        Ok(())
    }

    /// Record the answer for the presented question and move to its reveal.
    pub fn select_option(&mut self, question_id: &str, option_id: &str) -> Result<RevealTicket, Rejection> {
        let index = match self.phase {
            SessionPhase::Presenting { question_index } => question_index,
            SessionPhase::Revealing { question_index } => {
                return Err(Rejection::AlreadyAnswered(self.question_id_at(question_index)))
            }
            other => return Err(Rejection::WrongPhase(other)),
        };
        let quiz = self.quiz.as_ref().ok_or(Rejection::NoQuiz)?;
        let question = &quiz.questions[index];

        if question.id != question_id {
            return Err(Rejection::QuestionMismatch {
                expected: question.id.clone(),
                got: question_id.to_string(),
            });
        }
        if self.answers.len() > index {
            return Err(Rejection::AlreadyAnswered(question.id.clone()));
        }
        if question.option(option_id).is_none() {
            return Err(Rejection::UnknownOption(option_id.to_string()));
        }

        let answer = UserAnswer::grade(question, option_id);
        log::info!(
            "Question {} answered with '{}' (correct: {})",
            question.id,
            option_id,
            answer.is_correct
        );
        self.answers.push(answer);
        self.phase = SessionPhase::Revealing {
            question_index: index,
        };
        self.touch();

        Ok(RevealTicket {
            epoch: self.epoch,
            question_index: index,
        })
    }

    /// The reveal interval for `ticket` is over: show the next question or finish the run.
    pub fn reveal_elapsed(&mut self, ticket: RevealTicket) -> Result<(), Rejection> {
        let expected = SessionPhase::Revealing {
            question_index: ticket.question_index,
        };
        if ticket.epoch != self.epoch || self.phase != expected {
            return Err(Rejection::StaleTicket);
        }
        let quiz = self.quiz.as_ref().ok_or(Rejection::NoQuiz)?;

        let next = ticket.question_index + 1;
        if next < quiz.question_count() {
            self.phase = SessionPhase::Presenting {
                question_index: next,
            };
        } else {
            match ScoringService::compute_result(quiz, &self.answers) {
                Ok(result) => {
                    log::info!(
                        "Quiz '{}' completed: {}/{} correct, {}/{} points",
                        quiz.id,
                        result.answered_correctly,
                        result.total_questions,
                        result.earned_points,
                        result.total_points
                    );
                    self.result = Some(result);
                    self.phase = SessionPhase::Completed;
                }
                Err(err) => {
                    log::error!("Could not score quiz '{}': {}", quiz.id, err);
                    self.answers.clear();
                    self.notice = Some(Notice::error(err.to_string()));
                    self.phase = SessionPhase::Intro;
                }
            }
        }
        self.touch();
        Ok(())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let quiz = self.quiz.as_ref();
        let index = self.phase.question_index();
        let question = quiz.zip(index).and_then(|(q, i)| q.questions.get(i));
        let revealing = matches!(self.phase, SessionPhase::Revealing { .. });
        let result = self
            .result
            .as_ref()
            .filter(|_| self.phase == SessionPhase::Completed);
        let answer = index
            .filter(|_| revealing)
            .and_then(|i| self.answers.get(i));

        SessionSnapshot {
            version: self.version,
            run_id: self.run_id,
            phase: self.phase,
            quiz: quiz.map(QuizOverview::from),
            current_question: question.map(QuestionView::from),
            progress: quiz
                .zip(index)
                .map(|(q, i)| Progress::new(i + 1, q.question_count())),
            selected_option_id: answer.map(|a| a.selected_option_id.clone()),
            reveal_answer: revealing,
            correct_option_id: question
                .filter(|_| revealing)
                .map(|q| q.correct_option_id.clone()),
            answered_correctly: answer.map(|a| a.is_correct),
            result: result.cloned(),
            summary: result.map(QuizResult::summary),
            notice: self.notice.clone(),
        }
    }

    fn reset_run(&mut self) -> Result<(), Rejection> {
        if self.quiz.is_none() {
            return Err(Rejection::NoQuiz);
        }
        self.epoch += 1;
        self.answers.clear();
        self.result = None;
        self.run_id = Some(Uuid::new_v4());
        self.phase = SessionPhase::Presenting { question_index: 0 };
        self.touch();
        Ok(())
    }

    fn question_id_at(&self, index: usize) -> String {
        self.quiz
            .as_ref()
            .and_then(|q| q.questions.get(index))
            .map(|q| q.id.clone())
            .unwrap_or_default()
    }

    fn touch(&mut self) {
        self.version += 1;
    }
}
