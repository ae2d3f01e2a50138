use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{Quiz, QuizQuestion, QuizQuestionOption, QuizResult, ResultSummary};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionPhase {
    Loading,
    /// Also the landing phase after a failed load, in which case no quiz is held.
    Intro,
    Presenting { question_index: usize },
    Revealing { question_index: usize },
    Completed,
}

impl SessionPhase {
    pub fn question_index(&self) -> Option<usize> {
        match self {
            SessionPhase::Presenting { question_index }
            | SessionPhase::Revealing { question_index } => Some(*question_index),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Non-fatal message for the user, e.g. a failed load that can be retried.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
            raised_at: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            raised_at: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizOverview {
    pub id: String,
    pub title: String,
    pub description: String,
    pub question_count: usize,
    pub total_points: u32,
}

impl From<&Quiz> for QuizOverview {
    fn from(quiz: &Quiz) -> Self {
        QuizOverview {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            description: quiz.description.clone(),
            question_count: quiz.question_count(),
            total_points: quiz.total_points(),
        }
    }
}

/// A question as shown to the user; the correct option is not part of it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub text: String,
    pub options: Vec<QuizQuestionOption>,
    pub points: u32,
}

impl From<&QuizQuestion> for QuestionView {
    fn from(question: &QuizQuestion) -> Self {
        QuestionView {
            id: question.id.clone(),
            text: question.text.clone(),
            options: question.options.clone(),
            points: question.points,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Progress {
    /// 1-based position of the current question.
    pub current: usize,
    pub total: usize,
    pub percent: u32,
}

impl Progress {
    pub fn new(current: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            (current as f64 / total as f64 * 100.0).round() as u32
        };
        Progress {
            current,
            total,
            percent,
        }
    }
}

/// Everything a presentation layer needs to render one moment of the session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionSnapshot {
    /// Increases with every applied transition.
    pub version: u64,
    pub run_id: Option<Uuid>,
    pub phase: SessionPhase,
    pub quiz: Option<QuizOverview>,
    pub current_question: Option<QuestionView>,
    pub progress: Option<Progress>,
    pub selected_option_id: Option<String>,
    pub reveal_answer: bool,
    pub correct_option_id: Option<String>,
    pub answered_correctly: Option<bool>,
    pub result: Option<QuizResult>,
    /// Percentage, tier and message for the results screen; present with `result`.
    pub summary: Option<ResultSummary>,
    pub notice: Option<Notice>,
}

impl SessionSnapshot {
    pub fn loading() -> Self {
        SessionSnapshot {
            version: 0,
            run_id: None,
            phase: SessionPhase::Loading,
            quiz: None,
            current_question: None,
            progress: None,
            selected_option_id: None,
            reveal_answer: false,
            correct_option_id: None,
            answered_correctly: None,
            result: None,
            summary: None,
            notice: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_serializes_with_kind_tag() {
        let json = serde_json::to_value(SessionPhase::Revealing { question_index: 2 })
            .expect("phase should serialize");
        assert_eq!(json["kind"], "revealing");
        assert_eq!(json["question_index"], 2);

        let json = serde_json::to_value(SessionPhase::Completed).expect("phase should serialize");
        assert_eq!(json["kind"], "completed");
    }

    #[test]
    fn phase_exposes_question_index_only_while_answering() {
        assert_eq!(
            SessionPhase::Presenting { question_index: 1 }.question_index(),
            Some(1)
        );
        assert_eq!(SessionPhase::Intro.question_index(), None);
        assert_eq!(SessionPhase::Completed.question_index(), None);
    }

    #[test]
    fn progress_percent() {
        assert_eq!(Progress::new(1, 4).percent, 25);
        assert_eq!(Progress::new(1, 3).percent, 33);
        assert_eq!(Progress::new(0, 0).percent, 0);
    }
}
