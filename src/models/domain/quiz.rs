use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::errors::{AppError, AppResult};
use crate::models::domain::quiz_question::QuizQuestion;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_questions"))]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, message = "quiz has no questions"), nested)]
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    /// Checks the shape a session relies on: at least one question, unique ids at every
    /// level, every correct option present among its question's options, and a point total
    /// that fits in a `u32`.
    pub fn ensure_valid(&self) -> AppResult<()> {
        self.validate()
            .map_err(|errors| AppError::MalformedQuiz(errors.to_string()))
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Saturates instead of overflowing; `ensure_valid` rejects quizzes where that matters.
    pub fn total_points(&self) -> u32 {
        self.questions
            .iter()
            .fold(0u32, |total, q| total.saturating_add(q.points))
    }
}

fn validate_questions(quiz: &Quiz) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    if let Some(dup) = quiz.questions.iter().find(|q| !seen.insert(q.id.as_str())) {
        let mut err = ValidationError::new("duplicate_question_id");
        err.message = Some(Cow::from(format!(
            "quiz '{}' repeats question id '{}'",
            quiz.id, dup.id
        )));
        return Err(err);
    }

    let total = quiz
        .questions
        .iter()
        .try_fold(0u32, |total, q| total.checked_add(q.points));
    if total.is_none() {
        let mut err = ValidationError::new("points_overflow");
        err.message = Some(Cow::from(format!(
            "quiz '{}' is worth more than {} points",
            quiz.id,
            u32::MAX
        )));
        return Err(err);
    }

    Ok(())
}
