use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_options"))]
pub struct QuizQuestion {
    pub id: String,
    pub text: String,
    #[validate(length(min = 1, message = "question has no options"))]
    pub options: Vec<QuizQuestionOption>,
    pub correct_option_id: String,
    pub points: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestionOption {
    pub id: String,
    pub text: String,
}

impl QuizQuestion {
    pub fn option(&self, option_id: &str) -> Option<&QuizQuestionOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    pub fn is_correct(&self, option_id: &str) -> bool {
        self.correct_option_id == option_id
    }
}

/// Option ids are unique and the correct option is one of them.
fn validate_options(question: &QuizQuestion) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    if let Some(dup) = question.options.iter().find(|o| !seen.insert(o.id.as_str())) {
        let mut err = ValidationError::new("duplicate_option_id");
        err.message = Some(Cow::from(format!(
            "question '{}' repeats option id '{}'",
            question.id, dup.id
        )));
        return Err(err);
    }

    if question.option(&question.correct_option_id).is_none() {
        let mut err = ValidationError::new("correct_option_missing");
        err.message = Some(Cow::from(format!(
            "question '{}' has no option with correct id '{}'",
            question.id, question.correct_option_id
        )));
        return Err(err);
    }

    Ok(())
}
