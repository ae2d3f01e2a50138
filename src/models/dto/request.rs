use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SelectOptionRequest {
    #[validate(length(min = 1, message = "question_id must not be empty"))]
    pub question_id: String,

    #[validate(length(min = 1, message = "option_id must not be empty"))]
    pub option_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatesQuery {
    #[serde(default)]
    pub since: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_option_request_requires_ids() {
        let request = SelectOptionRequest {
            question_id: String::new(),
            option_id: "a".to_string(),
        };
        assert!(request.validate().is_err());

        let request = SelectOptionRequest {
            question_id: "q1".to_string(),
            option_id: "a".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
