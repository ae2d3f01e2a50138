use std::path::PathBuf;

use async_trait::async_trait;

use crate::{
    errors::AppResult,
    models::{domain::Quiz, dto::quiz_dto::QuizDto},
    sources::QuestionSource,
};

enum Origin {
    Memory(Quiz),
    File(PathBuf),
}

/// Serves a fixed quiz: either held in memory or read from a JSON file on every load,
/// so a corrected file is picked up by the next retry.
pub struct StaticQuizSource {
    origin: Origin,
}

impl StaticQuizSource {
    pub fn new(quiz: Quiz) -> Self {
        Self {
            origin: Origin::Memory(quiz),
        }
    }

    pub fn from_json_file(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: Origin::File(path.into()),
        }
    }
}

#[async_trait]
impl QuestionSource for StaticQuizSource {
    async fn load_quiz(&self) -> AppResult<Quiz> {
        match &self.origin {
            Origin::Memory(quiz) => {
                quiz.ensure_valid()?;
                Ok(quiz.clone())
            }
            Origin::File(path) => {
                log::info!("Reading quiz from {}", path.display());
                let raw = tokio::fs::read_to_string(path).await?;
                let payload: QuizDto = serde_json::from_str(&raw)?;
                Quiz::try_from(payload)
            }
        }
    }

    fn describe(&self) -> String {
        match &self.origin {
            Origin::Memory(quiz) => format!("memory:{}", quiz.id),
            Origin::File(path) => format!("file:{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::test_utils::fixtures::sample_quiz;

    const PAYLOAD: &str = r#"{
        "id": "file-quiz",
        "title": "From disk",
        "questions": [
            {
                "id": "q1",
                "question": "2 + 2?",
                "options": [{ "id": "a", "text": "4" }, { "id": "b", "text": "5" }],
                "correctOptionId": "a",
                "points": 1
            }
        ]
    }"#;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "quiz-session-{}-{}.json",
            name,
            uuid::Uuid::new_v4()
        ));
        std::fs::write(&path, contents).expect("temp file should be writable");
        path
    }

    #[tokio::test]
    async fn memory_source_returns_its_quiz() {
        let source = StaticQuizSource::new(sample_quiz());

        let quiz = source.load_quiz().await.expect("quiz should load");
        assert_eq!(quiz, sample_quiz());
        assert_eq!(source.describe(), "memory:quiz-1");
    }

    #[tokio::test]
    async fn memory_source_refuses_malformed_quiz() {
        let mut quiz = sample_quiz();
        quiz.questions.clear();
        let source = StaticQuizSource::new(quiz);

        let err = source.load_quiz().await.unwrap_err();
        assert!(matches!(err, AppError::MalformedQuiz(_)));
    }

    #[tokio::test]
    async fn file_source_parses_payload() {
        let path = temp_file("ok", PAYLOAD);
        let source = StaticQuizSource::from_json_file(&path);

        let quiz = source.load_quiz().await.expect("quiz should load");
        assert_eq!(quiz.id, "file-quiz");
        assert_eq!(quiz.questions[0].text, "2 + 2?");

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn missing_file_is_a_load_failure() {
        let source = StaticQuizSource::from_json_file("/definitely/not/here.json");

        let err = source.load_quiz().await.unwrap_err();
        assert!(matches!(err, AppError::LoadFailure(_)));
    }

    #[tokio::test]
    async fn garbage_file_is_a_load_failure() {
        let path = temp_file("garbage", "{ not json");
        let source = StaticQuizSource::from_json_file(&path);

        let err = source.load_quiz().await.unwrap_err();
        assert!(matches!(err, AppError::LoadFailure(_)));

        let _ = std::fs::remove_file(path);
    }
}
