use std::time::Duration;

use async_trait::async_trait;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::Quiz, dto::quiz_dto::QuizDto},
    sources::QuestionSource,
};

pub struct HttpQuizSource {
    client: reqwest::Client,
    url: String,
}

impl HttpQuizSource {
    pub fn new(url: &str, timeout: Option<Duration>) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl QuestionSource for HttpQuizSource {
    async fn load_quiz(&self) -> AppResult<Quiz> {
        log::info!("Fetching quiz from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            log::error!("Quiz endpoint {} answered {}", self.url, status);
            return Err(AppError::LoadFailure(format!(
                "Failed to fetch quiz data: {}",
                status.as_u16()
            )));
        }

        let body = response.text().await?;
        let payload: QuizDto = serde_json::from_str(&body)?;
        Quiz::try_from(payload)
    }

    fn describe(&self) -> String {
        format!("http:{}", self.url)
    }
}
