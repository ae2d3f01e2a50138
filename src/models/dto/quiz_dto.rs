use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::domain::{Quiz, QuizQuestion, QuizQuestionOption};

/// Quiz payload as served by the remote quiz endpoint (camelCase, question text under `question`).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDto {
	pub id: String,
	pub title: String,
	#[serde(default)]
	pub description: String,
	pub questions: Vec<QuizQuestionDto>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestionDto {
	pub id: String,
	pub question: String,
	pub options: Vec<QuizOptionDto>,
	pub correct_option_id: String,
	pub points: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuizOptionDto {
	pub id: String,
	pub text: String,
}

impl From<QuizQuestionDto> for QuizQuestion {
	fn from(dto: QuizQuestionDto) -> Self {
		QuizQuestion {
			id: dto.id,
			text: dto.question,
			options: dto
				.options
				.into_iter()
				.map(|o| QuizQuestionOption {
					id: o.id,
					text: o.text,
				})
				.collect(),
			correct_option_id: dto.correct_option_id,
			points: dto.points,
		}
	}
}

impl TryFrom<QuizDto> for Quiz {
	type Error = AppError;

	fn try_from(dto: QuizDto) -> Result<Self, Self::Error> {
		let quiz = Quiz {
			id: dto.id,
			title: dto.title,
			description: dto.description,
			questions: dto.questions.into_iter().map(QuizQuestion::from).collect(),
		};
		quiz.ensure_valid()?;
		Ok(quiz)
	}
}
