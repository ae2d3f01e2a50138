use crate::errors::{AppError, AppResult};
use crate::models::domain::{Quiz, QuizResult, UserAnswer};

pub struct ScoringService;

impl ScoringService {
    /// Aggregate a finished run. Answers must cover every question, in question order.
    pub fn compute_result(quiz: &Quiz, answers: &[UserAnswer]) -> AppResult<QuizResult> {
        if answers.len() != quiz.questions.len() {
            return Err(AppError::IncompleteAnswers {
                expected: quiz.questions.len(),
                actual: answers.len(),
            });
        }

        if let Some((question, answer)) = quiz
            .questions
            .iter()
            .zip(answers)
            .find(|(q, a)| q.id != a.question_id)
        {
            return Err(AppError::InternalError(format!(
                "answer for question '{}' recorded where '{}' was expected",
                answer.question_id, question.id
            )));
        }

        Ok(QuizResult {
            total_questions: quiz.questions.len(),
            answered_correctly: answers.iter().filter(|a| a.is_correct).count(),
            total_points: quiz.total_points(),
            earned_points: answers
                .iter()
                .fold(0u32, |earned, a| earned.saturating_add(a.points)),
            user_answers: answers.to_vec(),
        })
    }
}
