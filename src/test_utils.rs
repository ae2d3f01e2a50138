#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{Quiz, QuizQuestion, QuizQuestionOption};

    /// Builds a question whose options carry the given ids.
    pub fn question(id: &str, option_ids: &[&str], correct: &str, points: u32) -> QuizQuestion {
        QuizQuestion {
            id: id.to_string(),
            text: format!("Question {}", id),
            options: option_ids
                .iter()
                .map(|o| QuizQuestionOption {
                    id: o.to_string(),
                    text: format!("Option {}", o),
                })
                .collect(),
            correct_option_id: correct.to_string(),
            points,
        }
    }

    /// Two questions worth 10 and 20 points; correct options are `a` and `b`.
    pub fn sample_quiz() -> Quiz {
        Quiz {
            id: "quiz-1".to_string(),
            title: "Sample Quiz".to_string(),
            description: "Two questions".to_string(),
            questions: vec![
                question("q-1", &["a", "b", "c"], "a", 10),
                question("q-2", &["a", "b", "c"], "b", 20),
            ],
        }
    }

    /// `n` questions, question `i` worth `(i + 1) * 5` points, correct option `a`.
    pub fn quiz_with_questions(n: usize) -> Quiz {
        Quiz {
            id: format!("quiz-{}", n),
            title: format!("Quiz with {} questions", n),
            description: String::new(),
            questions: (0..n)
                .map(|i| question(&format!("q-{}", i + 1), &["a", "b"], "a", (i as u32 + 1) * 5))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_sample_quiz() {
        let quiz = sample_quiz();
        assert_eq!(quiz.questions.len(), 2);
        assert_eq!(quiz.questions[0].points, 10);
        assert_eq!(quiz.questions[1].points, 20);
    }

    #[test]
    fn test_fixtures_quiz_with_questions() {
        let quiz = quiz_with_questions(3);
        assert_eq!(quiz.questions.len(), 3);
        assert_eq!(quiz.questions[2].id, "q-3");
        assert_eq!(quiz.total_points(), 30);
    }
}
