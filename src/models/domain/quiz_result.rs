use serde::{Deserialize, Serialize};

use crate::models::domain::QuizQuestion;

/// One accepted selection. Created once per question and never changed afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserAnswer {
    pub question_id: String,
    pub selected_option_id: String,
    pub is_correct: bool,
    pub points: u32,
}

impl UserAnswer {
    pub fn grade(question: &QuizQuestion, selected_option_id: &str) -> Self {
        let is_correct = question.is_correct(selected_option_id);
        UserAnswer {
            question_id: question.id.clone(),
            selected_option_id: selected_option_id.to_string(),
            is_correct,
            points: if is_correct { question.points } else { 0 },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizResult {
    pub total_questions: usize,
    pub answered_correctly: usize,
    pub total_points: u32,
    pub earned_points: u32,
    pub user_answers: Vec<UserAnswer>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Outstanding,
    Great,
    Good,
    KeepPracticing,
}

impl ScoreTier {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => ScoreTier::Outstanding,
            70..=89 => ScoreTier::Great,
            50..=69 => ScoreTier::Good,
            _ => ScoreTier::KeepPracticing,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ScoreTier::Outstanding => "Outstanding! You're a genius!",
            ScoreTier::Great => "Great job! You know your stuff!",
            ScoreTier::Good => "Good effort! Keep learning!",
            ScoreTier::KeepPracticing => "Keep practicing! You'll get better!",
        }
    }
}

/// What the results screen shows alongside the raw totals.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResultSummary {
    pub percentage: u32,
    pub tier: ScoreTier,
    pub message: String,
}

impl QuizResult {
    /// Earned points as a rounded percentage of the total; 0 for a quiz worth nothing.
    pub fn score_percentage(&self) -> u32 {
        if self.total_points == 0 {
            return 0;
        }
        let pct = f64::from(self.earned_points) / f64::from(self.total_points) * 100.0;
        pct.round() as u32
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_percentage(self.score_percentage())
    }

    pub fn summary(&self) -> ResultSummary {
        let tier = self.tier();
        ResultSummary {
            percentage: self.score_percentage(),
            tier,
            message: tier.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::question;

    fn result(earned: u32, total: u32) -> QuizResult {
        QuizResult {
            total_questions: 1,
            answered_correctly: usize::from(earned > 0),
            total_points: total,
            earned_points: earned,
            user_answers: vec![],
        }
    }

    #[test]
    fn grade_awards_points_only_for_correct_option() {
        let q = question("q-1", &["a", "b"], "a", 20);

        let right = UserAnswer::grade(&q, "a");
        assert!(right.is_correct);
        assert_eq!(right.points, 20);

        let wrong = UserAnswer::grade(&q, "b");
        assert!(!wrong.is_correct);
        assert_eq!(wrong.points, 0);
        assert_eq!(wrong.question_id, "q-1");
        assert_eq!(wrong.selected_option_id, "b");
    }

    #[test]
    fn score_percentage_rounds() {
        assert_eq!(result(10, 30).score_percentage(), 33);
        assert_eq!(result(20, 30).score_percentage(), 67);
        assert_eq!(result(30, 30).score_percentage(), 100);
    }

    #[test]
    fn score_percentage_is_zero_for_pointless_quiz() {
        assert_eq!(result(0, 0).score_percentage(), 0);
    }

    #[test]
    fn summary_carries_percentage_tier_and_message() {
        let summary = result(19, 20).summary();

        assert_eq!(summary.percentage, 95);
        assert_eq!(summary.tier, ScoreTier::Outstanding);
        assert_eq!(summary.message, "Outstanding! You're a genius!");

        let json = serde_json::to_value(&summary).expect("summary should serialize");
        assert_eq!(json["tier"], "outstanding");
    }

    #[test]
    fn tiers_follow_percentage_thresholds() {
        assert_eq!(result(9, 10).tier(), ScoreTier::Outstanding);
        assert_eq!(result(7, 10).tier(), ScoreTier::Great);
        assert_eq!(result(5, 10).tier(), ScoreTier::Good);
        assert_eq!(result(4, 10).tier(), ScoreTier::KeepPracticing);
        assert_eq!(
            ScoreTier::Good.message(),
            "Good effort! Keep learning!"
        );
    }
}
