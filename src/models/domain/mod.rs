pub mod quiz;
pub mod quiz_question;
pub mod quiz_result;
pub mod session;
pub use quiz::Quiz;
pub use quiz_question::{QuizQuestion, QuizQuestionOption};
pub use quiz_result::{QuizResult, ResultSummary, ScoreTier, UserAnswer};
pub use session::{
    Notice, NoticeLevel, Progress, QuestionView, QuizOverview, SessionPhase, SessionSnapshot,
};
