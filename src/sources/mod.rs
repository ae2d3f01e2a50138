pub mod http_quiz_source;
pub mod question_source;
pub mod static_quiz_source;

pub use http_quiz_source::HttpQuizSource;
pub use question_source::QuestionSource;
pub use static_quiz_source::StaticQuizSource;

#[cfg(test)]
pub use question_source::MockQuestionSource;
