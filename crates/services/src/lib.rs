#![forbid(unsafe_code)]

pub mod browse_service;
pub mod error;
pub mod quiz;

pub use vocab_core::Clock;

pub use browse_service::{BrowseService, BrowseSnapshot};
pub use error::{BrowseError, QuizError};

pub use quiz::{AnswerFeedback, FinalScore, QuizProgress, QuizQuestion, QuizSession};
