mod progress;
mod question;
mod session;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use progress::{FinalScore, QuizProgress};
pub use question::QuizQuestion;
pub use session::{AnswerFeedback, QuizSession};
