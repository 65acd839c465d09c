use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

use rand::rng;
use rand::seq::SliceRandom;

use vocab_core::model::{Catalog, CatalogEntry, EntryIndex};

use super::progress::{FinalScore, QuizProgress};
use super::question::{self, QuizQuestion};
use crate::error::QuizError;

//
// ─── ANSWER FEEDBACK ───────────────────────────────────────────────────────────
//

/// Outcome of scoring one submission, for reveal/coloring in the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub entry_index: EntryIndex,
    pub is_correct: bool,
    pub correct_answer: String,
}

//
// ─── QUIZ SESSION ──────────────────────────────────────────────────────────────
//

/// Single-pass multiple-choice quiz over the whole catalog.
///
/// Questions come in a fresh random order each session. The session is plain
/// in-memory state: nothing is persisted, and starting a new quiz simply
/// supersedes the old one.
pub struct QuizSession {
    catalog: Arc<Catalog>,
    order: Vec<EntryIndex>,
    position: usize,
    score: u32,
    answered_current: bool,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Start a fresh session over every catalog entry, in random order.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic. An empty catalog yields a session that is already
    /// complete.
    #[must_use]
    pub fn start(catalog: Arc<Catalog>, started_at: DateTime<Utc>) -> Self {
        let mut order: Vec<EntryIndex> = catalog.indices().collect();
        let mut rng = rng();
        order.as_mut_slice().shuffle(&mut rng);

        log::debug!("quiz session started over {} entries", order.len());

        let completed_at = order.is_empty().then_some(started_at);

        Self {
            catalog,
            order,
            position: 0,
            score: 0,
            answered_current: false,
            started_at,
            completed_at,
        }
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.order.len()
    }

    /// The randomized question order.
    #[must_use]
    pub fn order(&self) -> &[EntryIndex] {
        &self.order
    }

    /// Build the question for the current position.
    ///
    /// Returns `None` once the session is complete. Option content and
    /// order are re-randomized on every call.
    #[must_use]
    pub fn current_question(&self) -> Option<QuizQuestion> {
        let (entry_index, _) = self.current_entry()?;
        let mut rng = rng();
        question::build_question(&self.catalog, entry_index, &mut rng)
    }

    /// Score the chosen option text against the current entry.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` when the session is finished and
    /// `QuizError::AlreadyAnswered` when the current question was already
    /// scored; `advance` clears that latch.
    pub fn submit_answer(&mut self, chosen: &str) -> Result<AnswerFeedback, QuizError> {
        if self.answered_current {
            return Err(QuizError::AlreadyAnswered);
        }

        let (entry_index, correct_answer) = {
            let Some((entry_index, entry)) = self.current_entry() else {
                return Err(QuizError::Completed);
            };
            (entry_index, entry.target_text().to_string())
        };

        let is_correct = chosen == correct_answer;
        if is_correct {
            self.score += 1;
        }
        self.answered_current = true;

        Ok(AnswerFeedback {
            entry_index,
            is_correct,
            correct_answer,
        })
    }

    /// Move to the next question, completing the session past the last one.
    ///
    /// Advancing an unanswered question is allowed; its point is forfeited.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` when the session is already finished.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<(), QuizError> {
        if self.is_complete() {
            return Err(QuizError::Completed);
        }

        self.position += 1;
        self.answered_current = false;
        if self.position >= self.order.len() {
            self.completed_at = Some(now);
            log::info!("quiz complete: {} / {} correct", self.score, self.order.len());
        }
        Ok(())
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.order.len(),
            position: self.position,
            score: self.score,
            is_complete: self.is_complete(),
        }
    }

    /// Score so far; final once the session is complete.
    #[must_use]
    pub fn final_score(&self) -> FinalScore {
        FinalScore {
            score: self.score,
            total: self.order.len(),
        }
    }

    fn current_entry(&self) -> Option<(EntryIndex, &CatalogEntry)> {
        let entry_index = self.order.get(self.position).copied()?;
        let entry = self.catalog.get(entry_index)?;
        Some((entry_index, entry))
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("total", &self.order.len())
            .field("position", &self.position)
            .field("score", &self.score)
            .field("answered_current", &self.answered_current)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
