/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub position: usize,
    pub score: u32,
    pub is_complete: bool,
}

/// Correct-answer count over the question total.
///
/// Defined in every session state: before completion it is the running
/// score, afterwards the final one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub score: u32,
    pub total: usize,
}

impl FinalScore {
    /// Truncating percentage of correct answers, `None` for an empty session
    /// so no caller divides by zero.
    #[must_use]
    pub fn percent(&self) -> Option<u32> {
        if self.total == 0 {
            return None;
        }

        let total = u64::try_from(self.total).unwrap_or(u64::MAX);
        let percent = u64::from(self.score) * 100 / total;
        Some(u32::try_from(percent).unwrap_or(u32::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_perfect_run_is_100() {
        let score = FinalScore { score: 5, total: 5 };
        assert_eq!(score.percent(), Some(100));
    }

    #[test]
    fn percent_truncates() {
        let score = FinalScore { score: 2, total: 3 };
        assert_eq!(score.percent(), Some(66));
    }

    #[test]
    fn percent_of_zero_score_is_zero() {
        let score = FinalScore { score: 0, total: 4 };
        assert_eq!(score.percent(), Some(0));
    }

    #[test]
    fn percent_of_empty_session_is_none() {
        let score = FinalScore { score: 0, total: 0 };
        assert_eq!(score.percent(), None);
    }
}
