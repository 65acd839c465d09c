use rand::Rng;
use rand::seq::SliceRandom;

use vocab_core::model::{AudioRef, Catalog, EntryIndex};

/// Maximum option count per question: the correct answer plus three
/// distractors.
const MAX_OPTIONS: usize = 4;

/// One rendered multiple-choice question.
///
/// Recomputed on demand; option content and order change per call. The
/// correct answer is not carried here, the session scores submissions
/// against the catalog itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub entry_index: EntryIndex,
    pub prompt: String,
    pub options: Vec<String>,
    pub audio: Option<AudioRef>,
}

/// Builds the question for one catalog entry.
///
/// Distractors are drawn by shuffling all other entry indices and walking
/// the result, skipping any target text equal to the correct answer or to an
/// already-taken distractor. Small catalogs simply yield fewer options,
/// never padding. The assembled option set is shuffled again before it is
/// returned.
pub(crate) fn build_question<R: Rng + ?Sized>(
    catalog: &Catalog,
    entry_index: EntryIndex,
    rng: &mut R,
) -> Option<QuizQuestion> {
    let entry = catalog.get(entry_index)?;
    let correct = entry.target_text().to_string();

    let mut candidates: Vec<EntryIndex> = catalog
        .indices()
        .filter(|index| *index != entry_index)
        .collect();
    candidates.as_mut_slice().shuffle(rng);

    let mut options = vec![correct];
    for index in candidates {
        if options.len() == MAX_OPTIONS {
            break;
        }
        let Some(candidate) = catalog.get(index) else {
            continue;
        };
        let text = candidate.target_text();
        if options.iter().any(|option| option == text) {
            continue;
        }
        options.push(text.to_string());
    }
    options.as_mut_slice().shuffle(rng);

    Some(QuizQuestion {
        entry_index,
        prompt: entry.source_text().to_string(),
        options,
        audio: entry.audio().cloned(),
    })
}
