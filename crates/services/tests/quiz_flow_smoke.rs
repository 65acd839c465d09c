use std::sync::Arc;

use services::{FinalScore, QuizSession};
use vocab_core::model::{Catalog, EntryDraft};
use vocab_core::time::fixed_now;

fn build_catalog(n: usize) -> Arc<Catalog> {
    let entries = (0..n)
        .map(|i| {
            EntryDraft::new(format!("prompt {i}"), format!("answer {i}"))
                .validate()
                .unwrap()
        })
        .collect();
    Arc::new(Catalog::new(entries))
}

#[test]
fn perfect_run_scores_full_marks() {
    let catalog = build_catalog(5);
    let mut session = QuizSession::start(Arc::clone(&catalog), fixed_now());

    while !session.is_complete() {
        let question = session.current_question().expect("question while running");
        let correct = catalog
            .get(question.entry_index)
            .unwrap()
            .target_text()
            .to_string();

        assert!(question.options.contains(&correct));
        let feedback = session.submit_answer(&correct).unwrap();
        assert!(feedback.is_correct);
        session.advance(fixed_now()).unwrap();
    }

    assert_eq!(session.final_score(), FinalScore { score: 5, total: 5 });
    assert_eq!(session.final_score().percent(), Some(100));
}

#[test]
fn every_question_of_a_pass_is_well_formed() {
    let catalog = build_catalog(8);
    let mut session = QuizSession::start(Arc::clone(&catalog), fixed_now());

    while !session.is_complete() {
        let question = session.current_question().unwrap();
        let correct = catalog.get(question.entry_index).unwrap().target_text();

        assert_eq!(question.options.len(), 4);
        let hits = question
            .options
            .iter()
            .filter(|option| option.as_str() == correct)
            .count();
        assert_eq!(hits, 1);

        let mut unique = question.options.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), question.options.len());

        session.advance(fixed_now()).unwrap();
    }
}

#[test]
fn three_entry_catalog_yields_three_options() {
    let catalog = build_catalog(3);
    let mut session = QuizSession::start(catalog, fixed_now());

    while !session.is_complete() {
        let question = session.current_question().unwrap();
        assert_eq!(question.options.len(), 3);
        session.advance(fixed_now()).unwrap();
    }
}

#[test]
fn mixed_run_counts_only_correct_submissions() {
    let catalog = build_catalog(4);
    let mut session = QuizSession::start(Arc::clone(&catalog), fixed_now());

    let mut expected = 0;
    let mut answer_correctly = true;
    while !session.is_complete() {
        let question = session.current_question().unwrap();
        let correct = catalog
            .get(question.entry_index)
            .unwrap()
            .target_text()
            .to_string();

        if answer_correctly {
            session.submit_answer(&correct).unwrap();
            expected += 1;
        } else {
            session.submit_answer("wrong on purpose").unwrap();
        }
        answer_correctly = !answer_correctly;
        session.advance(fixed_now()).unwrap();
    }

    assert_eq!(
        session.final_score(),
        FinalScore {
            score: expected,
            total: 4
        }
    );
}

#[test]
fn empty_catalog_quiz_is_complete_at_start() {
    let session = QuizSession::start(build_catalog(0), fixed_now());

    assert!(session.is_complete());
    assert_eq!(session.final_score(), FinalScore { score: 0, total: 0 });
    assert_eq!(session.final_score().percent(), None);
}

#[test]
fn new_session_supersedes_the_old_one() {
    let catalog = build_catalog(3);
    let mut first = QuizSession::start(Arc::clone(&catalog), fixed_now());
    while !first.is_complete() {
        first.advance(fixed_now()).unwrap();
    }

    let second = QuizSession::start(catalog, fixed_now());
    assert!(!second.is_complete());
    assert_eq!(second.progress().position, 0);
    assert_eq!(second.progress().score, 0);
}
