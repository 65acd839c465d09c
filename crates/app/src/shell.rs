use std::io::{self, BufRead, Write};

use services::{BrowseService, BrowseSnapshot, Clock, QuizSession};

/// Interactive flashcard loop.
///
/// Commands: empty line or `n` steps forward, `p` back, `a` prints the audio
/// reference, `q` quits. Playback stays external; the shell only prints the
/// reference.
pub async fn run_browse(mut browse: BrowseService) -> io::Result<()> {
    let stdin = io::stdin();

    println!("flashcards: Enter/n next, p previous, a audio, q quit");
    print_card(&browse.current());
    prompt()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "" | "n" | "next" => match browse.next().await {
                Ok(snapshot) => print_card(&snapshot),
                Err(err) => {
                    log::warn!("cursor not persisted: {err}");
                    print_card(&browse.current());
                }
            },
            "p" | "prev" | "previous" => match browse.previous().await {
                Ok(snapshot) => print_card(&snapshot),
                Err(err) => {
                    log::warn!("cursor not persisted: {err}");
                    print_card(&browse.current());
                }
            },
            "a" | "audio" => print_audio(&browse.current()),
            "q" | "quit" | "exit" => return Ok(()),
            other => println!("unknown command: {other}"),
        }
        prompt()?;
    }

    Ok(())
}

fn print_card(snapshot: &BrowseSnapshot) {
    println!();
    println!(
        "{}    [{}]",
        snapshot.entry.source_text(),
        snapshot.progress_label()
    );
    println!("{}", snapshot.entry.target_text());
}

fn print_audio(snapshot: &BrowseSnapshot) {
    match snapshot.audio() {
        Some(audio) => println!("audio: {audio}"),
        None => println!("no audio available"),
    }
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

/// Interactive quiz loop: one question per catalog entry, in random order.
///
/// A numeric input submits that option; after the feedback an empty line
/// advances. `q` quits at either point and the running score is reported.
pub fn run_quiz(mut session: QuizSession, clock: Clock) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.is_complete() {
        let Some(question) = session.current_question() else {
            break;
        };

        let progress = session.progress();
        println!();
        println!(
            "question {} of {}: {}",
            progress.position + 1,
            progress.total,
            question.prompt
        );
        if let Some(audio) = &question.audio {
            println!("(audio: {audio})");
        }
        for (number, option) in question.options.iter().enumerate() {
            println!("  {}. {option}", number + 1);
        }

        print!("answer (1-{}, q quits): ", question.options.len());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input = line?;
        let input = input.trim();
        if input == "q" || input == "quit" {
            return Ok(());
        }

        let chosen = input
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| question.options.get(index));
        let Some(chosen) = chosen else {
            println!("pick a number between 1 and {}", question.options.len());
            continue;
        };

        match session.submit_answer(chosen) {
            Ok(feedback) if feedback.is_correct => println!("correct!"),
            Ok(feedback) => println!("wrong. correct answer: {}", feedback.correct_answer),
            Err(err) => println!("{err}"),
        }

        print!("press Enter for the next question (q quits): ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        if matches!(line?.trim(), "q" | "quit") {
            return Ok(());
        }

        if let Err(err) = session.advance(clock.now()) {
            println!("{err}");
            break;
        }
    }

    let score = session.final_score();
    println!();
    match score.percent() {
        Some(percent) => println!("final score: {} / {} ({percent}%)", score.score, score.total),
        None => println!("final score: {} / {}", score.score, score.total),
    }
    Ok(())
}
