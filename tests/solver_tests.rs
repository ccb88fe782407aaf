//! End-to-end behaviour of the public solver API

use wordle_helper::core::{Feedback, Pattern, Word, is_consistent};
use wordle_helper::solver::{DEFAULT_OPENING, Solver, SolverConfig};
use wordle_helper::wordlists::{WORDS, loader::words_from_slice};
use wordle_helper::{InputError, SolverError};

const FIXTURE: [&str; 5] = ["crane", "slate", "sauce", "slice", "shale"];

/// Opening word every fresh solver suggests
const OPENING: &str = "crane";

fn words(list: &[&str]) -> Vec<Word> {
    words_from_slice(list)
}

fn texts(words: &[Word]) -> Vec<&str> {
    words.iter().map(Word::text).collect()
}

fn pattern(guess: &str, secret: &str) -> String {
    Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap()).to_string()
}

#[test]
fn duplicate_letter_fixtures() {
    let cases = [
        // (guess, secret, expected)
        ("speed", "erase", "10110"),
        ("mommy", "mambo", "21200"),
        ("geese", "abbey", "01000"),
        ("speed", "lever", "00120"),
        ("eerie", "shine", "00012"),
        ("robot", "floor", "11020"),
        ("llama", "hello", "11000"),
        ("crane", "slate", "00202"),
    ];

    for (guess, secret, expected) in cases {
        assert_eq!(pattern(guess, secret), expected, "{guess} vs {secret}");
    }
}

#[test]
fn first_suggestion_is_the_opening_word() {
    let solver = Solver::new(&words(&FIXTURE), false).unwrap();
    assert_eq!(DEFAULT_OPENING, OPENING);
    assert_eq!(solver.suggest_guess().map(Word::text), Some(OPENING));
}

#[test]
fn solves_slate_from_fixture() {
    let secret = Word::new("slate").unwrap();
    let mut solver = Solver::new(&words(&FIXTURE), false).unwrap();
    let mut guesses = Vec::new();

    for _ in 0..6 {
        let guess = solver.suggest_guess().cloned().expect("candidates remain");
        let observed = Pattern::calculate(&guess, &secret);
        guesses.push(guess.text().to_string());
        solver.apply_feedback(guess.text(), &observed.to_string()).unwrap();

        if observed.is_perfect() {
            break;
        }
    }

    assert!(solver.is_solved());
    assert_eq!(texts(solver.candidates()), ["slate"]);
    assert_eq!(guesses, ["crane", "slate"]);
    assert_eq!(solver.history().len(), 2);
    assert_eq!(solver.history()[0].pattern.to_string(), "00202");
}

#[test]
fn solves_every_embedded_word_within_six() {
    let vocabulary = words_from_slice(WORDS);
    let mut solver = Solver::new(&vocabulary, false).unwrap();

    for secret in vocabulary.iter().step_by(7) {
        solver.reset();
        let mut turns = 0;
        while !solver.is_solved() {
            turns += 1;
            assert!(turns <= 6, "{secret} not solved in six guesses");
            let guess = solver.suggest_guess().cloned().expect("candidates remain");
            let observed = Pattern::calculate(&guess, secret);
            solver.record(guess, observed);
        }
        assert_eq!(solver.candidates(), std::slice::from_ref(secret));
    }
}

#[test]
fn contradictory_feedback_gives_no_suggestion() {
    let mut solver = Solver::new(&words(&FIXTURE), false).unwrap();
    solver.apply_feedback("crane", "22222").unwrap();
    solver.apply_feedback("slate", "22222").unwrap();

    assert!(solver.candidates().is_empty());
    assert!(solver.suggest_guess().is_none());
}

#[test]
fn malformed_feedback_is_rejected() {
    let mut solver = Solver::new(&words(&FIXTURE), false).unwrap();

    assert_eq!(
        solver.apply_feedback("crane", "0020"),
        Err(SolverError::InvalidInput(InputError::PatternLength {
            expected: 5,
            actual: 4
        }))
    );
    assert_eq!(
        solver.apply_feedback("crane", "00a02"),
        Err(SolverError::InvalidInput(InputError::InvalidSymbol('a')))
    );
    assert!(solver.apply_feedback("cranes", "00202").is_err());
    assert!(solver.history().is_empty());
}

#[test]
fn empty_vocabulary_is_rejected() {
    assert_eq!(
        Solver::new(&[], true).unwrap_err(),
        SolverError::InvalidInput(InputError::EmptyVocabulary)
    );
}

#[test]
fn repeated_feedback_changes_nothing() {
    let mut solver = Solver::new(&words_from_slice(WORDS), false).unwrap();
    solver.apply_feedback("crane", "00102").unwrap();
    let once = solver.candidates().to_vec();

    solver.apply_feedback("crane", "00102").unwrap();
    assert_eq!(solver.candidates(), once.as_slice());
}

#[test]
fn every_survivor_is_consistent() {
    let mut solver = Solver::new(&words_from_slice(WORDS), false).unwrap();
    let guess = Word::new("stone").unwrap();
    let observed = Pattern::from_digits("10001").unwrap();

    let before = solver.candidates().len();
    solver.record(guess.clone(), observed);

    assert!(solver.candidates().len() <= before);
    assert!(!solver.candidates().is_empty());
    for word in solver.candidates() {
        assert!(is_consistent(word, &guess, observed), "{word} kept");
    }
}

#[test]
fn ties_go_to_first_word_in_pool_order() {
    // SHALE, SLICE and SLATE all split these five words perfectly
    let vocabulary = words(&["crane", "shale", "sauce", "slice", "slate"]);

    // Small set: the pool is the candidate set in order, so SHALE is seen first
    let mut solver = Solver::new(&vocabulary, false).unwrap();
    solver.apply_feedback("pygmy", "00000").unwrap();
    assert_eq!(solver.suggest_guess().map(Word::text), Some("shale"));

    // Shortlisted: the pool is ranked by letter score, which puts SLATE first
    let config = SolverConfig::new().with_pool_size(4);
    let mut solver = Solver::with_config(&vocabulary, config).unwrap();
    solver.apply_feedback("pygmy", "00000").unwrap();
    let pool: Vec<&str> = solver.evaluation_pool().iter().map(|w| w.text()).collect();
    assert_eq!(pool, ["slate", "crane", "shale", "sauce"]);
    assert_eq!(solver.suggest_guess().map(Word::text), Some("slate"));
}

#[test]
fn hard_mode_pool_keeps_confirmed_letters() {
    let vocabulary = words_from_slice(WORDS);
    let mut solver = Solver::new(&vocabulary, true).unwrap();

    for secret in vocabulary.iter().step_by(11) {
        solver.reset();
        while !solver.is_solved() && solver.history().len() < 6 {
            let guess = solver.suggest_guess().cloned().expect("candidates remain");
            let observed = Pattern::calculate(&guess, secret);
            solver.record(guess, observed);

            let pool = solver.evaluation_pool();
            for record in solver.history() {
                for (i, fb) in record.pattern.feedback().into_iter().enumerate() {
                    let letter = record.guess.char_at(i);
                    for word in &pool {
                        match fb {
                            Feedback::Correct => assert_eq!(word.char_at(i), letter),
                            Feedback::Present => assert!(word.has_letter(letter)),
                            Feedback::Absent => {}
                        }
                    }
                }
            }
        }
        assert!(solver.is_solved(), "{secret} not solved in hard mode");
    }
}

#[test]
fn hard_mode_ranks_small_pools_by_letter_score() {
    let vocabulary = words(&["crane", "shale", "sauce", "slice", "slate"]);
    let mut solver = Solver::new(&vocabulary, true).unwrap();
    solver.apply_feedback("pygmy", "00000").unwrap();

    // Fewer candidates than the pool size, still ranked; SAUCE and SLICE tie
    // on score and keep candidate order
    let pool: Vec<&str> = solver.evaluation_pool().iter().map(|w| w.text()).collect();
    assert_eq!(pool, ["slate", "crane", "shale", "sauce", "slice"]);
    assert_eq!(solver.suggest_guess().map(Word::text), Some("slate"));
}
