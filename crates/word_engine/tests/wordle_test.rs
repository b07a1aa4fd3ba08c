//! Tests for the Wordle state machine.

use word_engine::{
    Game, GameError, GameStatus, Mark, PromptLine, Tile, Variant, WORDLE_TURNS, WordError,
    WordList,
};

fn wordle(word: &str) -> Game {
    let mut words = WordList::default();
    Game::new(Variant::Wordle, Some(word), None, &mut words).expect("Valid game")
}

fn tile_rows(lines: &[PromptLine]) -> Vec<&Vec<Tile>> {
    lines
        .iter()
        .filter_map(|line| match line {
            PromptLine::Tiles(row) => Some(row),
            _ => None,
        })
        .collect()
}

#[test]
fn test_fixed_turn_budget() {
    let mut words = WordList::default();
    let game = Game::new(Variant::Wordle, Some("hangs"), Some(9), &mut words).unwrap();
    assert_eq!(game.max_turns(), WORDLE_TURNS);
    assert_eq!(game.turns_remaining(), 5);
}

#[test]
fn test_explicit_word_must_be_five_letters() {
    let mut words = WordList::default();
    let result = Game::new(Variant::Wordle, Some("hangman"), None, &mut words);
    assert_eq!(
        result,
        Err(GameError::Word {
            source: WordError::WrongLength {
                expected: 5,
                actual: 7
            }
        })
    );
}

#[test]
fn test_random_word_has_width() {
    let mut words = WordList::with_seed(["cat", "hangman", "crane"], 5);
    let game = Game::new(Variant::Wordle, None, None, &mut words).unwrap();
    assert_eq!(game.answer(), "CRANE");
}

#[test]
fn test_lowercase_guess_wins() {
    let mut game = wordle("TESTS");
    let prompt = game.guess("tests");
    assert_eq!(game.status(), GameStatus::Won);
    assert!(prompt.contains("You guessed the word"));
}

#[test]
fn test_five_misses_lose() {
    let mut game = wordle("HANGS");
    let guesses = ["LAUGH", "SAINT", "HAUNT", "HANDY"];
    for guess in guesses {
        game.guess(guess);
        assert_eq!(game.status(), GameStatus::Active);
    }
    let prompt = game.guess("BACKS");
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.turns_remaining(), 0);
    assert!(prompt.contains("You are out of turns: game over"));
    assert!(prompt.contains("Word: H A N G S"));
    let rows = tile_rows(prompt.lines());
    assert_eq!(rows.len(), WORDLE_TURNS as usize);
    assert!(!rows.iter().any(|row| row.iter().all(|t| t.mark() == Some(Mark::Exact))));
}

#[test]
fn test_wrong_length_uses_no_turn() {
    let mut game = wordle("HANGS");
    for input in ["", "HANG", "HANGED", "  "] {
        game.guess(input);
    }
    assert_eq!(game.turns_remaining(), 5);
    assert!(game.guess_log().is_empty());
}

#[test]
fn test_guesses_stored_uppercase_in_order() {
    let mut game = wordle("HANGS");
    game.guess("laugh");
    game.guess("Saint");
    assert_eq!(game.guess_log(), ["LAUGH", "SAINT"]);
}

#[test]
fn test_board_has_one_row_per_turn() {
    let mut game = wordle("HANGS");
    let prompt = game.guess("laugh");
    let rows = tile_rows(prompt.lines());
    assert_eq!(rows.len(), WORDLE_TURNS as usize);
    assert_eq!(
        rows[0].as_slice(),
        [
            Tile::scored('L', Mark::Absent),
            Tile::scored('A', Mark::Exact),
            Tile::scored('U', Mark::Absent),
            Tile::scored('G', Mark::Exact),
            Tile::scored('H', Mark::Present),
        ]
    );
    assert!(rows[1..].iter().all(|row| row.iter().all(|t| *t == Tile::Blank)));
    assert!(prompt.contains("Number of guesses remaining: 4"));
}

#[test]
fn test_initial_prompt() {
    let mut game = wordle("HANGS");
    let prompt = game.guess("");
    assert!(prompt.contains("Welcome to Wordle"));
    assert!(prompt.contains("Number of guesses remaining: 5"));
    assert!(prompt.contains("Enter a five letter word guess:"));
    assert_eq!(tile_rows(prompt.lines()).len(), 5);
}

#[test]
fn test_guesses_after_win_change_nothing() {
    let mut game = wordle("HANGS");
    game.guess("hangs");
    let won = game.clone();
    game.guess("laugh");
    assert_eq!(game, won);
    assert_eq!(game.guess_log(), ["HANGS"]);
}

#[test]
fn test_board_direct() {
    let mut words = WordList::default();
    let Game::Wordle(mut game) = Game::new(Variant::Wordle, Some("crane"), None, &mut words).unwrap()
    else {
        panic!("Expected Wordle");
    };
    game.guess("react");
    let board = game.board();
    assert_eq!(board.len(), 5);
    assert_eq!(board[0][0], Tile::scored('R', Mark::Present));
    assert_eq!(board[0][2], Tile::scored('A', Mark::Exact));
    assert_eq!(board[0][4], Tile::scored('T', Mark::Absent));
}
