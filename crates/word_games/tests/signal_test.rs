//! Tests for the binary's interrupt handling, using real signals.

#![cfg(unix)]

use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use tempfile::TempDir;
use word_engine::{Snapshot, Variant};

/// A running `word_games` process in its own working directory.
struct Session {
    dir: TempDir,
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl Session {
    fn start(args: &[&str]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut child = Command::new(env!("CARGO_BIN_EXE_word_games"))
            .current_dir(dir.path())
            .arg("--no-color")
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to start word_games");

        // Held here so waiting on the child does not close its input.
        let stdin = child.stdin.take().expect("Piped stdin");
        let stdout = BufReader::new(child.stdout.take().expect("Piped stdout"));
        Self {
            dir,
            child,
            stdin,
            stdout,
        }
    }

    /// Reads output until a line containing `needle` appears.
    fn wait_for(&mut self, needle: &str) {
        let mut line = String::new();
        loop {
            line.clear();
            let read = self.stdout.read_line(&mut line).expect("Read failed");
            assert!(read > 0, "Output ended before {needle:?}");
            if line.contains(needle) {
                return;
            }
        }
    }

    fn send_line(&mut self, line: &str) {
        writeln!(self.stdin, "{}", line).expect("Write failed");
        self.stdin.flush().expect("Flush failed");
    }

    fn signal(&self, name: &str) {
        // The process may already be gone after an earlier signal.
        let _ = Command::new("kill")
            .arg(format!("-{}", name))
            .arg(self.child.id().to_string())
            .status();
    }

    fn exit_code(&mut self) -> Option<i32> {
        self.child.wait().expect("Wait failed").code()
    }

    fn save_file(&self) -> PathBuf {
        self.dir.path().join("game_save.json")
    }

    fn saved(&self) -> Snapshot {
        let raw = std::fs::read_to_string(self.save_file()).expect("Save file exists");
        serde_json::from_str(&raw).expect("Valid snapshot")
    }
}

#[test]
fn test_sigterm_saves_and_exits_143() {
    let mut session = Session::start(&["wordle", "crane"]);
    session.wait_for("Enter a five letter word guess:");
    session.send_line("slate");
    session.wait_for("Number of guesses remaining: 4");

    session.signal("TERM");

    assert_eq!(session.exit_code(), Some(143));
    let saved = session.saved();
    assert_eq!(saved.variant, Variant::Wordle);
    assert_eq!(saved.answer, "CRANE");
    assert_eq!(saved.guesses, ["SLATE"]);
}

#[test]
fn test_sigint_saves_and_exits_130() {
    let mut session = Session::start(&["hangman", "7", "hangman"]);
    session.wait_for("Please Enter a Letter or Guess the word");

    session.signal("INT");

    assert_eq!(session.exit_code(), Some(130));
    let saved = session.saved();
    assert_eq!(saved.max_turns, 7);
    assert!(saved.guesses.is_empty());
}

#[test]
fn test_repeated_interrupt_does_not_cut_save_short() {
    let mut session = Session::start(&["hangman", "5", "rhythm"]);
    session.wait_for("Please Enter a Letter or Guess the word");
    session.send_line("q");
    session.wait_for("Guesses: Q");

    session.signal("INT");
    session.signal("INT");

    assert_eq!(session.exit_code(), Some(130));
    let saved = session.saved();
    assert_eq!(saved.answer, "RHYTHM");
    assert_eq!(saved.guesses, ["Q"]);
}

#[test]
fn test_saved_game_resumes_on_next_start() {
    let mut first = Session::start(&["wordle", "crane"]);
    first.wait_for("Enter a five letter word guess:");
    first.send_line("slate");
    first.wait_for("Number of guesses remaining: 4");
    first.signal("TERM");
    assert_eq!(first.exit_code(), Some(143));

    let mut second = Command::new(env!("CARGO_BIN_EXE_word_games"))
        .current_dir(first.dir.path())
        .arg("--no-color")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to start word_games");
    second
        .stdin
        .take()
        .expect("Piped stdin")
        .write_all(b"crane\n")
        .expect("Write failed");

    let output = second.wait_with_output().expect("Wait failed");
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("You guessed the word"));
    assert!(!first.save_file().exists());
}
