//! Game variant tag.

use serde::{Deserialize, Serialize};

/// Which rule set a game follows.
///
/// The tag is stored in save snapshots and mapped back to a concrete game
/// type by a fixed match on restore.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    /// Letter-reveal rules with a caller-chosen turn budget.
    Hangman,
    /// Fixed-width positional feedback with five turns.
    Wordle,
}
