//! Session state tracking
//!
//! Score, lives and high-score carry-over for a single play session. The two
//! durable stats (last score, high score) round-trip through the preference
//! store; everything else resets with the session.

use serde::{Deserialize, Serialize};

use crate::consts::{HUD_SCORE_WIDTH, STARTING_LIVES};
use crate::prefs::PrefStore;

/// Current phase of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayState {
    /// Waiting for the player to start a run
    #[default]
    AwaitingStart,
    /// Active gameplay
    Playing,
    /// Run ended
    Ended,
}

/// Per-session scoreboard with durable high-score carry-over
///
/// Fields are public and set directly by gameplay code. The tracker stores
/// the current play state but does not police transitions, and reaching zero
/// lives does not flip `play_state` on its own - driving the session to
/// `Ended` stays with the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Score accumulated during the current run
    pub score: u64,
    /// Remaining lives
    pub lives: u8,
    /// Best score across all runs, converged at save time
    pub high_score: u64,
    /// Final score of the most recent saved run
    pub last_score: u64,
    /// Current phase
    pub play_state: PlayState,
}

impl SessionState {
    /// Preference key for the last saved score
    pub const LAST_SCORE_KEY: &'static str = "lastScore";
    /// Preference key for the best score
    pub const HIGH_SCORE_KEY: &'static str = "highScore";

    /// Build a fresh session, reloading durable stats from the store
    ///
    /// Absent keys read as zero; an empty store is not an error.
    pub fn initialize(store: &impl PrefStore) -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            high_score: store.get(Self::HIGH_SCORE_KEY),
            last_score: store.get(Self::LAST_SCORE_KEY),
            play_state: PlayState::AwaitingStart,
        }
    }

    /// Start a new run: score back to zero, lives refilled
    ///
    /// High score, last score and play state are left alone.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
    }

    /// Add points to the current run
    pub fn add_score(&mut self, delta: u64) {
        self.score = self.score.saturating_add(delta);
    }

    /// Take one life, bottoming out at zero
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    /// Snapshot the run into the durable stats and push them to the store
    pub fn save_state(&mut self, store: &mut impl PrefStore) {
        self.last_score = self.score;
        self.high_score = self.score.max(self.high_score);
        store.set(Self::LAST_SCORE_KEY, self.last_score);
        store.set(Self::HIGH_SCORE_KEY, self.high_score);
        store.flush();
        log::info!(
            "Session saved (last={}, high={})",
            self.last_score,
            self.high_score
        );
    }

    /// Zero-padded score for display
    ///
    /// `width` is a minimum field width; a score with more digits prints in
    /// full.
    pub fn format_score(&self, width: usize) -> String {
        zero_padded(self.score, width)
    }

    /// One-line HUD summary: lives, high score, current score
    pub fn hud_text(&self) -> String {
        format!(
            "❤️{}  😎{} 💥{}",
            self.lives,
            zero_padded(self.high_score, HUD_SCORE_WIDTH),
            zero_padded(self.score, HUD_SCORE_WIDTH),
        )
    }
}

fn zero_padded(value: u64, width: usize) -> String {
    format!("{value:0width$}")
}
