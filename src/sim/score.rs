//! Score and active/inactive game state
//!
//! One instance per session. The slice path writes it; the display layer
//! reads the notifications it queues.

use serde::{Deserialize, Serialize};

/// Queued for the display layer after every successful mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreChanged {
    pub score: u32,
}

/// Player score plus the flag gating score mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreState {
    score: u32,
    active: bool,
    #[serde(skip)]
    pending: Vec<ScoreChanged>,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreState {
    /// Fresh state: score 0, game active
    pub fn new() -> Self {
        Self {
            score: 0,
            active: true,
            pending: Vec::new(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Add to the score. No-op while inactive.
    pub fn increase(&mut self, amount: u32) {
        if !self.active {
            return;
        }
        self.score = self.score.saturating_add(amount);
        self.notify();
        log::debug!("Score increased by {}. Total score: {}", amount, self.score);
    }

    /// Subtract from the score, clamping at zero. No-op while inactive.
    pub fn decrease(&mut self, amount: u32) {
        if !self.active {
            return;
        }
        self.score = self.score.saturating_sub(amount);
        self.notify();
        log::debug!("Score decreased by {}. Total score: {}", amount, self.score);
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.notify();
        log::debug!("Score reset to 0");
    }

    /// Activate and reset
    pub fn start(&mut self) {
        self.active = true;
        self.reset();
        log::info!("Game started");
    }

    pub fn end(&mut self) {
        self.active = false;
        log::info!("Game over! Final score: {}", self.score);
    }

    /// Hand queued notifications to the display layer
    pub fn take_notifications(&mut self) -> Vec<ScoreChanged> {
        std::mem::take(&mut self.pending)
    }

    fn notify(&mut self) {
        self.pending.push(ScoreChanged { score: self.score });
    }
}
