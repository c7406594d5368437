//=========================================================================
// User Profile
//=========================================================================
//
// Data that belongs to the person playing rather than to a session.
// Currently the high score list.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Constants ===========================================================

pub const MAX_HIGH_SCORES: usize = 10;

//=== HighScoreEntry ======================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u32,
}

//=== UserProfile =========================================================

#[derive(Debug, Clone, Default)]
pub struct UserProfile {
    high_scores: Vec<HighScoreEntry>,
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries sorted by score, best first.
    pub fn high_scores(&self) -> &[HighScoreEntry] {
        &self.high_scores
    }

    /// Returns `true` if `score` would make it onto the list.
    pub fn qualifies_for_high_score(&self, score: u32) -> bool {
        score > 0
            && (self.high_scores.len() < MAX_HIGH_SCORES
                || self.high_scores.last().is_some_and(|e| score > e.score))
    }

    /// Inserts a score and returns its rank (0 = best), or `None` if it
    /// did not qualify. Equal scores rank below existing ones.
    pub fn add_high_score(&mut self, name: impl Into<String>, score: u32) -> Option<usize> {
        if !self.qualifies_for_high_score(score) {
            return None;
        }

        let rank = self
            .high_scores
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.high_scores.len());

        let name = name.into();
        info!(target: "profile", "New high score #{}: {} ({})", rank + 1, score, name);

        self.high_scores.insert(rank, HighScoreEntry { name, score });
        self.high_scores.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }
}

//=========================================================================
// Tests
//=========================================================================
