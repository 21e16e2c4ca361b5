use bevy::prelude::*;

use crate::core::components::FallKind;
use crate::core::config::ScoringConfig;

/// Result of applying one overlap to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Star counted; game continues.
    Scored { score: u32 },
    /// Star counted and the target was reached.
    Won { score: u32 },
    /// Asteroid hit.
    Lost { score: u32 },
    /// Session already finished; nothing changed.
    Ignored,
}

/// Score, terminal flags and running counters for one scene lifetime.
///
/// Flags are write-once: after either is set every further rule application
/// returns [`Outcome::Ignored`]. The only way back is a fresh session.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    score: u32,
    game_over: bool,
    game_won: bool,
    per_star: u32,
    target: u32,
    pub stars_spawned: u32,
    pub asteroids_spawned: u32,
    pub stars_collected: u32,
    pub culled: u32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

impl GameSession {
    pub fn new(scoring: &ScoringConfig) -> Self {
        Self {
            score: 0,
            game_over: false,
            game_won: false,
            per_star: scoring.per_star,
            target: scoring.target,
            stars_spawned: 0,
            asteroids_spawned: 0,
            stars_collected: 0,
            culled: 0,
        }
    }

    /// Session resumed mid-game (tests, debug tooling).
    pub fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn target(&self) -> u32 {
        self.target
    }
    pub fn per_star(&self) -> u32 {
        self.per_star
    }
    pub fn game_over(&self) -> bool {
        self.game_over
    }
    pub fn game_won(&self) -> bool {
        self.game_won
    }
    pub fn is_finished(&self) -> bool {
        self.game_over || self.game_won
    }

    pub fn collect_star(&mut self) -> Outcome {
        if self.is_finished() {
            return Outcome::Ignored;
        }
        self.score = self.score.saturating_add(self.per_star);
        self.stars_collected += 1;
        if self.score >= self.target {
            self.game_won = true;
            Outcome::Won { score: self.score }
        } else {
            Outcome::Scored { score: self.score }
        }
    }

    pub fn hit_asteroid(&mut self) -> Outcome {
        if self.is_finished() {
            return Outcome::Ignored;
        }
        self.game_over = true;
        Outcome::Lost { score: self.score }
    }

    pub fn apply(&mut self, kind: FallKind) -> Outcome {
        match kind {
            FallKind::Star => self.collect_star(),
            FallKind::Asteroid => self.hit_asteroid(),
        }
    }

    pub fn record_spawn(&mut self, kind: FallKind) {
        match kind {
            FallKind::Star => self.stars_spawned += 1,
            FallKind::Asteroid => self.asteroids_spawned += 1,
        }
    }

    pub fn score_label(&self) -> String {
        format!("Score: {} / {}", self.score, self.target)
    }

    pub fn goal_label(&self) -> String {
        format!("Reach {} points to win!", self.target)
    }

    /// Terminal banner, `None` while the game is running.
    pub fn banner(&self) -> Option<&'static str> {
        if self.game_won {
            Some("YOU WIN!")
        } else if self.game_over {
            Some("GAME OVER")
        } else {
            None
        }
    }
}
