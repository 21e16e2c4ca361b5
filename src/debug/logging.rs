use bevy::prelude::*;

use super::stats::{DebugState, DebugStats};
use crate::gameplay::session::GameSession;

pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    stats: Res<DebugStats>,
    session: Option<Res<GameSession>>,
) {
    state.time_accum += time.delta_secs();
    if state.time_accum < state.log_interval {
        return;
    }
    state.time_accum = 0.0;
    let (score, finished) = session
        .map(|s| (s.score(), s.is_finished()))
        .unwrap_or_default();
    info!(
        target: "debug",
        "SIM frame={} t={:.3}s fps={:.1} ft_ms={:.1} stars={} asteroids={} score={} finished={}",
        state.frame_counter,
        time.elapsed_secs(),
        stats.fps,
        stats.frame_time_ms,
        stats.stars,
        stats.asteroids,
        score,
        finished
    );
}
