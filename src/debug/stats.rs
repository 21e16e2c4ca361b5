use bevy::prelude::*;

use crate::core::components::{Asteroid, Star};

#[derive(Resource, Debug)]
pub struct DebugState {
    pub frame_counter: u64,
    pub time_accum: f32,
    /// Seconds between stats log lines.
    pub log_interval: f32,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            frame_counter: 0,
            time_accum: 0.0,
            log_interval: 2.0,
        }
    }
}

#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub stars: usize,
    pub asteroids: usize,
}

/// Exponential moving average; the first sample seeds the value.
fn smooth(prev: f32, sample: f32) -> f32 {
    if prev == 0.0 {
        sample
    } else {
        prev * 0.9 + sample * 0.1
    }
}

pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
    q_stars: Query<(), With<Star>>,
    q_asteroids: Query<(), With<Asteroid>>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    stats.fps = smooth(stats.fps, 1.0 / dt);
    stats.frame_time_ms = smooth(stats.frame_time_ms, dt * 1000.0);
    stats.stars = q_stars.iter().count();
    stats.asteroids = q_asteroids.iter().count();
}
