//! World-bound clamping for the player ship.
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::Player;
use crate::core::viewport::Viewport;

/// Clamps `pos` into `bounds` and trims `vel` so that `pos + vel * dt`
/// stays inside as well. The physics step never advances further than `dt`.
pub fn confine(pos: Vec2, vel: Vec2, dt: f32, bounds: Rect) -> (Vec2, Vec2) {
    let pos = pos.clamp(bounds.min, bounds.max);
    if dt <= 0.0 {
        return (pos, vel);
    }
    let lo = (bounds.min - pos) / dt;
    let hi = (bounds.max - pos) / dt;
    (pos, vel.clamp(lo, hi))
}

pub fn confine_player(
    time: Res<Time>,
    viewport: Res<Viewport>,
    mut q: Query<(&mut Transform, &mut Velocity, &Player)>,
) {
    let dt = time.delta_secs();
    for (mut tf, mut vel, player) in &mut q {
        let bounds = viewport.inner_bounds(player.radius);
        let (pos, linvel) = confine(tf.translation.truncate(), vel.linvel, dt, bounds);
        if pos != tf.translation.truncate() {
            tf.translation.x = pos.x;
            tf.translation.y = pos.y;
        }
        if linvel != vel.linvel {
            vel.linvel = linvel;
        }
    }
}
