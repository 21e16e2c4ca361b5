use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::AppState;
use crate::core::components::{Player, SceneEntity};
use crate::core::config::{GameConfig, PlayerConfig};
use crate::core::system::system_order::GameplaySet;
use crate::core::viewport::Viewport;
use crate::interaction::input::movement_direction;
use crate::physics::bounds::confine_player;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (drive_player_velocity, confine_player)
                .chain()
                .in_set(GameplaySet::Input)
                .run_if(in_state(AppState::Playing)),
        )
        .add_systems(OnEnter(AppState::Ended), halt_player);
    }
}

/// Spawn point: centered horizontally, `bottom_offset` above the bottom edge
/// (kept inside the viewport).
pub fn player_start(cfg: &PlayerConfig, viewport: &Viewport) -> Vec2 {
    let wanted = Vec2::new(0.0, viewport.bottom() + cfg.bottom_offset);
    let bounds = viewport.inner_bounds(cfg.collider_radius * cfg.scale);
    wanted.clamp(bounds.min, bounds.max)
}

pub fn spawn_player(
    commands: &mut Commands,
    cfg: &PlayerConfig,
    viewport: &Viewport,
    image: Handle<Image>,
) -> Entity {
    let start = player_start(cfg, viewport);
    commands
        .spawn((
            Player {
                radius: cfg.collider_radius * cfg.scale,
            },
            SceneEntity,
            Sprite::from_image(image),
            Transform::from_translation(start.extend(1.0))
                .with_rotation(Quat::from_rotation_z(cfg.facing_degrees.to_radians()))
                .with_scale(Vec3::splat(cfg.scale)),
            RigidBody::KinematicVelocityBased,
            Collider::ball(cfg.collider_radius),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
            ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_KINEMATIC,
            Velocity::zero(),
        ))
        .id()
}

fn drive_player_velocity(
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<GameConfig>,
    mut q: Query<&mut Velocity, With<Player>>,
) {
    let target = movement_direction(&keys) * cfg.player.speed;
    for mut vel in &mut q {
        if vel.linvel != target {
            vel.linvel = target;
        }
    }
}

fn halt_player(mut q: Query<&mut Velocity, With<Player>>) {
    for mut vel in &mut q {
        vel.linvel = Vec2::ZERO;
    }
}
