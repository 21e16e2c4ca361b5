use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::AppState;
use crate::core::config::GameConfig;

/// Rapier wrapper: zero gravity, sensors only, paused while the scene is ended.
pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let debug_enabled = app
            .world()
            .get_resource::<GameConfig>()
            .is_some_and(|c| c.rapier_debug);
        app.add_plugins((
            RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0),
            RapierDebugRenderPlugin {
                enabled: debug_enabled,
                ..default()
            },
        ))
        .add_systems(PreUpdate, configure_gravity)
        .add_systems(OnEnter(AppState::Playing), resume_pipeline)
        .add_systems(OnEnter(AppState::Ended), pause_pipeline);
    }
}

fn configure_gravity(mut q: Query<&mut RapierConfiguration, Added<RapierConfiguration>>) {
    for mut cfg in &mut q {
        cfg.gravity = Vect::ZERO;
    }
}

pub fn pause_pipeline(mut q: Query<&mut RapierConfiguration>) {
    for mut cfg in &mut q {
        cfg.physics_pipeline_active = false;
    }
    info!(target: "scene", "physics paused");
}

pub fn resume_pipeline(mut q: Query<&mut RapierConfiguration>) {
    for mut cfg in &mut q {
        cfg.physics_pipeline_active = true;
    }
}
