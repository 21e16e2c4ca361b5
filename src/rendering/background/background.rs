use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::components::{Background, SceneEntity};
use crate::core::viewport::Viewport;

pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            fit_background_to_viewport.run_if(not(in_state(AppState::Loading))),
        );
    }
}

/// Spawns the sky stretched over the whole viewport, behind everything else.
pub fn spawn_background(commands: &mut Commands, viewport: &Viewport, image: Handle<Image>) -> Entity {
    commands
        .spawn((
            Background,
            SceneEntity,
            Sprite {
                image,
                custom_size: Some(viewport.size()),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, -10.0),
        ))
        .id()
}

fn fit_background_to_viewport(
    viewport: Res<Viewport>,
    mut q: Query<&mut Sprite, With<Background>>,
) {
    if !viewport.is_changed() {
        return;
    }
    for mut sprite in &mut q {
        let size = Some(viewport.size());
        if sprite.custom_size != size {
            sprite.custom_size = size;
        }
    }
}
