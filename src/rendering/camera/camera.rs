use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// World origin at the viewport center; one unit per logical pixel.
fn setup_camera(mut commands: Commands) {
    // Not a SceneEntity: survives restarts and also renders the HUD.
    commands.spawn((Camera2d, Name::new("GameCamera")));
}
