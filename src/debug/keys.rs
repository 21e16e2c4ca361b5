use bevy::prelude::*;
use bevy_rapier2d::render::DebugRenderContext;

pub const TOGGLE_WIREFRAME: KeyCode = KeyCode::F3;

/// F3 flips the Rapier collider wireframe.
pub fn debug_key_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    ctx: Option<ResMut<DebugRenderContext>>,
) {
    if !keys.just_pressed(TOGGLE_WIREFRAME) {
        return;
    }
    let Some(mut ctx) = ctx else {
        return;
    };
    ctx.enabled = !ctx.enabled;
    info!(
        target: "debug",
        "collider wireframe {}",
        if ctx.enabled { "enabled" } else { "disabled" }
    );
}
