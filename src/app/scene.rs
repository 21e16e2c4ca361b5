//! Scene lifecycle: one-time setup on entering `Playing`, the per-frame
//! session check, freeze on `Ended`, and teardown on restart.
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::app::assets::SceneAssets;
use crate::app::state::AppState;
use crate::core::components::SceneEntity;
use crate::core::config::GameConfig;
use crate::core::system::system_order::GameplaySet;
use crate::core::viewport::{sync_viewport, Viewport};
use crate::gameplay::outcomes::reset_session;
use crate::gameplay::player::spawn_player;
use crate::gameplay::session::GameSession;
use crate::rendering::background::background::spawn_background;
use crate::rendering::hud::hud::spawn_hud;

const RESTART_KEYS: [KeyCode; 3] = [KeyCode::KeyR, KeyCode::Enter, KeyCode::NumpadEnter];

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>()
            .init_resource::<GameSession>()
            .add_systems(PreUpdate, sync_viewport)
            .add_systems(OnEnter(AppState::Playing), setup_scene.after(reset_session))
            .add_systems(
                Update,
                end_when_session_finished
                    .in_set(GameplaySet::Session)
                    .run_if(in_state(AppState::Playing)),
            )
            .add_systems(OnEnter(AppState::Ended), log_session_summary)
            .add_systems(Update, restart_on_key.run_if(in_state(AppState::Ended)))
            .add_systems(OnExit(AppState::Ended), despawn_scene);
    }
}

fn setup_scene(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
    assets: Res<SceneAssets>,
    session: Res<GameSession>,
    cfg: Res<GameConfig>,
) {
    if let Ok(window) = windows.single() {
        *viewport = Viewport::new(window.width(), window.height());
    }
    spawn_background(&mut commands, &viewport, assets.background.clone());
    spawn_hud(&mut commands, &session);
    let player = spawn_player(&mut commands, &cfg.player, &viewport, assets.ship.clone());
    info!(
        target: "scene",
        "scene ready: viewport={}x{} player={:?} target={} per_star={}",
        viewport.width,
        viewport.height,
        player,
        session.target(),
        session.per_star()
    );
}

pub fn end_when_session_finished(
    session: Res<GameSession>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if session.is_finished() {
        next_state.set(AppState::Ended);
    }
}

fn log_session_summary(session: Res<GameSession>) {
    info!(
        target: "scene",
        "session ended: {} score={} collected={} spawned(stars={}, asteroids={}) culled={}",
        session.banner().unwrap_or("stopped"),
        session.score(),
        session.stars_collected,
        session.stars_spawned,
        session.asteroids_spawned,
        session.culled
    );
}

fn restart_on_key(keys: Res<ButtonInput<KeyCode>>, mut next_state: ResMut<NextState<AppState>>) {
    if keys.any_just_pressed(RESTART_KEYS) {
        info!(target: "scene", "restarting");
        next_state.set(AppState::Playing);
    }
}

pub fn despawn_scene(mut commands: Commands, q: Query<Entity, With<SceneEntity>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
