//! Exits after `window.autoClose` seconds (0 = disabled). Used for unattended
//! smoke runs; the final session state is logged before exit.
use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::gameplay::session::GameSession;

#[derive(Resource, Deref, DerefMut)]
pub struct AutoCloseTimer(pub Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_autoclose)
            .add_systems(Update, check_autoclose);
    }
}

fn setup_autoclose(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(target: "session", seconds = secs, "auto-close armed");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_autoclose(
    time: Res<Time>,
    timer: Option<ResMut<AutoCloseTimer>>,
    session: Option<Res<GameSession>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(mut timer) = timer else {
        return;
    };
    if !timer.tick(time.delta()).just_finished() {
        return;
    }
    if let Some(s) = session {
        info!(
            target: "session",
            "auto-close: score={} won={} over={} stars={} asteroids={}",
            s.score(),
            s.game_won(),
            s.game_over(),
            s.stars_spawned,
            s.asteroids_spawned
        );
    }
    ev_exit.write(AppExit::Success);
}
