//! Image loading phase. Runs while in [`AppState::Loading`] and advances to
//! `Playing` once every image is resident; any failure aborts startup.
use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::components::FallKind;
use crate::core::config::GameConfig;

#[derive(Resource, Debug, Clone, Default)]
pub struct SceneAssets {
    pub background: Handle<Image>,
    pub ship: Handle<Image>,
    pub star: Handle<Image>,
    pub asteroid: Handle<Image>,
}

impl SceneAssets {
    pub fn image_for(&self, kind: FallKind) -> Handle<Image> {
        match kind {
            FallKind::Star => self.star.clone(),
            FallKind::Asteroid => self.asteroid.clone(),
        }
    }

    fn named(&self) -> [(&'static str, &Handle<Image>); 4] {
        [
            ("background", &self.background),
            ("ship", &self.ship),
            ("star", &self.star),
            ("asteroid", &self.asteroid),
        ]
    }
}

pub struct SceneAssetsPlugin;

impl Plugin for SceneAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneAssets>()
            .add_systems(OnEnter(AppState::Loading), queue_scene_assets)
            .add_systems(
                Update,
                poll_scene_assets.run_if(in_state(AppState::Loading)),
            );
    }
}

fn queue_scene_assets(
    mut commands: Commands,
    server: Res<AssetServer>,
    cfg: Res<GameConfig>,
) {
    let paths = &cfg.assets;
    info!(
        target: "assets",
        "loading images: background='{}' ship='{}' star='{}' asteroid='{}'",
        paths.background, paths.ship, paths.star, paths.asteroid
    );
    commands.insert_resource(SceneAssets {
        background: server.load(paths.background.clone()),
        ship: server.load(paths.ship.clone()),
        star: server.load(paths.star.clone()),
        asteroid: server.load(paths.asteroid.clone()),
    });
}

fn poll_scene_assets(
    server: Res<AssetServer>,
    assets: Res<SceneAssets>,
    mut next_state: ResMut<NextState<AppState>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let mut ready = 0;
    for (name, handle) in assets.named() {
        match server.load_state(handle.id()) {
            LoadState::Loaded => ready += 1,
            LoadState::Failed(err) => {
                error!(target: "assets", "failed to load {name} image: {err}");
                ev_exit.write(AppExit::error());
                return;
            }
            _ => {}
        }
    }
    if ready == assets.named().len() {
        info!(target: "assets", "all {ready} images loaded");
        next_state.set(AppState::Playing);
    }
}
