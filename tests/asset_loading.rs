use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use star_catcher::app::assets::{SceneAssets, SceneAssetsPlugin};
use star_catcher::{AppState, GameConfig};

fn loading_app(cfg: GameConfig) -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        AssetPlugin::default(),
        ImagePlugin::default(),
        StatesPlugin,
    ))
    .insert_resource(cfg)
    .init_state::<AppState>()
    .add_plugins(SceneAssetsPlugin);
    // Image loaders are registered in `finish`, which `update` alone skips.
    app.finish();
    app.cleanup();
    app
}

/// Drives the app until `done` holds; asset IO runs on background tasks.
fn pump(app: &mut App, mut done: impl FnMut(&mut App) -> bool) -> bool {
    for _ in 0..500 {
        app.update();
        if done(app) {
            return true;
        }
        std::thread::sleep(std::time::Duration::from_millis(5));
    }
    false
}

#[test]
fn shipped_images_load_and_start_play() {
    let mut app = loading_app(GameConfig::default());
    let started = pump(&mut app, |app| {
        *app.world().resource::<State<AppState>>().get() == AppState::Playing
    });
    assert!(started, "never left Loading");
    assert_eq!(app.should_exit(), None);

    let assets = app.world().resource::<SceneAssets>().clone();
    let images = app.world().resource::<Assets<Image>>();
    for handle in [&assets.background, &assets.ship, &assets.star, &assets.asteroid] {
        assert!(images.get(handle).is_some());
    }
}

#[test]
fn missing_image_fails_startup() {
    let mut cfg = GameConfig::default();
    cfg.assets.star = "images/no_such_star.png".into();
    let mut app = loading_app(cfg);
    let mut exit = None;
    let stopped = pump(&mut app, |app| {
        exit = app.should_exit();
        exit.is_some()
    });
    assert!(stopped, "missing image did not stop the app");
    assert_eq!(exit, Some(AppExit::error()));
    assert_eq!(
        *app.world().resource::<State<AppState>>().get(),
        AppState::Loading
    );
}
