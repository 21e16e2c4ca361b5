use std::path::PathBuf;

use bevy::prelude::*;
use clap::Parser;

use star_catcher::{GameConfig, GamePlugin};

const DEFAULT_LAYERS: [&str; 2] = ["assets/config/game.ron", "assets/config/game.local.ron"];

#[derive(Parser, Debug)]
#[command(about = "Catch falling stars, dodge asteroids", version)]
struct Cli {
    /// Config layers (RON), later files override earlier ones. Defaults to
    /// assets/config/game.ron + game.local.ron.
    #[arg(long = "config")]
    configs: Vec<PathBuf>,
    /// Fixed RNG seed for spawn positions.
    #[arg(long)]
    seed: Option<u64>,
    /// Exit after this many seconds.
    #[arg(long)]
    auto_close: Option<f32>,
}

/// Config problems found before logging is up; reported once the app starts.
#[derive(Resource, Default)]
struct StartupDiagnostics {
    used: Vec<String>,
    errors: Vec<String>,
    warnings: Vec<String>,
}

fn report_startup_diagnostics(diag: Res<StartupDiagnostics>) {
    if diag.used.is_empty() {
        info!(target: "config", "no config layers found; using defaults");
    } else {
        info!(target: "config", "config layers: {}", diag.used.join(", "));
    }
    for e in &diag.errors {
        warn!(target: "config", "{e}");
    }
    for w in &diag.warnings {
        warn!(target: "config", "config warning: {w}");
    }
}

fn main() -> anyhow::Result<()> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let cli = Cli::parse();
    let layers: Vec<PathBuf> = if cli.configs.is_empty() {
        DEFAULT_LAYERS.iter().map(PathBuf::from).collect()
    } else {
        cli.configs
    };
    let (mut cfg, used, errors) = GameConfig::load_layered(&layers);
    if let Some(seed) = cli.seed {
        cfg.seed = Some(seed);
    }
    if let Some(secs) = cli.auto_close {
        cfg.window.auto_close = secs;
    }
    let warnings = cfg.validate();

    let exit = App::new()
        .insert_resource(cfg.clone())
        .insert_resource(StartupDiagnostics {
            used,
            errors,
            warnings,
        })
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: cfg.window.resizable,
                // Browser builds track the page size like a resize-mode canvas.
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, report_startup_diagnostics)
        .add_plugins(GamePlugin)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("star_catcher exited with code {code}"),
    }
}
