use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub resizable: bool,
    /// Hex clear color behind the background sprite.
    pub clear_color: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Star Catcher".into(),
            resizable: true,
            clear_color: "#0a0a1a".into(),
            auto_close: 0.0,
        }
    }
}

impl WindowConfig {
    /// Parsed clear color; falls back to the default night blue on malformed hex.
    pub fn clear_color(&self) -> Color {
        Srgba::hex(&self.clear_color)
            .map(Color::from)
            .unwrap_or(Color::srgb_u8(0x0a, 0x0a, 0x1a))
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Movement speed in pixels per second while a direction key is held.
    pub speed: f32,
    pub scale: f32,
    /// Distance of the spawn point above the bottom edge of the viewport.
    pub bottom_offset: f32,
    /// Initial sprite rotation, degrees counter-clockwise. 0 = nose up.
    pub facing_degrees: f32,
    pub collider_radius: f32,
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 300.0,
            scale: 1.0,
            bottom_offset: 100.0,
            facing_degrees: 0.0,
            collider_radius: 20.0,
        }
    }
}

/// Per-kind tuning shared by stars and asteroids.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FallerConfig {
    /// Spawn period in milliseconds.
    pub interval_ms: u64,
    /// Downward speed in pixels per second, sampled uniformly per entity.
    pub speed_range: SpawnRange<f32>,
    pub scale: f32,
    pub collider_radius: f32,
}
impl Default for FallerConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            speed_range: SpawnRange {
                min: 100.0,
                max: 200.0,
            },
            scale: 1.0,
            collider_radius: 12.0,
        }
    }
}

impl FallerConfig {
    fn asteroid() -> Self {
        Self {
            interval_ms: 800,
            speed_range: SpawnRange {
                min: 150.0,
                max: 250.0,
            },
            scale: 1.0,
            collider_radius: 16.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    /// Entities are despawned once fully this far below the bottom edge.
    pub cull_margin: f32,
}
impl Default for SpawnConfig {
    fn default() -> Self {
        Self { cull_margin: 64.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    pub per_star: u32,
    pub target: u32,
}
impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            per_star: 10,
            target: 100,
        }
    }
}

/// Image paths relative to the asset root.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AssetConfig {
    pub background: String,
    pub ship: String,
    pub star: String,
    pub asteroid: String,
}
impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            background: "images/sky.png".into(),
            ship: "images/ship.png".into(),
            star: "images/star.png".into(),
            asteroid: "images/asteroid.png".into(),
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub player: PlayerConfig,
    pub star: FallerConfig,
    pub asteroid: FallerConfig,
    pub spawn: SpawnConfig,
    pub scoring: ScoringConfig,
    pub assets: AssetConfig,
    /// Fixed RNG seed for reproducible spawn positions. `None` = entropy.
    pub seed: Option<u64>,
    pub rapier_debug: bool,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            player: Default::default(),
            star: Default::default(),
            asteroid: FallerConfig::asteroid(),
            spawn: Default::default(),
            scoring: Default::default(),
            assets: Default::default(),
            seed: None,
            rapier_debug: false,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Load multiple config layers, later files overriding earlier ones (deep merge of maps).
    /// Missing files are skipped; returns (config, list_of_layer_paths_used, list_of_errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let existing = bm.iter_mut().find(|(ek, _)| **ek == k).map(|(_, ev)| ev);
                        if let Some(ev) = existing {
                            merge_value(ev, v);
                        } else {
                            bm.insert(k, v);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }

        for p in paths {
            let path_ref = p.as_ref();
            if !path_ref.exists() {
                continue;
            }
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }

        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    /// Validate the configuration returning a list of human‑readable warning strings.
    /// These represent suspicious / potentially unintended values but are not hard errors.
    /// Call at startup and log each warning with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if Srgba::hex(&self.window.clear_color).is_err() {
            w.push(format!(
                "window.clear_color '{}' is not a hex color; using default",
                self.window.clear_color
            ));
        }
        if self.player.speed <= 0.0 {
            w.push("player.speed must be > 0; the ship cannot move".into());
        }
        if self.player.scale <= 0.0 {
            w.push("player.scale must be > 0".into());
        }
        if self.player.collider_radius <= 0.0 {
            w.push("player.collider_radius must be > 0".into());
        }
        if self.player.bottom_offset < 0.0 || self.player.bottom_offset > self.window.height {
            w.push(format!(
                "player.bottom_offset {} outside 0..window.height; ship starts off-screen",
                self.player.bottom_offset
            ));
        }

        fn check_faller(w: &mut Vec<String>, label: &str, f: &FallerConfig) {
            if f.interval_ms == 0 {
                w.push(format!("{label}.interval_ms is 0; spawning disabled"));
            } else if f.interval_ms < 50 {
                w.push(format!(
                    "{label}.interval_ms {} very low; entity count will climb fast",
                    f.interval_ms
                ));
            }
            let r = &f.speed_range;
            if r.min > r.max {
                w.push(format!(
                    "{label}.speed_range min ({}) greater than max ({})",
                    r.min, r.max
                ));
            }
            if r.min <= 0.0 {
                w.push(format!(
                    "{label}.speed_range.min must be > 0 or entities never fall"
                ));
            }
            if f.scale <= 0.0 {
                w.push(format!("{label}.scale must be > 0"));
            }
            if f.collider_radius <= 0.0 {
                w.push(format!("{label}.collider_radius must be > 0"));
            }
        }
        check_faller(&mut w, "star", &self.star);
        check_faller(&mut w, "asteroid", &self.asteroid);

        if self.spawn.cull_margin < 0.0 {
            w.push("spawn.cull_margin negative; entities culled while still visible".into());
        }
        if self.scoring.per_star == 0 {
            w.push("scoring.per_star is 0; the game cannot be won".into());
        }
        if self.scoring.target == 0 {
            w.push("scoring.target is 0; first star wins immediately".into());
        }
        let assets = [
            ("assets.background", &self.assets.background),
            ("assets.ship", &self.assets.ship),
            ("assets.star", &self.assets.star),
            ("assets.asteroid", &self.assets.asteroid),
        ];
        for (label, path) in assets {
            if path.trim().is_empty() {
                w.push(format!("{label} path is empty"));
            }
        }
        w
    }
}
