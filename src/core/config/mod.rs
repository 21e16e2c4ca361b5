pub mod config;

pub use config::{
    AssetConfig, FallerConfig, GameConfig, PlayerConfig, ScoringConfig, SpawnConfig, SpawnRange,
    WindowConfig,
};
