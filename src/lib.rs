pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use app::game::GamePlugin;
pub use app::state::AppState;
pub use core::components::{Asteroid, FallKind, Faller, Player, Star};
pub use core::config::{GameConfig, WindowConfig};
pub use gameplay::session::{GameSession, Outcome};
