use bevy::prelude::*;

/// Scene lifecycle.
/// Loading -> Playing -> Ended -> (restart) Playing
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Images requested from the asset server; nothing spawned yet.
    #[default]
    Loading,
    /// Active gameplay: input, spawning and overlap outcomes run.
    Playing,
    /// Win or loss reached; the scene is frozen until restart.
    Ended,
}
