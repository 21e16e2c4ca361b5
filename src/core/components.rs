use bevy::prelude::*;

/// The player-controlled ship (kinematic body + sensor collider).
#[derive(Component, Debug, Clone, Copy)]
pub struct Player {
    /// Collider radius after scaling; keeps the hull inside the viewport.
    pub radius: f32,
}

/// Which rule an overlap with the player triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallKind {
    Star,
    Asteroid,
}

impl FallKind {
    pub fn label(self) -> &'static str {
        match self {
            FallKind::Star => "star",
            FallKind::Asteroid => "asteroid",
        }
    }
}

/// Shared shape of every falling entity. Position and velocity live on the
/// `Transform` / Rapier `Velocity`; liveness is entity existence.
#[derive(Component, Debug, Clone, Copy)]
pub struct Faller {
    pub kind: FallKind,
    /// Collider radius after scaling; used for spawn insets and culling.
    pub radius: f32,
}

/// Collectible marker (query filter for player×stars overlap).
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Star;

/// Hazard marker (query filter for player×asteroids overlap).
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Asteroid;

/// Tag for everything the scene spawns during setup or play, despawned on restart.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SceneEntity;

/// Full-viewport background sprite.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Background;
