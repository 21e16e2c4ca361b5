//! Central system ordering labels to make the per-frame sequence explicit.
//! Stages (high-level):
//! 1. Input (keyboard -> player velocity)
//! 2. Spawn (schedule tick, new fallers, culling)
//! 3. Rapier step (handled by plugin in PostUpdate; overlap events read next frame)
//! 4. Outcomes (collision events -> session)
//! 5. Session (flags -> app state, HUD text)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum GameplaySet {
    Input,
    Spawn,
    Outcomes,
    Session,
}
