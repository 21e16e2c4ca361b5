pub mod bounds;
pub mod rapier;
