pub mod outcomes;
pub mod player;
pub mod schedule;
pub mod session;
pub mod spawn;
