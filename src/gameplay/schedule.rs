//! Discrete-time recurring spawn schedule.
//!
//! Each entry holds `(interval, next_fire, kind)`. Advancing by a frame delta
//! fires every deadline that elapsed, in chronological order, so a long frame
//! catches up instead of dropping spawns. First firing happens one full
//! interval after the entry is added.
use bevy::prelude::*;
use smallvec::SmallVec;
use std::time::Duration;

use crate::core::components::FallKind;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScheduleEntry {
    kind: FallKind,
    interval: Duration,
    next_fire: Duration,
}

#[derive(Resource, Debug, Default, Clone)]
pub struct SpawnSchedule {
    elapsed: Duration,
    entries: Vec<ScheduleEntry>,
}

impl SpawnSchedule {
    pub fn every(mut self, interval: Duration, kind: FallKind) -> Self {
        self.add(interval, kind);
        self
    }

    /// Registers a looping entry. Zero intervals are rejected (they would fire
    /// unboundedly); returns whether the entry was added.
    pub fn add(&mut self, interval: Duration, kind: FallKind) -> bool {
        if interval.is_zero() {
            warn!(target: "spawn", "ignoring {} schedule with zero interval", kind.label());
            return false;
        }
        self.entries.push(ScheduleEntry {
            kind,
            interval,
            next_fire: self.elapsed + interval,
        });
        true
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_armed(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn advance(&mut self, dt: Duration) -> SmallVec<[FallKind; 4]> {
        self.elapsed += dt;
        let now = self.elapsed;
        let mut fired: SmallVec<[(Duration, FallKind); 4]> = SmallVec::new();
        for entry in &mut self.entries {
            while entry.next_fire <= now {
                fired.push((entry.next_fire, entry.kind));
                entry.next_fire += entry.interval;
            }
        }
        fired.sort_by_key(|(at, _)| *at);
        fired.into_iter().map(|(_, kind)| kind).collect()
    }
}
