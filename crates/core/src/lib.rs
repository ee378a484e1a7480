#![warn(missing_docs)]
//! Core primitives shared across the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of an object placed in the scene (an interactable, one of its
/// child parts, or scenery).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object#{}", self.0)
    }
}

/// Identity of an actor that can invoke an interaction (usually the local player).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// RGBA color with channels in `0.0..=1.0`.
pub type Rgba = [f32; 4];

/// Opaque white.
pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];

/// Frame counter for the simulation loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SimTick(pub u64);

impl SimTick {
    /// First tick in any timeline.
    pub const ZERO: Self = Self(0);

    /// Advance by `delta` ticks.
    pub fn advance(self, delta: u64) -> Self {
        Self(self.0 + delta)
    }
}

/// Monotonic simulation clock measured in seconds.
///
/// `now` never decreases: negative or non-finite deltas are treated as zero.
/// Time accumulates in `f64`; step lengths stay `f32`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimClock {
    now: f64,
    dt: f32,
    tick: SimTick,
}

impl SimClock {
    /// Create a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock positioned at `now` with no elapsed step yet.
    pub fn starting_at(now: f64) -> Self {
        Self {
            now: now.max(0.0),
            ..Self::default()
        }
    }

    /// Advance the clock by one step of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.dt = dt;
        self.now += f64::from(dt);
        self.tick = self.tick.advance(1);
    }

    /// Current time in seconds.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Length of the most recent step in seconds.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Number of steps taken so far.
    pub fn tick(&self) -> SimTick {
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_accumulates_steps() {
        let mut clock = SimClock::new();
        clock.advance(0.25);
        clock.advance(0.5);
        assert_eq!(clock.now(), 0.75);
        assert_eq!(clock.dt(), 0.5);
        assert_eq!(clock.tick(), SimTick(2));
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut clock = SimClock::starting_at(2.0);
        clock.advance(-1.0);
        assert_eq!(clock.now(), 2.0);
        assert_eq!(clock.dt(), 0.0);

        clock.advance(f32::NAN);
        assert_eq!(clock.now(), 2.0);
    }

    #[test]
    fn clock_keeps_advancing_after_long_uptime() {
        let start = 1.0e6;
        let mut clock = SimClock::starting_at(start);
        for _ in 0..600 {
            clock.advance(1.0 / 60.0);
        }
        assert!((clock.now() - start - 10.0).abs() < 1e-3);
    }

    #[test]
    fn ids_render_readably() {
        assert_eq!(ObjectId(7).to_string(), "object#7");
        assert_eq!(ActorId(1).to_string(), "actor#1");
    }

    #[test]
    fn tick_advances() {
        assert_eq!(SimTick::ZERO.advance(3), SimTick(3));
    }
}
