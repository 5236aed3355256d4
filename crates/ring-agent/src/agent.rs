//! The `Agent` type and its travel orientation.

use std::fmt;

use ring_core::SimRng;

use crate::span::{directed_span, wrap_unit};

// ── Orientation ───────────────────────────────────────────────────────────────

/// One of the two travel directions around the loop.
///
/// `Forward` moves in the position-increasing sense, `Reverse` in the
/// position-decreasing sense.  A dedicated enum (rather than a 0/1 integer
/// with modulo flipping) makes invalid directions unrepresentable.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Forward,
    Reverse,
}

impl Orientation {
    /// The opposite direction — the post-collision "bounce".
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Orientation::Forward => Orientation::Reverse,
            Orientation::Reverse => Orientation::Forward,
        }
    }

    /// +1.0 for `Forward`, -1.0 for `Reverse` — the sign applied to any
    /// travel distance when advancing a position.
    #[inline]
    pub fn signum(self) -> f64 {
        match self {
            Orientation::Forward => 1.0,
            Orientation::Reverse => -1.0,
        }
    }

    /// Draw a uniformly random orientation.
    pub fn random(rng: &mut SimRng) -> Self {
        if rng.gen_bool(0.5) { Orientation::Forward } else { Orientation::Reverse }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Forward => write!(f, "forward"),
            Orientation::Reverse => write!(f, "reverse"),
        }
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// A point agent on the unit loop.
///
/// `tag` is a display identity only: it is assigned at randomization time
/// and carried through every transition untouched, so a viewer can follow
/// one agent across collisions.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    /// Location on the loop, always in [0, 1).
    pub position: f64,
    pub orientation: Orientation,
    pub tag: u32,
}

impl Agent {
    /// Construct an agent, wrapping `position` into [0, 1).
    pub fn new(position: f64, orientation: Orientation, tag: u32) -> Self {
        Self { position: wrap_unit(position), orientation, tag }
    }

    /// Return this agent advanced by `distance` along its own orientation.
    #[inline]
    pub fn advanced(self, distance: f64) -> Self {
        Self {
            position: wrap_unit(self.position + self.orientation.signum() * distance),
            ..self
        }
    }

    /// Directed collision distance from `self` to `other`.
    ///
    /// `None` when both agents travel the same way: such a pair moves in
    /// lock-step and can never collide.  Coincident opposite-direction
    /// agents measure the full loop (1.0) — their *next* meeting, not the
    /// current coincidence.
    pub fn distance_to(&self, other: &Agent) -> Option<f64> {
        if self.orientation == other.orientation {
            return None;
        }
        Some(directed_span(self.position, other.position, self.orientation))
    }
}
