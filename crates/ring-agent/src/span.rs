//! Distance arithmetic on the closed unit loop [0, 1).
//!
//! Positions live on a circle of circumference 1, so "distance" is always
//! direction-dependent: travelling from 0.9 to 0.1 is 0.2 forward but 0.8
//! in reverse.  Everything in the engine that compares or advances
//! positions goes through these two functions.

use crate::Orientation;

/// Wrap `x` into [0, 1).
///
/// Uses the Euclidean remainder so negative inputs (an agent stepping
/// backwards across 0) land in range rather than staying negative.
#[inline]
pub fn wrap_unit(x: f64) -> f64 {
    let r = x.rem_euclid(1.0);
    // rem_euclid(1.0) can return exactly 1.0 when x is a tiny negative
    // value, because the quotient rounds.  Fold that back to 0.
    if r >= 1.0 { 0.0 } else { r }
}

/// Directed travel distance from `from` to `to` along `orientation`.
///
/// Coincident endpoints measure the *full* loop (1.0), not zero: an agent
/// already at its destination must travel a whole lap before being there
/// again.  This convention is what keeps the transition rate (`2 / d`)
/// total — the divisor can never be 0.
pub fn directed_span(from: f64, to: f64, orientation: Orientation) -> f64 {
    if from == to {
        return 1.0;
    }
    let gap = (from - to).abs();
    // The straight gap applies when the ordering of the endpoints agrees
    // with the travel direction; otherwise the path wraps around 0.
    let straight = match orientation {
        Orientation::Forward => from < to,
        Orientation::Reverse => from > to,
    };
    if straight { gap } else { 1.0 - gap }
}
