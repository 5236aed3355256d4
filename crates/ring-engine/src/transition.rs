//! Next-collision computation: from one ring configuration to the next.

use crate::RingState;

/// The result of one transition step.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// The post-collision configuration the runtime interpolates toward.
    pub state: RingState,

    /// Phase-rate scalar: how fast the interpolation phase must advance so
    /// that a fixed configured speed reads as constant agent velocity.
    /// `2.0 / min_gap` when a collision exists, `1.0` for a terminal ring.
    pub rate: f64,

    /// Ring indices of the colliding pair, `None` for a terminal ring.
    pub collision: Option<(usize, usize)>,
}

/// Compute the next collision and the state that follows it.
///
/// Scans the ring-adjacent pairs for the smallest directed gap between two
/// agents moving toward each other (a stable scan — on ties the first pair
/// in ring order wins), advances every agent by half that gap along its
/// own direction, and flips the minimal pair.
///
/// A ring where all agents share one orientation has no collision to find:
/// the input is returned unchanged (rate 1.0), so repeated application is
/// the identity and the animation free-runs.
///
/// The rate division is total: coincident opposite-direction neighbours
/// measure a full loop (1.0), never 0.
pub fn next_transition(state: &RingState) -> Transition {
    // Find the adjacent pair with the minimum directed gap.
    let mut min: Option<(usize, usize, f64)> = None;
    for (i, j) in state.adjacent_pairs() {
        let Some(gap) = state.agents[i].distance_to(&state.agents[j]) else {
            continue;
        };
        match min {
            Some((_, _, best)) if gap >= best => {}
            _ => min = Some((i, j, gap)),
        }
    }

    let Some((first, second, min_gap)) = min else {
        // Terminal ring: every agent moves the same way, nobody ever meets.
        return Transition { state: state.clone(), rate: 1.0, collision: None };
    };

    // All agents move at unit speed for the same elapsed time, so each
    // covers half the gap the colliding pair jointly closes.
    let agents = state
        .agents
        .iter()
        .enumerate()
        .map(|(i, agent)| {
            let mut next = agent.advanced(min_gap / 2.0);
            if i == first || i == second {
                next.orientation = next.orientation.flip();
            }
            next
        })
        .collect();

    Transition {
        state: RingState { agents },
        rate: 2.0 / min_gap,
        collision: Some((first, second)),
    }
}
