//! The agent ring and the per-frame view handed to renderers.

use ring_agent::{Agent, Orientation};
use ring_core::SimRng;

// ── RingState ─────────────────────────────────────────────────────────────────

/// One fully-realized configuration of the ring.
///
/// Index order *is* the adjacency ring: agent `i` neighbours agent
/// `(i + 1) % len`, and only ring-adjacent pairs are ever checked for
/// collision.  The order is fixed at randomization time and preserved by
/// every transition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingState {
    pub agents: Vec<Agent>,
}

impl RingState {
    /// Randomize a fresh ring: uniform positions in [0, 1), uniform
    /// orientations, tags by creation index.
    ///
    /// With `sort_initial`, agents are sorted by position and re-tagged by
    /// sorted index so displayed labels read consecutively around the
    /// loop.  Population validation happens in `EngineConfig::validate`;
    /// by the time a ring is built the count is known to be >= 2.
    pub fn random(population: usize, sort_initial: bool, rng: &mut SimRng) -> Self {
        let mut agents: Vec<Agent> = (0..population)
            .map(|i| {
                let position = rng.gen_range(0.0..1.0);
                Agent::new(position, Orientation::random(rng), i as u32)
            })
            .collect();

        if sort_initial {
            agents.sort_by(|a, b| a.position.total_cmp(&b.position));
            for (i, agent) in agents.iter_mut().enumerate() {
                agent.tag = i as u32;
            }
        }

        Self { agents }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// The ring-adjacent index pairs `(i, (i + 1) % len)` in scan order.
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.len();
        (0..n).map(move |i| (i, (i + 1) % n))
    }
}

// ── AgentView ─────────────────────────────────────────────────────────────────

/// Read-only per-agent snapshot for one frame, in ring order.
///
/// `position` is the *interpolated* location for the current phase — this
/// is the value a renderer maps onto its drawing surface.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentView {
    pub position: f64,
    pub orientation: Orientation,
    pub tag: u32,
}
