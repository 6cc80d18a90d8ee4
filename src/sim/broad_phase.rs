//! Single-axis sweep-and-prune broad phase
//!
//! Every ball is projected onto the x-axis as `[x - r, x + r]`. Sorting the
//! interval endpoints and sweeping them left to right yields every pair whose
//! x-intervals overlap, which is a superset of the pairs whose circles do.

use super::state::{Ball, CandidatePair};

/// Which end of a ball's x-interval an endpoint marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// One tagged interval endpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoint {
    pub coord: f32,
    pub ball: usize,
    pub side: Side,
}

/// Reusable sweep buffers, so repeated passes within a tick don't reallocate
#[derive(Debug, Default)]
pub struct SweepAndPrune {
    endpoints: Vec<Endpoint>,
    active: Vec<usize>,
}

impl SweepAndPrune {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the ordered endpoint list from current ball positions.
    ///
    /// Ties keep insertion order: ball index ascending, left before right.
    fn rebuild(&mut self, balls: &[Ball]) {
        self.endpoints.clear();
        self.endpoints.reserve(balls.len() * 2);
        for (ball, b) in balls.iter().enumerate() {
            let (left, right) = b.x_extent();
            self.endpoints.push(Endpoint {
                coord: left,
                ball,
                side: Side::Left,
            });
            self.endpoints.push(Endpoint {
                coord: right,
                ball,
                side: Side::Right,
            });
        }
        // Stable sort
        self.endpoints.sort_by(|a, b| a.coord.total_cmp(&b.coord));
    }

    /// Sorted endpoints from the most recent pass
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// Collect every pair whose x-intervals overlap into `out` (cleared first).
    ///
    /// Each unordered pair appears once: it is emitted by the left endpoint of
    /// whichever ball opens later.
    pub fn candidate_pairs_into(&mut self, balls: &[Ball], out: &mut Vec<CandidatePair>) {
        out.clear();
        self.rebuild(balls);
        self.active.clear();

        for endpoint in &self.endpoints {
            match endpoint.side {
                Side::Left => {
                    out.extend(
                        self.active
                            .iter()
                            .map(|&open| CandidatePair::new(open, endpoint.ball)),
                    );
                    self.active.push(endpoint.ball);
                }
                Side::Right => {
                    if let Some(idx) = self.active.iter().position(|&b| b == endpoint.ball) {
                        self.active.remove(idx);
                    }
                }
            }
        }
    }

    pub fn candidate_pairs(&mut self, balls: &[Ball]) -> Vec<CandidatePair> {
        let mut out = Vec::new();
        self.candidate_pairs_into(balls, &mut out);
        out
    }
}

/// One-shot convenience wrapper around [`SweepAndPrune`]
pub fn candidate_pairs(balls: &[Ball]) -> Vec<CandidatePair> {
    SweepAndPrune::new().candidate_pairs(balls)
}
