// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Picks which vertex the chaos game jumps toward next.
//!
//! For a triangle, or anything simpler, every vertex is fair game.
//! For larger polygons a draw of three distinct vertices is made, and
//! the candidate is redrawn while it would form a particular
//! near-duplicate pattern that shows up as streaks in the picture:
//! the second and third draws coincide and the candidate is a
//! neighbour (cyclically) of the second.  The rule is kept exactly as
//! it was found to work.

use rand::seq::index;
use rand::Rng;

/// A vertex selector.  By default the rejection loop retries for as
/// long as it takes, which is almost surely not long at all; a cap
/// can be set for callers that want a hard bound on the work done per
/// step.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct VertexSelector {
    retry_cap: Option<usize>,
}

/// True when `candidate` must be redrawn: the anchor pair had no gap,
/// and the candidate is adjacent to the anchor, including across the
/// wrap from the last vertex back to the first.
pub fn is_degenerate(
    polygon_length: usize,
    anchor_gap: usize,
    anchor: usize,
    candidate: usize,
) -> bool {
    let dst = if candidate > anchor {
        candidate - anchor
    } else {
        anchor - candidate
    };
    anchor_gap == 0 && (dst == 1 || dst + 1 == polygon_length)
}

impl VertexSelector {
    /// A selector that never gives up on the rejection loop.
    pub fn unbounded() -> Self {
        VertexSelector { retry_cap: None }
    }

    /// A selector that redraws at most `cap` times before settling on
    /// the anchor vertex, which the rejection rule always accepts.
    pub fn with_retry_cap(cap: usize) -> Self {
        VertexSelector {
            retry_cap: Some(cap.max(1)),
        }
    }

    /// The retry cap, if there is one.
    pub fn retry_cap(&self) -> Option<usize> {
        self.retry_cap
    }

    /// Returns an index in `0..polygon_length`.  `polygon_length` must
    /// be at least one.
    pub fn next_index<R: Rng>(&self, rng: &mut R, polygon_length: usize) -> usize {
        if polygon_length <= 3 {
            return rng.gen_range(0, polygon_length);
        }

        let mut idx = index::sample(rng, polygon_length, 3).into_vec();
        idx.sort();
        let anchor_gap = idx[2] - idx[1];
        self.redraw(rng, polygon_length, idx[1], anchor_gap)
    }

    fn redraw<R: Rng>(
        &self,
        rng: &mut R,
        polygon_length: usize,
        anchor: usize,
        anchor_gap: usize,
    ) -> usize {
        let mut draws = 0;
        loop {
            let candidate = rng.gen_range(0, polygon_length);
            if !is_degenerate(polygon_length, anchor_gap, anchor, candidate) {
                return candidate;
            }
            draws += 1;
            if let Some(cap) = self.retry_cap {
                if draws >= cap {
                    warn!(
                        "vertex selection gave up after {} redraws, using anchor {}",
                        draws, anchor
                    );
                    return anchor;
                }
            }
        }
    }
}
