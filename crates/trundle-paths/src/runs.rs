use std::collections::BinaryHeap;

use trundle_core::Point;

use crate::SearchRange;
use crate::direction::Direction;
use crate::edges::push_run_edges;
use crate::error::SearchError;
use crate::limits::RunLimits;
use crate::searchrange::{NodeRef, UNREACHABLE};
use crate::traits::RunCost;

impl SearchRange {
    /// Compute the minimum cost of a route from `from` to `to` honoring the
    /// run limits: after every turn the route continues straight for at
    /// least `limits.min()` cells, at most `limits.max()`, and never
    /// reverses.
    ///
    /// The cost of a route is the sum of entry costs of every cell it steps
    /// onto; the start cell is never counted. The search relaxes
    /// pre-weighted run edges over `(cell, arrival direction)` states with a
    /// lazy-deletion priority queue and runs the frontier to exhaustion; the
    /// answer is the cheapest arrival at `to` over all four directions.
    ///
    /// Fails with [`SearchError::OutOfBounds`] if an endpoint lies outside
    /// the range, and [`SearchError::Unreachable`] if no direction reaches
    /// `to` under the limits.
    pub fn route_cost<C: RunCost>(
        &mut self,
        costs: &C,
        from: Point,
        to: Point,
        limits: RunLimits,
    ) -> Result<i32, SearchError> {
        if !self.rng.contains(from) {
            return Err(SearchError::OutOfBounds(from));
        }
        if !self.rng.contains(to) {
            return Err(SearchError::OutOfBounds(to));
        }

        // Reset the flat cost map.
        for v in self.cost_map.iter_mut() {
            *v = UNREACHABLE;
        }

        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();

        // Seed two pseudo-initial states at cost 0. Their perpendicular
        // sets jointly cover all four directions, so the first move is
        // unconstrained.
        for dir in [Direction::Right, Direction::Down] {
            if let Some(si) = self.slot(from, dir) {
                let n = &mut self.nodes[si];
                n.g = 0;
                n.generation = cur_gen;
                n.open = true;
                self.cost_map[si] = 0;
                open.push(NodeRef { idx: si, g: 0 });
            }
        }

        let mut ebuf = std::mem::take(&mut self.ebuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cn = &self.nodes[ci];
            if cn.generation != cur_gen || !cn.open {
                continue;
            }
            let current_g = cn.g;
            self.nodes[ci].open = false;

            let cp = self.cell_of(ci);
            let cd = self.dir_of(ci);

            ebuf.clear();
            push_run_edges(costs, self.rng, cp, cd, limits, &mut ebuf);

            for e in ebuf.iter() {
                let Some(ni) = self.slot(e.to, e.dir) else {
                    continue;
                };
                let tentative = current_g + e.weight;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative;
                n.open = true;
                self.cost_map[ni] = tentative;
                open.push(NodeRef {
                    idx: ni,
                    g: tentative,
                });
            }
        }

        self.ebuf = ebuf;

        // Cheapest arrival over the four direction slots at the target.
        let best = self.cost_at(to);
        if best == UNREACHABLE {
            return Err(SearchError::Unreachable);
        }
        Ok(best)
    }
}
