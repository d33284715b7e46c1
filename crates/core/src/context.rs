//! The per-invocation owner of all mutable scratch state shared by the
//! burning, reduction and search engines.
//!
//! The reference algorithm this system reimplements kept this state in
//! process-wide arrays sized by a compile-time maximum vertex count. That is
//! a re-entrancy hazard and rules out running two searches concurrently.
//! `WorkContext` replaces it with an explicit, heap-allocated value sized by
//! the actual graph and passed down through the call tree; callers own it and
//! may reuse one context across several graphs of the same or smaller size by
//! calling [`WorkContext::reset`], or give each thread its own context when
//! processing graphs concurrently.

use std::collections::VecDeque;

use crate::divisor::Divisor;

pub struct WorkContext {
    burnt_edges: Vec<u32>,
    burnt: Vec<bool>,
    queue: VecDeque<usize>,
    working: Divisor,
    can_reach: Vec<bool>,
    partial: Divisor,
    script: Vec<u32>,
}

impl WorkContext {
    /// Allocates scratch buffers sized for a graph with `n` vertices.
    pub fn new(n: usize) -> Self {
        Self {
            burnt_edges: vec![0; n],
            burnt: vec![false; n],
            queue: VecDeque::new(),
            working: Divisor::zero(n),
            can_reach: vec![false; n],
            partial: Divisor::zero(n),
            script: vec![0; n],
        }
    }

    /// Re-sizes every buffer for a (possibly different) graph of `n`
    /// vertices, discarding whatever state was left over from the previous
    /// invocation.
    pub fn reset(&mut self, n: usize) {
        *self = Self::new(n);
    }

    pub fn n(&self) -> usize {
        self.working.len()
    }

    // --- burning scratch -----------------------------------------------

    pub fn burnt_edges_mut(&mut self) -> &mut [u32] {
        &mut self.burnt_edges
    }

    pub fn burnt_mut(&mut self) -> &mut [bool] {
        &mut self.burnt
    }

    pub fn queue_mut(&mut self) -> &mut VecDeque<usize> {
        &mut self.queue
    }

    /// The three buffers `burn` drives simultaneously, borrowed together so
    /// the propagation loop doesn't have to fight the borrow checker over
    /// three accessors into the same context.
    pub fn burn_buffers_mut(&mut self) -> (&mut [u32], &mut [bool], &mut VecDeque<usize>) {
        (&mut self.burnt_edges, &mut self.burnt, &mut self.queue)
    }

    /// Zeroes the burnt-edge counters and burnt flags and empties the work
    /// queue, ready for a fresh call to `burn`.
    pub fn clear_burn_state(&mut self) {
        self.burnt_edges.iter_mut().for_each(|c| *c = 0);
        self.burnt.iter_mut().for_each(|b| *b = false);
        self.queue.clear();
    }

    // --- reduction scratch -----------------------------------------------

    pub fn working(&self) -> &Divisor {
        &self.working
    }

    pub fn working_mut(&mut self) -> &mut Divisor {
        &mut self.working
    }

    pub fn script_mut(&mut self) -> &mut [u32] {
        &mut self.script
    }

    pub fn clear_script(&mut self) {
        self.script.iter_mut().for_each(|s| *s = 0);
    }

    // --- rank scratch -----------------------------------------------

    pub fn can_reach(&self) -> &[bool] {
        &self.can_reach
    }

    pub fn can_reach_mut(&mut self) -> &mut [bool] {
        &mut self.can_reach
    }

    /// The working divisor and the can-reach flags, borrowed together: the
    /// positive-rank test mutates both on every `u` for which it has to burn.
    pub fn rank_buffers_mut(&mut self) -> (&mut Divisor, &mut [bool]) {
        (&mut self.working, &mut self.can_reach)
    }

    // --- search scratch -----------------------------------------------

    pub fn partial(&self) -> &Divisor {
        &self.partial
    }

    pub fn partial_mut(&mut self) -> &mut Divisor {
        &mut self.partial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_context_is_zeroed() {
        let ctx = WorkContext::new(5);
        assert_eq!(ctx.n(), 5);
        assert_eq!(ctx.working().degree(), 0);
        assert_eq!(ctx.partial().degree(), 0);
    }

    #[test]
    fn reset_resizes_and_clears() {
        let mut ctx = WorkContext::new(3);
        ctx.working_mut()[0] = 7;
        ctx.reset(4);
        assert_eq!(ctx.n(), 4);
        assert_eq!(ctx.working()[0], 0);
    }
}
