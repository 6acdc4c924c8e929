// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module defines the `Solver` trait.

use crate::{Instance, Solution, SolveError};

/// This is the solver abstraction. It is implemented by each of the four
/// algorithms this crate compares (exhaustive enumeration, depth first
/// backtracking, weight indexed dynamic programming, and the ratio greedy
/// heuristic). A solver is a stateless strategy: every call to `solve`
/// allocates and exclusively owns its transient buffers (selection scratch
/// space, dp tables) for the duration of the call and returns a freshly owned
/// `Solution` to the caller.
///
/// Calls are fully synchronous and never share mutable state, so the same
/// solver value can be reused across any number of invocations.
pub trait Solver {
    /// A short human readable name identifying the algorithm. This is what
    /// the benchmark driver prints in front of each measure.
    fn name(&self) -> &'static str;
    /// True iff this solver is guaranteed to return the global optimum for
    /// every valid input. The greedy heuristic is the only inexact solver of
    /// this crate: its solutions are always feasible but their value may fall
    /// short of the true optimum.
    fn is_exact(&self) -> bool;
    /// Searches for the most valuable feasible packing of the given instance
    /// within the given capacity. The returned solution always satisfies
    /// `total_weight <= capacity` and its totals are the exact sums over the
    /// selected positions. An `Err` is only produced for the structural
    /// conditions documented on `SolveError`; every valid input -- including
    /// an empty instance, a zero capacity, or items that all exceed the
    /// capacity -- yields an `Ok` solution (possibly the empty one).
    fn solve(&self, instance: &Instance, capacity: usize) -> Result<Solution, SolveError>;
}
