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

//! # KNAPBENCH
//! Knapbench is a small benchmark suite comparing four classical algorithms
//! for the 0/1 knapsack problem: exhaustive enumeration, depth first
//! backtracking, weight indexed dynamic programming, and a value to weight
//! ratio greedy heuristic. The point of the crate is not to be the fastest
//! knapsack solver around: it is to expose the four algorithms behind one
//! common `Solver` abstraction with carefully specified tie break and
//! reconstruction behaviors, so that their exactness guarantees and their
//! scaling (in item count and in capacity) can be studied side by side.
//!
//! The three exact solvers always return the same optimal **value** for a
//! given instance and capacity. Their **selections** may legitimately differ
//! when several optima tie on value, because each algorithm encounters the
//! optima in its own order (ascending masks, include-first depth first
//! search, and catalog-order table updates respectively). All of this is
//! deterministic: repeated runs on the same input return identical solutions.
//!
//! ## Quick Example
//! ```
//! use knapbench::*;
//!
//! // four items, given as (weight, value) pairs
//! let instance = Instance::from_pairs(&[(2, 3.0), (3, 4.0), (4, 5.0), (5, 6.0)]);
//!
//! // the exact optimum within capacity 5 packs the first two items
//! let best = DynProg.solve(&instance, 5).unwrap();
//! assert_eq!(7.0, best.total_value);
//! assert_eq!(5, best.total_weight);
//!
//! // the greedy heuristic is feasible but not necessarily optimal
//! let approx = Greedy.solve(&instance, 5).unwrap();
//! assert!(approx.total_value <= best.total_value);
//! ```
//!
//! ## Picking a solver
//! The exponential solvers (`Exhaustive` and `Backtracking`) are only usable
//! on very small instances: it is up to the caller to bound the item count
//! (anything beyond ~20-25 items is computationally infeasible regardless of
//! the available memory). `DynProg` is exact and polynomial but its tables
//! scale with the capacity, and `Greedy` is near linear but approximate.
//! This is exactly the tradeoff the `knapbench` binary sweeps over.

mod common;
mod abstraction;
mod implementation;
pub mod instance;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
