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

//! This module provides the implementation of the greedy solver: the one
//! inexact algorithm of the crate. It ranks the items by decreasing value to
//! weight ratio and packs them first fit against the remaining capacity, in
//! O(n log n). Its solutions are always feasible and never exceed the true
//! optimum, but they can fall short of it whenever fitting a better
//! combination requires skipping a higher ratio item.

use std::cmp::Ordering;

use binary_heap_plus::BinaryHeap;
use compare::Compare;
use ordered_float::OrderedFloat;

use crate::{Instance, Solution, SolveError, Solver};

/// Orders catalog positions for the greedy scan: higher value to weight ratio
/// compares greater, and equal ratios are untied by preferring the lower
/// original position (which makes runs reproducible where an unstable sort
/// would not be). A zero weight item ranks with an infinite ratio and is
/// hence always considered first.
#[derive(Debug, Clone, Copy)]
pub struct RatioRanking<'a> {
    instance: &'a Instance,
}
impl RatioRanking<'_> {
    fn ratio(&self, position: usize) -> OrderedFloat<f64> {
        let item = self.instance.item(position);
        if item.weight == 0 {
            OrderedFloat(f64::INFINITY)
        } else {
            OrderedFloat(item.value / item.weight as f64)
        }
    }
}
impl Compare<usize> for RatioRanking<'_> {
    fn compare(&self, a: &usize, b: &usize) -> Ordering {
        self.ratio(*a)
            .cmp(&self.ratio(*b))
            .then_with(|| b.cmp(a))
    }
}

/// Heuristic solver packing the items in decreasing ratio order. The ranking
/// is materialized as a binary heap parameterized by `RatioRanking` and the
/// single pass pops one position at a time, admitting it iff its weight does
/// not exceed the remaining capacity. Rejected items are skipped for good:
/// there is no backtracking.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Solver for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }
    fn is_exact(&self) -> bool {
        false
    }
    fn solve(&self, instance: &Instance, capacity: usize) -> Result<Solution, SolveError> {
        let ranking = RatioRanking { instance };
        let positions = (0..instance.len()).collect::<Vec<_>>();
        let mut heap = BinaryHeap::from_vec_cmp(positions, ranking);

        let mut solution = Solution::empty();
        let mut remaining = capacity;
        while let Some(position) = heap.pop() {
            let item = instance.item(position);
            if item.weight <= remaining {
                remaining -= item.weight;
                solution.selected.push(position);
                solution.total_weight += item.weight;
                solution.total_value += item.value;
            }
        }
        Ok(solution)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
