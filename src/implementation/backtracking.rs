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

//! This module provides the implementation of the backtracking solver: a
//! depth first search over the implicit binary decision tree where each level
//! decides whether one item is packed or left out. It offers the exact same
//! optimality guarantee as the exhaustive solver (and the same asymptotic
//! cost) but visits the candidate subsets in a different order, which matters
//! when several optima tie on value.

use crate::{Instance, Solution, SolveError, Solver};

/// Exact solver performing a depth first include/exclude search. At every
/// node the search first commits the current item to the sack before trying
/// to leave it out, and a branch is pruned as soon as the accumulated weight
/// exceeds the capacity (weight feasibility is the only pruning rule). The
/// incumbent is replaced on **strict** value improvement only, so among equal
/// value optima the one reached first in this include-first order (denser,
/// lower positions packed) wins -- which may be a different selection than
/// the one the exhaustive solver keeps.
#[derive(Debug, Clone, Copy, Default)]
pub struct Backtracking;

impl Solver for Backtracking {
    fn name(&self) -> &'static str {
        "backtracking"
    }
    fn is_exact(&self) -> bool {
        true
    }
    fn solve(&self, instance: &Instance, capacity: usize) -> Result<Solution, SolveError> {
        let mut best = Solution::empty();
        let mut partial = Vec::with_capacity(instance.len());
        explore(instance, capacity, 0, 0, 0.0, &mut partial, &mut best);
        Ok(best)
    }
}

/// One node of the decision tree: the items before `position` have been
/// decided and amount to `weight` and `value`, the packed ones being listed
/// in `partial`. Recursion depth is bounded by the instance size.
fn explore(
    instance: &Instance,
    capacity: usize,
    position: usize,
    weight: usize,
    value: f64,
    partial: &mut Vec<usize>,
    best: &mut Solution,
) {
    if weight > capacity {
        return;
    }
    if value > best.total_value {
        best.total_value = value;
        best.total_weight = weight;
        best.selected.clear();
        best.selected.extend_from_slice(partial);
    }
    if position == instance.len() {
        return;
    }
    let item = instance.item(position);
    // include first, then exclude: this order must not change
    partial.push(position);
    explore(
        instance,
        capacity,
        position + 1,
        weight + item.weight,
        value + item.value,
        partial,
        best,
    );
    partial.pop();
    explore(instance, capacity, position + 1, weight, value, partial, best);
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_backtracking {
    use crate::{Backtracking, Exhaustive, Instance, Solver};

    #[test]
    fn it_finds_the_optimum_of_the_reference_instance() {
        let instance = Instance::from_pairs(&[(2, 3.0), (3, 4.0), (4, 5.0), (5, 6.0)]);
        let solution = Backtracking.solve(&instance, 5).unwrap();
        assert_eq!(7.0, solution.total_value);
        assert_eq!(5, solution.total_weight);
        assert_eq!(vec![0, 1], solution.selected);
    }
    #[test]
    fn an_empty_instance_yields_the_empty_solution() {
        let instance = Instance::default();
        let solution = Backtracking.solve(&instance, 100).unwrap();
        assert_eq!(0.0, solution.total_value);
        assert!(solution.selected.is_empty());
    }
    #[test]
    fn a_zero_capacity_yields_the_empty_solution() {
        let instance = Instance::from_pairs(&[(2, 3.0), (3, 4.0)]);
        let solution = Backtracking.solve(&instance, 0).unwrap();
        assert_eq!(0.0, solution.total_value);
        assert!(solution.selected.is_empty());
    }
    #[test]
    fn an_item_exceeding_the_capacity_is_never_packed() {
        let instance = Instance::from_pairs(&[(10, 100.0)]);
        let solution = Backtracking.solve(&instance, 5).unwrap();
        assert_eq!(0.0, solution.total_value);
        assert!(solution.selected.is_empty());
    }
    #[test]
    fn include_first_order_may_pick_a_different_optimum_than_enumeration() {
        // {1} and {0, 1} both amount to 5.0: the dfs reaches the denser
        // {0, 1} first while ascending mask enumeration reaches {1} first
        let instance = Instance::from_pairs(&[(1, 0.0), (1, 5.0)]);
        let dfs = Backtracking.solve(&instance, 2).unwrap();
        let enu = Exhaustive.solve(&instance, 2).unwrap();
        assert_eq!(dfs.total_value, enu.total_value);
        assert_eq!(vec![0, 1], dfs.selected);
        assert_eq!(vec![1], enu.selected);
    }
    #[test]
    fn it_agrees_with_exhaustive_enumeration_on_the_optimal_value() {
        let instance = Instance::from_pairs(&[
            (4, 10.0),
            (2, 7.5),
            (7, 11.0),
            (1, 2.25),
            (3, 6.0),
            (5, 9.75),
        ]);
        for capacity in 0..=25 {
            let dfs = Backtracking.solve(&instance, capacity).unwrap();
            let enu = Exhaustive.solve(&instance, capacity).unwrap();
            assert_eq!(enu.total_value, dfs.total_value, "capacity {capacity}");
        }
    }
}
