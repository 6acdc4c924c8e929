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

//! This module provides the implementation of the exhaustive solver: it
//! enumerates every one of the 2^n subsets of the instance and keeps the most
//! valuable feasible one. This is the reference point every other solver of
//! the crate is compared against, and it is only usable for very small
//! instances (n <= ~20) since its cost is O(2^n * n).

use crate::{Instance, Solution, SolveError, Solver};

/// Exact solver enumerating all subsets of the instance. Each subset is
/// encoded as an n-bit counter used as a membership mask (bit j set means the
/// item at position j is packed) and the masks are visited in ascending
/// numeric order. A candidate replaces the current best on **strict** value
/// improvement only, so among equal value optima the lowest mask wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exhaustive;

impl Solver for Exhaustive {
    fn name(&self) -> &'static str {
        "exhaustive"
    }
    fn is_exact(&self) -> bool {
        true
    }
    fn solve(&self, instance: &Instance, capacity: usize) -> Result<Solution, SolveError> {
        let n = instance.len();
        let limit = u64::BITS as usize - 1;
        if n > limit {
            return Err(SolveError::TooManyItems { nb_items: n, limit });
        }

        // initial best is the empty selection: the result is well defined
        // even when no single item fits
        let mut best_mask = 0_u64;
        let mut best_weight = 0_usize;
        let mut best_value = 0.0_f64;

        for mask in 0..(1_u64 << n) {
            let mut weight = 0_usize;
            let mut value = 0.0_f64;
            for (position, item) in instance.items().iter().enumerate() {
                if mask & (1 << position) != 0 {
                    weight += item.weight;
                    value += item.value;
                }
            }
            if weight <= capacity && value > best_value {
                best_mask = mask;
                best_weight = weight;
                best_value = value;
            }
        }

        let selected = (0..n).filter(|pos| best_mask & (1 << pos) != 0).collect();
        Ok(Solution {
            selected,
            total_weight: best_weight,
            total_value: best_value,
        })
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_exhaustive {
    use crate::{Exhaustive, Instance, SolveError, Solver};

    #[test]
    fn it_finds_the_optimum_of_the_reference_instance() {
        let instance = Instance::from_pairs(&[(2, 3.0), (3, 4.0), (4, 5.0), (5, 6.0)]);
        let solution = Exhaustive.solve(&instance, 5).unwrap();
        assert_eq!(7.0, solution.total_value);
        assert_eq!(5, solution.total_weight);
        assert_eq!(vec![0, 1], solution.selected);
    }
    #[test]
    fn an_empty_instance_yields_the_empty_solution() {
        let instance = Instance::default();
        let solution = Exhaustive.solve(&instance, 100).unwrap();
        assert_eq!(0.0, solution.total_value);
        assert_eq!(0, solution.total_weight);
        assert!(solution.selected.is_empty());
    }
    #[test]
    fn a_zero_capacity_yields_the_empty_solution() {
        let instance = Instance::from_pairs(&[(2, 3.0), (3, 4.0)]);
        let solution = Exhaustive.solve(&instance, 0).unwrap();
        assert_eq!(0.0, solution.total_value);
        assert!(solution.selected.is_empty());
    }
    #[test]
    fn an_item_exceeding_the_capacity_is_never_packed() {
        let instance = Instance::from_pairs(&[(10, 100.0)]);
        let solution = Exhaustive.solve(&instance, 5).unwrap();
        assert_eq!(0.0, solution.total_value);
        assert!(solution.selected.is_empty());
    }
    #[test]
    fn among_equal_value_optima_the_lowest_mask_wins() {
        // both singletons are optimal; the mask containing item 0 is
        // enumerated first and a tie never replaces the incumbent
        let instance = Instance::from_pairs(&[(1, 5.0), (1, 5.0)]);
        let solution = Exhaustive.solve(&instance, 1).unwrap();
        assert_eq!(vec![0], solution.selected);
    }
    #[test]
    fn too_many_items_for_a_mask_is_a_structured_error() {
        let pairs = vec![(1_usize, 1.0_f64); 64];
        let instance = Instance::from_pairs(&pairs);
        let outcome = Exhaustive.solve(&instance, 10);
        assert_eq!(
            Err(SolveError::TooManyItems { nb_items: 64, limit: 63 }),
            outcome
        );
    }
}
