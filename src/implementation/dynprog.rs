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

//! This module provides the implementation of the dynamic programming solver.
//! It is exact for integer weights and integer capacity, and it is the only
//! exact solver of this crate which remains usable on large instances since
//! it runs in O(n * W) time and O(W) auxiliary space. The capacity driven
//! memory footprint (up to 1,000,000 slots in the benchmark sweep) is its
//! dominant resource concern.

use crate::{Instance, Solution, SolveError, Solver};

/// Exact solver maintaining a value table indexed by achievable weight
/// `0..=capacity` together with a parallel predecessor table recording which
/// item (if any) last improved each weight slot. Items are processed in
/// catalog order and the slots are scanned from the capacity down to the item
/// weight: the descending scan is what guarantees each item is used at most
/// once per pass (the 0/1 property). Both tables are updated on **strict**
/// improvement only, so among items of equal marginal value the earliest one
/// in catalog order is the one the reconstruction prefers.
///
/// Zero weight items are excluded by precondition: a zero weight predecessor
/// would stall the reconstruction walk, and such items are reported with a
/// structured error instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynProg;

impl Solver for DynProg {
    fn name(&self) -> &'static str {
        "dynamic programming"
    }
    fn is_exact(&self) -> bool {
        true
    }
    fn solve(&self, instance: &Instance, capacity: usize) -> Result<Solution, SolveError> {
        if let Some(item) = instance.items().iter().find(|item| item.weight == 0) {
            return Err(SolveError::ZeroWeightItem { index: item.index });
        }

        let mut value = vec![0.0_f64; capacity + 1];
        let mut predecessor: Vec<Option<usize>> = vec![None; capacity + 1];

        for (position, item) in instance.items().iter().enumerate() {
            if item.weight > capacity {
                continue;
            }
            for slot in (item.weight..=capacity).rev() {
                let candidate = value[slot - item.weight] + item.value;
                if candidate > value[slot] {
                    value[slot] = candidate;
                    predecessor[slot] = Some(position);
                }
            }
        }

        reconstruct(instance, &value, &predecessor, capacity)
    }
}

/// Walks the predecessor chain backward from the full capacity slot: each
/// step packs the recorded item, subtracts its weight from the current slot
/// and carries on until no predecessor remains. The walk is bounded by the
/// instance size and rejects duplicate positions: a chain violating either
/// bound cannot be produced by a correctly built table, and is reported as a
/// `BrokenReconstruction` error rather than silently yielding a wrong
/// selection.
fn reconstruct(
    instance: &Instance,
    value: &[f64],
    predecessor: &[Option<usize>],
    capacity: usize,
) -> Result<Solution, SolveError> {
    let mut selected = vec![];
    let mut taken = vec![false; instance.len()];
    let mut total_weight = 0_usize;
    let mut slot = capacity;

    while slot > 0 {
        match predecessor[slot] {
            None => break,
            Some(position) => {
                if taken[position] || selected.len() == instance.len() {
                    return Err(SolveError::BrokenReconstruction { slot });
                }
                let item = instance.item(position);
                taken[position] = true;
                selected.push(position);
                total_weight += item.weight;
                slot -= item.weight;
            }
        }
    }

    Ok(Solution {
        selected,
        total_weight,
        total_value: value[capacity],
    })
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_dynprog {
    use crate::{DynProg, Exhaustive, Instance, SolveError, Solver};

    #[test]
    fn it_finds_the_optimum_of_the_reference_instance() {
        let instance = Instance::from_pairs(&[(2, 3.0), (3, 4.0), (4, 5.0), (5, 6.0)]);
        let solution = DynProg.solve(&instance, 5).unwrap();
        assert_eq!(7.0, solution.total_value);
        assert_eq!(5, solution.total_weight);
        let mut selected = solution.selected.clone();
        selected.sort_unstable();
        assert_eq!(vec![0, 1], selected);
    }
    #[test]
    fn an_empty_instance_yields_the_empty_solution() {
        let instance = Instance::default();
        let solution = DynProg.solve(&instance, 100).unwrap();
        assert_eq!(0.0, solution.total_value);
        assert_eq!(0, solution.total_weight);
        assert!(solution.selected.is_empty());
    }
    #[test]
    fn a_zero_capacity_yields_the_empty_solution() {
        let instance = Instance::from_pairs(&[(2, 3.0), (3, 4.0)]);
        let solution = DynProg.solve(&instance, 0).unwrap();
        assert_eq!(0.0, solution.total_value);
        assert!(solution.selected.is_empty());
    }
    #[test]
    fn an_item_exceeding_the_capacity_is_never_packed() {
        let instance = Instance::from_pairs(&[(10, 100.0)]);
        let solution = DynProg.solve(&instance, 5).unwrap();
        assert_eq!(0.0, solution.total_value);
        assert!(solution.selected.is_empty());
    }
    #[test]
    fn ties_prefer_the_earliest_item_in_catalog_order() {
        let instance = Instance::from_pairs(&[(1, 5.0), (1, 5.0)]);
        let solution = DynProg.solve(&instance, 1).unwrap();
        assert_eq!(vec![0], solution.selected);
    }
    #[test]
    fn a_zero_weight_item_is_a_structured_error() {
        let instance = Instance::from_pairs(&[(2, 3.0), (0, 4.0)]);
        let outcome = DynProg.solve(&instance, 5);
        assert_eq!(Err(SolveError::ZeroWeightItem { index: 2 }), outcome);
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
            let dp = DynProg.solve(&instance, capacity).unwrap();
            let enu = Exhaustive.solve(&instance, capacity).unwrap();
            assert_eq!(enu.total_value, dp.total_value, "capacity {capacity}");
        }
    }
    #[test]
    fn reconstructed_totals_match_the_selected_items() {
        let instance = Instance::from_pairs(&[
            (12, 24.5),
            (7, 13.25),
            (11, 23.75),
            (8, 15.5),
            (9, 16.0),
        ]);
        let solution = DynProg.solve(&instance, 26).unwrap();
        let weight: usize = solution
            .selected
            .iter()
            .map(|&pos| instance.item(pos).weight)
            .sum();
        let value: f64 = solution
            .selected
            .iter()
            .map(|&pos| instance.item(pos).value)
            .sum();
        assert_eq!(solution.total_weight, weight);
        assert!((solution.total_value - value).abs() < 1e-9);
        assert!(solution.total_weight <= 26);
    }
}
