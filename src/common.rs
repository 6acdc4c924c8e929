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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

use serde::Serialize;

// ----------------------------------------------------------------------------
// --- ITEM -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type denotes one item from the knapsack instance at hand. An item has
/// a non negative integer weight, a non negative real value, and a stable
/// 1-based identifier which is assigned when the instance is created and never
/// changes afterwards (in particular, it survives the reordering performed by
/// the greedy solver).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Item {
    /// How much of the sack capacity is consumed when this item is taken
    pub weight: usize,
    /// The profit collected when this item is taken
    pub value: f64,
    /// The 1-based identifier of the item in the original data
    pub index: usize,
}

// ----------------------------------------------------------------------------
// --- INSTANCE ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// An instance is an immutable ordered collection of items. The order of the
/// items is irrelevant for the mathematical optimum, but it does matter for
/// the tie break behavior of the dynamic programming solver and for the
/// traversal order of the backtracking solver.
#[derive(Debug, Clone, Default)]
pub struct Instance {
    items: Vec<Item>,
}
impl Instance {
    /// Creates an instance from a ready made list of items.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
    /// Creates an instance from `(weight, value)` pairs, assigning each item
    /// its 1-based position as identifier.
    ///
    /// # Example
    /// ```
    /// # use knapbench::Instance;
    /// let instance = Instance::from_pairs(&[(2, 3.0), (3, 4.0)]);
    /// assert_eq!(2, instance.len());
    /// assert_eq!(1, instance.item(0).index);
    /// assert_eq!(2, instance.item(1).index);
    /// ```
    pub fn from_pairs(pairs: &[(usize, f64)]) -> Self {
        let items = pairs
            .iter()
            .enumerate()
            .map(|(position, &(weight, value))| Item {
                weight,
                value,
                index: position + 1,
            })
            .collect();
        Self { items }
    }
    /// The number of items in this instance.
    pub fn len(&self) -> usize {
        self.items.len()
    }
    /// True iff the instance comprises no item at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    /// The items of this instance, in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
    /// The item sitting at the given 0-based catalog position.
    pub fn item(&self, position: usize) -> &Item {
        &self.items[position]
    }
}
impl From<Vec<Item>> for Instance {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

// ----------------------------------------------------------------------------
// --- SOLUTION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of one solver invocation: the set of catalog positions that
/// were packed into the sack along with the accumulated weight and value of
/// that set.
///
/// Every solver of this crate upholds the same invariants on the solutions it
/// returns: `total_weight` never exceeds the capacity it was given,
/// `selected` contains no duplicate position, and the two totals are the
/// exact sums of the weights (resp. values) of the items at the selected
/// positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// The 0-based catalog positions of the items that were packed
    pub selected: Vec<usize>,
    /// The total weight of the packed items
    pub total_weight: usize,
    /// The total value of the packed items
    pub total_value: f64,
}
impl Solution {
    /// The trivial solution which packs nothing. This is the solution every
    /// solver returns for an empty instance, a zero capacity, or when no
    /// single item fits.
    pub fn empty() -> Self {
        Self {
            selected: vec![],
            total_weight: 0,
            total_value: 0.0,
        }
    }
    /// The number of items that were packed.
    pub fn nb_selected(&self) -> usize {
        self.selected.len()
    }
}
impl Default for Solution {
    fn default() -> Self {
        Self::empty()
    }
}

// ----------------------------------------------------------------------------
// --- ERRORS -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The conditions under which a solver refuses to produce a solution. Apart
/// from these, every input (empty instance, zero capacity, capacity larger
/// than the total weight, ..) is valid and yields a well defined -- possibly
/// trivial -- solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// The exhaustive solver enumerates subsets as bit masks and hence cannot
    /// cope with more items than there are bits in a mask. (In practice the
    /// exponential solvers are computationally infeasible way before that
    /// bound is hit.)
    #[error("{nb_items} items cannot be enumerated as subset masks (limit is {limit})")]
    TooManyItems { nb_items: usize, limit: usize },
    /// The dynamic programming solver excludes zero weight items by
    /// precondition: such an item would stall the predecessor walk used to
    /// reconstruct the selection.
    #[error("item {index} has zero weight, which the dp reconstruction cannot handle")]
    ZeroWeightItem { index: usize },
    /// The predecessor chain built by the dynamic programming solver did not
    /// terminate cleanly. This cannot occur when the value table is built
    /// correctly, but it is guarded and reported rather than silently
    /// producing a wrong selection.
    #[error("the predecessor chain does not terminate cleanly at weight slot {slot}")]
    BrokenReconstruction { slot: usize },
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_instance {
    use crate::{Instance, Item};

    #[test]
    fn from_pairs_assigns_one_based_identifiers() {
        let instance = Instance::from_pairs(&[(2, 3.0), (3, 4.0), (4, 5.0)]);
        assert_eq!(3, instance.len());
        for (position, item) in instance.items().iter().enumerate() {
            assert_eq!(position + 1, item.index);
        }
    }
    #[test]
    fn an_empty_instance_has_no_item() {
        let instance = Instance::default();
        assert!(instance.is_empty());
        assert_eq!(0, instance.len());
    }
    #[test]
    fn an_instance_can_be_built_from_a_list_of_items() {
        let instance: Instance = vec![Item { weight: 4, value: 8.5, index: 7 }].into();
        assert_eq!(1, instance.len());
        assert_eq!(7, instance.item(0).index);
    }
}
