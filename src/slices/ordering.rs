// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Dependency resolution: topological ordering of the slice graph.
//!
//! Kahn's algorithm with a FIFO queue. The queue is seeded and refilled in
//! declaration order, so ties resolve deterministically and re-running on an
//! unchanged slice list yields an identical sequence.
//!
//! Every declared dependency counts toward a slice's in-degree, including
//! dependencies whose id is absent from the list. An absent dependency can
//! never be satisfied, so the owning slice stays unplaced and surfaces in the
//! resulting [`CycleError`] alongside any cycle participants. Nothing is ever
//! silently dropped.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::errors::CycleError;
use crate::observability::messages::slices::{SliceOrderingStalled, SlicesOrdered};
use crate::observability::messages::StructuredLog;
use crate::slices::slice::Slice;

/// Order `slices` so every slice follows its dependencies and assign 1-based
/// `order_index` values. Fails if the graph contains a cycle or a dependency
/// on an id not present in the list.
pub fn order_slices(slices: Vec<Slice>) -> Result<Vec<Slice>, CycleError> {
    let index_of: HashMap<&str, usize> = slices
        .iter()
        .enumerate()
        .map(|(index, slice)| (slice.id.as_str(), index))
        .collect();

    let mut in_degree: Vec<usize> = slices
        .iter()
        .map(|slice| slice.dependencies.len())
        .collect();
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); slices.len()];
    for (index, slice) in slices.iter().enumerate() {
        for dependency in &slice.dependencies {
            if let Some(&dep_index) = index_of.get(dependency.as_str()) {
                dependents[dep_index].push(index);
            }
        }
    }

    let mut queue: VecDeque<usize> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, &degree)| degree == 0)
        .map(|(index, _)| index)
        .collect();
    let mut placement: Vec<usize> = Vec::with_capacity(slices.len());

    while let Some(current) = queue.pop_front() {
        placement.push(current);
        for &dependent in &dependents[current] {
            in_degree[dependent] -= 1;
            if in_degree[dependent] == 0 {
                queue.push_back(dependent);
            }
        }
    }

    if placement.len() != slices.len() {
        let placed: HashSet<usize> = placement.into_iter().collect();
        let remaining: Vec<String> = slices
            .iter()
            .enumerate()
            .filter(|(index, _)| !placed.contains(index))
            .map(|(_, slice)| slice.id.clone())
            .collect();
        SliceOrderingStalled {
            remaining: &remaining,
        }
        .log();
        return Err(CycleError { remaining });
    }

    let mut pool: Vec<Option<Slice>> = slices.into_iter().map(Some).collect();
    let mut ordered = Vec::with_capacity(pool.len());
    for (position, index) in placement.into_iter().enumerate() {
        if let Some(mut slice) = pool[index].take() {
            slice.order_index = position + 1;
            ordered.push(slice);
        }
    }

    SlicesOrdered {
        slice_count: ordered.len(),
    }
    .log();

    Ok(ordered)
}
