//! Per-(resource, day) view of the allocation set.
//!
//! Rebuilt from scratch whenever allocations change; collections are bounded
//! by headcount x visible window so a full rebuild is cheap.

use crate::models::allocation::Allocation;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapacityCell {
    /// Allocations starting in this cell, in store order.
    pub allocations: Vec<Allocation>,
    pub hours_used: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapacityIndex {
    cells: BTreeMap<(String, u32), CapacityCell>,
}

impl CapacityIndex {
    pub fn build(allocations: &[Allocation]) -> Self {
        let mut cells: BTreeMap<(String, u32), CapacityCell> = BTreeMap::new();

        for a in allocations {
            let cell = cells.entry((a.resource_id.clone(), a.day)).or_default();
            cell.hours_used += a.hours;
            cell.allocations.push(a.clone());
        }

        Self { cells }
    }

    pub fn cell(&self, resource_id: &str, day: u32) -> Option<&CapacityCell> {
        self.cells.get(&(resource_id.to_string(), day))
    }

    /// Hours charged to the cell; zero for an empty cell.
    pub fn hours_used(&self, resource_id: &str, day: u32) -> f64 {
        self.cell(resource_id, day)
            .map(|c| c.hours_used)
            .unwrap_or(0.0)
    }

    pub fn free_hours(&self, resource_id: &str, day: u32, capacity: f64) -> f64 {
        capacity - self.hours_used(resource_id, day)
    }

    /// Cells whose consumption exceeds `capacity`, ordered by (resource, day).
    ///
    /// Manual moves and resizes may overbook; this is how the UI surfaces it.
    pub fn overbooked(&self, capacity: f64) -> Vec<(&str, u32, f64)> {
        self.cells
            .iter()
            .filter(|(_, c)| c.hours_used > capacity)
            .map(|((r, d), c)| (r.as_str(), *d, c.hours_used))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
