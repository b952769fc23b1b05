use serde::{Deserialize, Serialize};

pub type AllocationId = i64;

fn default_span() -> u32 {
    1
}

/// A planned assignment of project work to a resource on the grid.
///
/// `day` is an offset from the first visible day. `hours` is the total for the
/// whole span, and capacity accounting charges all of it to the start cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub id: AllocationId,
    pub project: String,
    pub resource_id: String,
    pub day: u32,
    pub hours: f64,
    #[serde(default = "default_span")]
    pub span_days: u32,
}

impl Allocation {
    /// Last grid day covered by the span (inclusive).
    pub fn last_day(&self) -> u32 {
        self.day.saturating_add(self.span_days.max(1) - 1)
    }

    pub fn apply(&mut self, patch: &AllocationPatch) {
        if let Some(p) = &patch.project {
            self.project = p.clone();
        }
        if let Some(r) = &patch.resource_id {
            self.resource_id = r.clone();
        }
        if let Some(d) = patch.day {
            self.day = d;
        }
        if let Some(h) = patch.hours {
            self.hours = h;
        }
        if let Some(s) = patch.span_days {
            self.span_days = s.max(1);
        }
    }
}

/// Partial update merged into an existing allocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllocationPatch {
    pub project: Option<String>,
    pub resource_id: Option<String>,
    pub day: Option<u32>,
    pub hours: Option<f64>,
    pub span_days: Option<u32>,
}

impl AllocationPatch {
    /// Reassign to another cell (drag & drop).
    pub fn placement(resource_id: &str, day: u32) -> Self {
        Self {
            resource_id: Some(resource_id.to_string()),
            day: Some(day),
            ..Default::default()
        }
    }

    /// Change the span together with the re-derived total hours (resize).
    pub fn span(span_days: u32, hours: f64) -> Self {
        Self {
            span_days: Some(span_days),
            hours: Some(hours),
            ..Default::default()
        }
    }
}
