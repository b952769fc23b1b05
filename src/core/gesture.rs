//! Pointer-driven editing of placed allocations.
//!
//! A single-slot state machine: at most one gesture is live at a time. Drag
//! moves an allocation to another (resource, day) cell on drop. Resize tracks
//! pointer movement anywhere on the grid and rewrites span and hours on every
//! sample until release.
//!
//! Neither gesture checks capacity. Overbooking is reported by the capacity
//! index, not blocked here.

use super::HOURS_PER_DAY;
use crate::models::allocation::{AllocationId, AllocationPatch};
use crate::store::AllocationStore;

/// Pixel geometry of the day columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub container_width: f64,
    pub visible_days: u32,
}

impl GridGeometry {
    pub fn new(container_width: f64, visible_days: u32) -> Self {
        Self {
            container_width,
            visible_days: visible_days.max(1),
        }
    }

    pub fn column_width(&self) -> f64 {
        self.container_width / self.visible_days as f64
    }

    fn last_day(&self) -> i64 {
        self.visible_days as i64 - 1
    }

    /// Raw column under `x`, unclamped (may be negative or past the window).
    fn raw_column(&self, x: f64) -> i64 {
        let col = (x / self.column_width()).floor();
        if col.is_nan() { 0 } else { col as i64 }
    }

    /// Column under a pointer offset, clamped to the visible window.
    pub fn day_at(&self, x: f64) -> u32 {
        self.raw_column(x).clamp(0, self.last_day()) as u32
    }

    /// Horizontal centre of a day column.
    pub fn x_for_day(&self, day: u32) -> f64 {
        (day as f64 + 0.5) * self.column_width()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Dragging(AllocationId),
    Resizing(AllocationId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum GestureEvent {
    /// Pointer pressed and dragged on an allocation body.
    DragStart(AllocationId),
    /// Dragged allocation released over a resource row at offset `x`.
    Drop { resource_id: String, x: f64 },
    /// Pointer pressed on an allocation's trailing-edge handle.
    ResizeStart(AllocationId),
    /// Global pointer movement, `x` relative to the day area.
    PointerMove { x: f64 },
    /// Pointer released anywhere.
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Event had no effect in the current state.
    Ignored,
    Started(EditState),
    /// Allocation moved to a new cell; drag finished.
    Moved { id: AllocationId, day: u32 },
    /// Resize sample written.
    Resized {
        id: AllocationId,
        span_days: u32,
        hours: f64,
    },
    /// Target allocation no longer exists; the write was dropped.
    Stale(AllocationId),
    Ended,
}

#[derive(Debug, Default)]
pub struct EditSession {
    state: EditState,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn handle(
        &mut self,
        event: GestureEvent,
        store: &mut AllocationStore,
        grid: &GridGeometry,
    ) -> GestureOutcome {
        match (self.state, event) {
            (EditState::Idle, GestureEvent::DragStart(id)) => {
                self.state = EditState::Dragging(id);
                GestureOutcome::Started(self.state)
            }
            (EditState::Idle, GestureEvent::ResizeStart(id)) => {
                self.state = EditState::Resizing(id);
                GestureOutcome::Started(self.state)
            }
            // single slot: a second start is dropped until release
            (_, GestureEvent::DragStart(_) | GestureEvent::ResizeStart(_)) => {
                GestureOutcome::Ignored
            }

            (EditState::Dragging(id), GestureEvent::Drop { resource_id, x }) => {
                self.state = EditState::Idle;
                let day = grid.day_at(x);
                if store.update_allocation(id, &AllocationPatch::placement(&resource_id, day)) {
                    GestureOutcome::Moved { id, day }
                } else {
                    GestureOutcome::Stale(id)
                }
            }

            (EditState::Resizing(id), GestureEvent::PointerMove { x }) => {
                resize_sample(id, x, store, grid)
            }

            (EditState::Dragging(_) | EditState::Resizing(_), GestureEvent::Release) => {
                self.state = EditState::Idle;
                GestureOutcome::Ended
            }

            _ => GestureOutcome::Ignored,
        }
    }
}

/// Target span for a resize sample: the column under the pointer, clamped to
/// `[start_day, visible_days - 1]`, measured inclusively from `start_day`.
pub fn resize_span(start_day: u32, x: f64, grid: &GridGeometry) -> u32 {
    let target = grid
        .raw_column(x)
        .min(grid.last_day())
        .max(start_day as i64);
    (target - start_day as i64 + 1).max(1) as u32
}

fn resize_sample(
    id: AllocationId,
    x: f64,
    store: &mut AllocationStore,
    grid: &GridGeometry,
) -> GestureOutcome {
    let Some(start_day) = store.allocation(id).map(|a| a.day) else {
        return GestureOutcome::Stale(id);
    };

    // hours are re-derived from the span; any partial value is discarded
    let span_days = resize_span(start_day, x, grid);
    let hours = span_days as f64 * HOURS_PER_DAY;

    store.update_allocation(id, &AllocationPatch::span(span_days, hours));
    GestureOutcome::Resized {
        id,
        span_days,
        hours,
    }
}
