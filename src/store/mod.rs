//! Allocation store: the single owner of allocations, time logs and projects.
//!
//! Every write goes through the methods below. Collections are private so the
//! capacity index and the persistence layer never observe a half-applied
//! update. Writes mark the touched collection dirty; the planner flushes dirty
//! collections after each operation.

pub mod persistence;
pub mod snapshot;

use crate::core::MAX_DAILY_HOURS;
use crate::core::capacity::CapacityIndex;
use crate::core::clock::Clock;
use crate::errors::ValidationError;
use crate::models::allocation::{Allocation, AllocationId, AllocationPatch};
use crate::models::project::{Project, ProjectStatus};
use crate::models::time_log::{LogId, NewTimeLog, TimeLog, TimeLogPatch};
use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Allocations,
    Logs,
    Projects,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Allocations,
        Collection::Logs,
        Collection::Projects,
    ];

    /// Blob name under which the collection is persisted.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Allocations => "allocations",
            Collection::Logs => "logs",
            Collection::Projects => "projects",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dirty {
    pub allocations: bool,
    pub logs: bool,
    pub projects: bool,
}

impl Dirty {
    pub fn collections(&self) -> Vec<Collection> {
        Collection::ALL
            .into_iter()
            .filter(|c| match c {
                Collection::Allocations => self.allocations,
                Collection::Logs => self.logs,
                Collection::Projects => self.projects,
            })
            .collect()
    }

    pub fn any(&self) -> bool {
        self.allocations || self.logs || self.projects
    }
}

pub struct AllocationStore {
    allocations: Vec<Allocation>,
    logs: Vec<TimeLog>,
    projects: Vec<Project>,
    next_allocation_id: AllocationId,
    next_log_id: LogId,
    next_project_seq: u32,
    index: CapacityIndex,
    clock: Box<dyn Clock>,
    dirty: Dirty,
}

impl AllocationStore {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self::from_parts(Vec::new(), Vec::new(), Vec::new(), clock)
    }

    /// Rebuild a store from previously persisted collections.
    pub fn from_parts(
        allocations: Vec<Allocation>,
        logs: Vec<TimeLog>,
        projects: Vec<Project>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let next_allocation_id = allocations.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let next_log_id = logs.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        let next_project_seq = projects
            .iter()
            .filter_map(|p| p.id.strip_prefix("p-")?.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let index = CapacityIndex::build(&allocations);

        Self {
            allocations,
            logs,
            projects,
            next_allocation_id,
            next_log_id,
            next_project_seq,
            index,
            clock,
            dirty: Dirty::default(),
        }
    }

    // ------------------------------------------------
    // Read access
    // ------------------------------------------------

    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    pub fn allocation(&self, id: AllocationId) -> Option<&Allocation> {
        self.allocations.iter().find(|a| a.id == id)
    }

    pub fn logs(&self) -> &[TimeLog] {
        &self.logs
    }

    pub fn log(&self, id: LogId) -> Option<&TimeLog> {
        self.logs.iter().find(|l| l.id == id)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn capacity(&self) -> &CapacityIndex {
        &self.index
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Sum of logged hours for a collaborator on a date.
    pub fn daily_total(&self, collaborator_id: &str, date: NaiveDate) -> f64 {
        self.logs
            .iter()
            .filter(|l| l.collaborator_id == collaborator_id && l.date == date)
            .map(|l| l.hours)
            .sum()
    }

    pub fn find_log(
        &self,
        collaborator_id: &str,
        date: NaiveDate,
        project_id: &str,
        activity_type: &str,
    ) -> Option<&TimeLog> {
        self.logs
            .iter()
            .find(|l| l.has_identity(collaborator_id, date, project_id, activity_type))
    }

    /// Flag a collection for the next flush again (after a failed save).
    pub fn mark_dirty(&mut self, collection: Collection) {
        match collection {
            Collection::Allocations => self.dirty.allocations = true,
            Collection::Logs => self.dirty.logs = true,
            Collection::Projects => self.dirty.projects = true,
        }
    }

    /// Return and reset the set of collections written since the last call.
    pub fn take_dirty(&mut self) -> Dirty {
        std::mem::take(&mut self.dirty)
    }

    // ------------------------------------------------
    // Allocations
    // ------------------------------------------------

    /// Insert a new allocation at the head of the collection. Never fails.
    pub fn create_allocation(
        &mut self,
        project: &str,
        resource_id: &str,
        day: u32,
        hours: f64,
        span_days: Option<u32>,
    ) -> AllocationId {
        let id = self.next_allocation_id;
        self.next_allocation_id += 1;

        self.allocations.insert(
            0,
            Allocation {
                id,
                project: project.to_string(),
                resource_id: resource_id.to_string(),
                day,
                hours: hours.max(0.0),
                span_days: span_days.unwrap_or(1).max(1),
            },
        );
        self.allocations_changed();
        id
    }

    /// Merge `patch` into an allocation. Returns false (and does nothing) when
    /// the id is gone, which happens when a gesture outlives its target.
    pub fn update_allocation(&mut self, id: AllocationId, patch: &AllocationPatch) -> bool {
        let Some(a) = self.allocations.iter_mut().find(|a| a.id == id) else {
            return false;
        };
        a.apply(patch);
        self.allocations_changed();
        true
    }

    pub fn delete_allocation(&mut self, id: AllocationId) -> bool {
        let before = self.allocations.len();
        self.allocations.retain(|a| a.id != id);
        if self.allocations.len() == before {
            return false;
        }
        self.allocations_changed();
        true
    }

    fn allocations_changed(&mut self) {
        self.index = CapacityIndex::build(&self.allocations);
        self.dirty.allocations = true;
    }

    // ------------------------------------------------
    // Time logs
    // ------------------------------------------------

    /// Validate and insert a time log.
    ///
    /// The daily cap is checked before duplicates. A rejected write leaves
    /// the ledger untouched.
    pub fn create_log(&mut self, fields: NewTimeLog) -> Result<LogId, ValidationError> {
        let existing = self.daily_total(&fields.collaborator_id, fields.date);
        if existing + fields.hours > MAX_DAILY_HOURS {
            return Err(ValidationError::DailyCapExceeded);
        }

        if self
            .find_log(
                &fields.collaborator_id,
                fields.date,
                &fields.project_id,
                &fields.activity_type,
            )
            .is_some()
        {
            return Err(ValidationError::DuplicateEntry);
        }

        let id = self.next_log_id;
        self.next_log_id += 1;
        let now = self.clock.now();

        self.logs.insert(
            0,
            TimeLog {
                id,
                collaborator_id: fields.collaborator_id,
                collaborator_name: fields.collaborator_name,
                date: fields.date,
                demand_type: fields.demand_type,
                project_id: fields.project_id,
                project_name: fields.project_name,
                phase: fields.phase,
                activity_type: fields.activity_type,
                hours: fields.hours,
                observation: fields.observation,
                created_at: now,
                updated_at: now,
            },
        );
        self.dirty.logs = true;
        Ok(id)
    }

    /// Apply an in-place edit. Not re-validated against the daily cap or
    /// duplicate rules.
    pub fn update_log(&mut self, id: LogId, patch: &TimeLogPatch) -> bool {
        let now = self.clock.now();
        let Some(l) = self.logs.iter_mut().find(|l| l.id == id) else {
            return false;
        };
        l.apply(patch, now);
        self.dirty.logs = true;
        true
    }

    pub fn delete_log(&mut self, id: LogId) -> bool {
        let before = self.logs.len();
        self.logs.retain(|l| l.id != id);
        if self.logs.len() == before {
            return false;
        }
        self.dirty.logs = true;
        true
    }

    // ------------------------------------------------
    // Projects
    // ------------------------------------------------

    pub fn add_project(&mut self, name: &str, code: Option<&str>) -> String {
        let id = format!("p-{}", self.next_project_seq);
        self.next_project_seq += 1;

        self.projects.push(Project {
            id: id.clone(),
            name: name.to_string(),
            code: code.map(str::to_string),
            status: ProjectStatus::Active,
        });
        self.dirty.projects = true;
        id
    }

    pub fn close_project(&mut self, id: &str) -> bool {
        let Some(p) = self.projects.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        p.status = ProjectStatus::Closed;
        self.dirty.projects = true;
        true
    }
}
