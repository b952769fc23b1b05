//! Planner session: the allocation store bound to a storage backend.
//!
//! The session loads every collection once at startup and, after each
//! operation, saves the collections the store marked dirty and appends one
//! audit entry. Gesture events go through the session too, so each pointer
//! sample is persisted like any other write.

use crate::config::Config;
use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::core::demand::{PlacedDemand, create_demand};
use crate::core::gesture::{EditSession, EditState, GestureEvent, GestureOutcome, GridGeometry};
use crate::core::reconcile::{SyncReport, sync_allocations_to_logs};
use crate::core::seed::seed_demo;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::allocation::{Allocation, AllocationId, AllocationPatch};
use crate::models::project::Project;
use crate::models::resource::Resource;
use crate::models::time_log::{LogId, NewTimeLog, TimeLog, TimeLogPatch};
use crate::store::persistence::{Persistence, SqliteBackend};
use crate::store::{AllocationStore, Collection, snapshot};
use crate::ui::messages::warning;

pub struct Planner<P: Persistence> {
    store: AllocationStore,
    backend: P,
    roster: Vec<Resource>,
    grid: GridGeometry,
    edit: EditSession,
}

impl Planner<SqliteBackend> {
    /// Open the planner configured by `cfg` (database, roster, grid, clock).
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let pool = DbPool::open(&cfg.database)?;
        let clock: Box<dyn Clock> = match cfg.today {
            Some(d) => Box::new(FixedClock::on(d)),
            None => Box::new(SystemClock),
        };

        Self::load(
            SqliteBackend::new(pool),
            clock,
            cfg.resources.clone(),
            GridGeometry::new(cfg.grid_width, cfg.visible_days),
        )
    }
}

impl<P: Persistence> Planner<P> {
    pub fn load(
        mut backend: P,
        clock: Box<dyn Clock>,
        roster: Vec<Resource>,
        grid: GridGeometry,
    ) -> AppResult<Self> {
        let allocations: Vec<Allocation> = load_collection(&mut backend, Collection::Allocations)?;
        let logs: Vec<TimeLog> = load_collection(&mut backend, Collection::Logs)?;
        let projects: Vec<Project> = load_collection(&mut backend, Collection::Projects)?;

        Ok(Self {
            store: AllocationStore::from_parts(allocations, logs, projects, clock),
            backend,
            roster,
            grid,
            edit: EditSession::new(),
        })
    }

    // ------------------------------------------------
    // Read access
    // ------------------------------------------------

    pub fn store(&self) -> &AllocationStore {
        &self.store
    }

    pub fn backend(&self) -> &P {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut P {
        &mut self.backend
    }

    pub fn resources(&self) -> &[Resource] {
        &self.roster
    }

    pub fn grid(&self) -> &GridGeometry {
        &self.grid
    }

    pub fn visible_days(&self) -> u32 {
        self.grid.visible_days
    }

    pub fn edit_state(&self) -> EditState {
        self.edit.state()
    }

    pub fn resource(&self, id: &str) -> AppResult<&Resource> {
        self.roster
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::UnknownResource(id.to_string()))
    }

    // ------------------------------------------------
    // Allocations
    // ------------------------------------------------

    pub fn create_allocation(
        &mut self,
        project: &str,
        resource_id: &str,
        day: u32,
        hours: f64,
        span_days: Option<u32>,
    ) -> AppResult<AllocationId> {
        self.resource(resource_id)?;
        if day >= self.grid.visible_days {
            return Err(AppError::DayOutOfRange {
                day,
                visible_days: self.grid.visible_days,
            });
        }
        let id = self
            .store
            .create_allocation(project, resource_id, day, hours, span_days);
        self.commit(
            "alloc_add",
            &id.to_string(),
            &format!("{} → {} day {} ({}h)", project, resource_id, day, hours),
        )?;
        Ok(id)
    }

    pub fn update_allocation(&mut self, id: AllocationId, patch: &AllocationPatch) -> AppResult<bool> {
        let found = self.store.update_allocation(id, patch);
        self.commit("alloc_edit", &id.to_string(), &format!("{:?}", patch))?;
        Ok(found)
    }

    pub fn delete_allocation(&mut self, id: AllocationId) -> AppResult<bool> {
        let found = self.store.delete_allocation(id);
        self.commit("alloc_del", &id.to_string(), "Allocation deleted")?;
        Ok(found)
    }

    /// Auto-place new demand; see [`create_demand`].
    pub fn create_demand(&mut self, project: &str, hours: f64) -> AppResult<PlacedDemand> {
        let placed = create_demand(
            &mut self.store,
            &self.roster,
            self.grid.visible_days,
            project,
            hours,
        )?;
        self.commit(
            "demand",
            &placed.id.to_string(),
            &format!(
                "{} ({}h) placed on {} day {}",
                project, hours, placed.slot.resource_id, placed.slot.day
            ),
        )?;
        Ok(placed)
    }

    pub fn seed_demo(&mut self) -> AppResult<usize> {
        let created = seed_demo(&mut self.store, &self.roster, self.grid.visible_days);
        self.commit("seed", "", &format!("{} demo allocation(s)", created))?;
        Ok(created)
    }

    /// Feed one pointer event to the edit protocol.
    pub fn gesture(&mut self, event: GestureEvent) -> AppResult<GestureOutcome> {
        let outcome = self.edit.handle(event, &mut self.store, &self.grid);

        match outcome {
            GestureOutcome::Moved { id, day } => {
                self.commit("alloc_move", &id.to_string(), &format!("moved to day {}", day))?
            }
            GestureOutcome::Resized {
                id,
                span_days,
                hours,
            } => self.commit(
                "alloc_resize",
                &id.to_string(),
                &format!("span {} day(s), {}h", span_days, hours),
            )?,
            _ => {}
        }
        Ok(outcome)
    }

    // ------------------------------------------------
    // Time logs
    // ------------------------------------------------

    pub fn create_log(&mut self, fields: NewTimeLog) -> AppResult<LogId> {
        let summary = format!(
            "{} {} {} {}h",
            fields.collaborator_id, fields.date, fields.project_id, fields.hours
        );
        let id = self.store.create_log(fields)?;
        self.commit("log_add", &id.to_string(), &summary)?;
        Ok(id)
    }

    pub fn update_log(&mut self, id: LogId, patch: &TimeLogPatch) -> AppResult<bool> {
        let found = self.store.update_log(id, patch);
        self.commit("log_edit", &id.to_string(), &format!("{:?}", patch))?;
        Ok(found)
    }

    pub fn delete_log(&mut self, id: LogId) -> AppResult<bool> {
        let found = self.store.delete_log(id);
        self.commit("log_del", &id.to_string(), "Time log deleted")?;
        Ok(found)
    }

    /// Project the allocation set into the ledger; see [`sync_allocations_to_logs`].
    pub fn sync_allocations_to_logs(&mut self) -> AppResult<SyncReport> {
        let report = sync_allocations_to_logs(&mut self.store, &self.roster);
        let reference = self.store.today().to_string();
        self.commit(
            "sync",
            &reference,
            &format!(
                "{} created, {} already projected, {} rejected",
                report.created,
                report.already_projected,
                report.rejected.len() + report.unprojectable.len()
            ),
        )?;
        Ok(report)
    }

    // ------------------------------------------------
    // Projects
    // ------------------------------------------------

    pub fn add_project(&mut self, name: &str, code: Option<&str>) -> AppResult<String> {
        let id = self.store.add_project(name, code);
        self.commit("project_add", &id, name)?;
        Ok(id)
    }

    pub fn close_project(&mut self, id: &str) -> AppResult<bool> {
        let found = self.store.close_project(id);
        self.commit("project_close", id, "Project closed")?;
        Ok(found)
    }

    // ------------------------------------------------
    // Persistence
    // ------------------------------------------------

    /// Save dirty collections, then audit. Nothing is written for a no-op.
    fn commit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        let dirty = self.store.take_dirty();
        if !dirty.any() {
            return Ok(());
        }

        let pending = dirty.collections();
        for (i, c) in pending.iter().enumerate() {
            if let Err(e) = self.save_collection(*c) {
                // unsaved collections stay dirty so the next commit retries them
                for rest in &pending[i..] {
                    self.store.mark_dirty(*rest);
                }
                return Err(e);
            }
        }

        // audit is best effort
        if let Err(e) = self.backend.audit(operation, target, message) {
            warning(format!("Failed to write audit log: {}", e));
        }
        Ok(())
    }

    fn save_collection(&mut self, c: Collection) -> AppResult<()> {
        let payload = match c {
            Collection::Allocations => snapshot::encode(c.name(), self.store.allocations())?,
            Collection::Logs => snapshot::encode(c.name(), self.store.logs())?,
            Collection::Projects => snapshot::encode(c.name(), self.store.projects())?,
        };
        self.backend.save(c.name(), &payload)
    }
}

fn load_collection<P: Persistence, T: serde::de::DeserializeOwned>(
    backend: &mut P,
    collection: Collection,
) -> AppResult<Vec<T>> {
    match backend.load(collection.name())? {
        Some(payload) => snapshot::decode(collection.name(), &payload),
        None => Ok(Vec::new()),
    }
}
