use super::{demand_type::DemandType, phase::ProjectPhase};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub type LogId = i64;

/// Audited record of hours worked by a collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLog {
    pub id: LogId,
    pub collaborator_id: String,
    pub collaborator_name: String,
    pub date: NaiveDate,
    pub demand_type: DemandType,
    pub project_id: String,
    pub project_name: String,
    pub phase: ProjectPhase,
    pub activity_type: String,
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TimeLog {
    /// True when this log carries the (collaborator, date, project, activity) tuple.
    pub fn has_identity(
        &self,
        collaborator_id: &str,
        date: NaiveDate,
        project_id: &str,
        activity_type: &str,
    ) -> bool {
        self.collaborator_id == collaborator_id
            && self.date == date
            && self.project_id == project_id
            && self.activity_type == activity_type
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Fields supplied by the caller of `create_log`; id and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTimeLog {
    pub collaborator_id: String,
    pub collaborator_name: String,
    pub date: NaiveDate,
    pub demand_type: DemandType,
    pub project_id: String,
    pub project_name: String,
    pub phase: ProjectPhase,
    pub activity_type: String,
    pub hours: f64,
    pub observation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeLogPatch {
    pub date: Option<NaiveDate>,
    pub demand_type: Option<DemandType>,
    pub project_id: Option<String>,
    pub project_name: Option<String>,
    pub phase: Option<ProjectPhase>,
    pub activity_type: Option<String>,
    pub hours: Option<f64>,
    pub observation: Option<String>,
}

impl TimeLog {
    pub fn apply(&mut self, patch: &TimeLogPatch, now: NaiveDateTime) {
        if let Some(d) = patch.date {
            self.date = d;
        }
        if let Some(t) = patch.demand_type {
            self.demand_type = t;
        }
        if let Some(p) = &patch.project_id {
            self.project_id = p.clone();
        }
        if let Some(p) = &patch.project_name {
            self.project_name = p.clone();
        }
        if let Some(p) = patch.phase {
            self.phase = p;
        }
        if let Some(a) = &patch.activity_type {
            self.activity_type = a.clone();
        }
        if let Some(h) = patch.hours {
            self.hours = h;
        }
        if let Some(o) = &patch.observation {
            self.observation = Some(o.clone());
        }
        self.updated_at = now;
    }
}
