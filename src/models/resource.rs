use serde::{Deserialize, Serialize};

/// A person who can receive allocations on the planning grid.
///
/// The roster is supplied from outside (configuration) and its order drives
/// placement: callers must keep it stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
}

impl Resource {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Look up a resource display name, falling back to the raw id.
pub fn display_name<'a>(roster: &'a [Resource], id: &'a str) -> &'a str {
    roster
        .iter()
        .find(|r| r.id == id)
        .map(|r| r.name.as_str())
        .unwrap_or(id)
}
