pub mod allocation;
pub mod demand_type;
pub mod phase;
pub mod project;
pub mod resource;
pub mod time_log;
