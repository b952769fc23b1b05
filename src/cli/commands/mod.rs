pub mod alloc;
pub mod audit;
pub mod config;
pub mod db;
pub mod demand;
pub mod init;
pub mod log;
pub mod plan;
pub mod project;
pub mod resources;
pub mod seed;
pub mod sync;
