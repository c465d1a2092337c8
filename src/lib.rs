pub mod api;
pub mod bounds;
pub mod config;
pub mod state;
