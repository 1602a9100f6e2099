pub mod api;
pub mod candidates;
pub mod capture;
pub mod config;
pub mod consts;
pub mod error;
pub mod frequency;
pub mod geometry;
pub mod model;
pub mod ranking;
// cmd and reports are modules of the binary crate (main.rs).
