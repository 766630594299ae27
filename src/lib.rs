//! # Exercise Tracker
//!
//! A small REST service for registering users, logging exercises against
//! them, and reading a user's history back as a date-stamped log.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (users, exercises, ids)
//! - **dates**: Normalization of free-form date input to calendar dates
//! - **validate**: Request validation boundary (loose input → typed payload)
//! - **storage**: JSONL-backed document store (users and exercises collections)
//! - **repos**: Repository wrappers over the store
//! - **aggregate**: Log view construction (filtering, projection)
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod aggregate;
pub mod api;
pub mod config;
pub mod dates;
pub mod models;
pub mod repos;
pub mod storage;
pub mod validate;

pub use models::*;
