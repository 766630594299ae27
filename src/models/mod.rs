//! Core data models for the exercise tracker.

mod exercise;
mod ids;
mod user;

pub use exercise::*;
pub use ids::*;
pub use user::*;
