//! Repository wrappers over the document store.
//!
//! Handlers talk to these, never to the store directly. Each repository
//! holds the injected store handle; there is no process-wide global.

mod exercises;
mod users;

pub use exercises::ExerciseRepository;
pub use users::UserRepository;
