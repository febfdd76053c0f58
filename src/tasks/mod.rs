//! Background Tasks Module
//!
//! Opt-in periodic maintenance. The cache itself expires entries lazily and
//! owns no timer; callers that want proactive reclamation spawn these tasks
//! on top.

mod cleanup;

pub use cleanup::spawn_cleanup_task;
