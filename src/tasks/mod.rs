//! Background Tasks Module
//!
//! Contains background tasks owned by cache handles.
//!
//! # Tasks
//! - TTL sweep: removes expired cache entries at a configured interval

mod cleanup;

pub use cleanup::spawn_cleanup_task;
