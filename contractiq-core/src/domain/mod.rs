//! Core domain types
//!
//! The client never creates or mutates jobs; these types describe what the
//! backend reports about them and which workflows can produce them.

pub mod job;
pub mod workflow;
