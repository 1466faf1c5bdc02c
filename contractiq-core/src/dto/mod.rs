//! Data Transfer Objects for the ContractIQ backend API
//!
//! Request bodies mirror what the backend accepts, including its defaults,
//! and response bodies cover what the client needs to track jobs.

pub mod job;
pub mod worker;
pub mod workflow;
