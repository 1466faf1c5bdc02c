//! ContractIQ Core
//!
//! Core types shared by the ContractIQ client and command-line front-end.
//!
//! This crate contains:
//! - Domain types: jobs as observed through the backend, and the catalogue
//!   of workflows that can be submitted as jobs
//! - DTOs: request and response bodies exchanged with the backend API

pub mod domain;
pub mod dto;
