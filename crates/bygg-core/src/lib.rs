//! # bygg-core
//!
//! Core types, ID generation, and error types for ByggKoll.
//!
//! This crate provides the foundational types shared across all ByggKoll crates:
//! - Entity structs for time entries, projects, and AI analysis results
//! - The closed `WorkType` enumeration and the analysis state machine
//! - The builtin project catalog and the seed data set
//! - ID prefix constants and generation helpers
//! - Cross-cutting error types
//! - Dashboard response types

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
pub mod sample;
