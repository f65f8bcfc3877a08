//! # bygg-store
//!
//! The authoritative in-memory collection of time entries for one session,
//! plus the stateless aggregation functions that turn it into dashboard
//! figures and chart series.
//!
//! Nothing here is persisted and nothing here fails: every operation is
//! synchronous and total over well-typed input.

pub mod aggregate;
mod store;

pub use store::RecordStore;
