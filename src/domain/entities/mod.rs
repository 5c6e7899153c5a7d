//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures. Creation input is kept in a separate
//! struct ([`NewLink`]) so that store-assigned fields (id, counters,
//! timestamps) cannot be supplied by callers.

pub mod link;

pub use link::{Link, LinkQuery, NewLink};
