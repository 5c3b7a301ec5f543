//! # Scenario bodies
//!
//! - [`descriptor`](crate::body::descriptor) — [`BodyDescriptor`](crate::body::descriptor::BodyDescriptor)
//!   and its orbit (elements at an epoch plus daily rates).
//! - [`converter`](crate::body::converter) — conversion of a raw NeoWs orbital record into a descriptor.
//! - [`registry`](crate::body::registry) — immutable name → descriptor snapshots.

/// Canonical body and orbit structures.
pub mod descriptor;

/// Raw orbital record to body descriptor conversion.
pub mod converter;

/// Name-keyed body snapshots.
pub mod registry;
