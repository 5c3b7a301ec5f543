//! # neo_scenario
//!
//! Ingests near Earth object data from NASA's NeoWs API and turns it into the body registry
//! consumed by an orbit simulation engine: close approaches are ranked, the orbital record of
//! every selected object is fetched concurrently, converted to elements anchored to an epoch,
//! and merged with the scenario's reference bodies.
//!
//! Entry point: [`scenario::NeoScenario::load`].
pub mod body;
pub mod config;
pub mod constants;
pub mod conversion;
pub mod feed;
pub mod neo_errors;
pub mod scenario;
pub mod time;
pub mod transport;
