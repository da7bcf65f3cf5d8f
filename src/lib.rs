//! Job-to-resource assignment optimization for the U-Engine ecosystem.
//!
//! Given a fixed set of resources (each with a processing speed) and a
//! batch of independent jobs (each with a processing length), searches for
//! an assignment that jointly minimizes makespan, load imbalance and an
//! energy proxy.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `Resource`, `Assignment`
//! - **`validation`**: Catalog integrity checks (empty catalogs, duplicate
//!   IDs, non-positive lengths and speeds)
//! - **`tsa`**: The tree-seed optimizer, its fitness model and the
//!   mutation oracle interface
//! - **`baseline`**: Round-robin and greedy assignments for comparison
//!
//! # Architecture
//!
//! The optimizer consumes only declared job lengths and resource speeds.
//! Executing the resulting mapping (simulation or real dispatch) is left
//! to the caller.
//!
//! # References
//!
//! - Kiran (2015), "TSA: Tree-seed algorithm for continuous optimization"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod baseline;
pub mod models;
pub mod tsa;
pub mod validation;
