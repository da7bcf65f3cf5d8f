//! Assignment domain models.
//!
//! Provides the data types the optimizer reads (jobs and resources) and
//! the solution type it produces (assignments).
//!
//! # Domain Mappings
//!
//! | u-treeseed | Cloud | Batch Cluster | Render Farm |
//! |------------|-------|---------------|-------------|
//! | Job | Cloudlet | Batch job | Frame |
//! | Resource | VM | Worker node | Render node |
//! | Assignment | Broker binding | Placement | Frame allocation |

mod assignment;
mod job;
mod resource;

pub use assignment::Assignment;
pub use job::{Job, JobId};
pub use resource::Resource;
