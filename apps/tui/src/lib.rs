// Export our modules for use in binaries and tests
pub mod config;
pub mod data;
pub mod domain;
pub mod geometry;

pub use domain::{ClusterAlgorithm, Feature, Metric, ReduceMethod};
