pub mod catalog;
pub mod client;
pub mod fallback;
pub mod models;

pub use client::{ApiClient, ApiError};
pub use models::{
    Alien, AlienDetail, AlienStats, ClusterGroup, ProjectionPoint, SimilarityData,
    SimilarityResult,
};
