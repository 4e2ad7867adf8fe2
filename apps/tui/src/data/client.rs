use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::debug_enabled;
use crate::data::catalog;
use crate::data::fallback;
use crate::data::models::{
    Alien, AlienDetail, ClusterGroup, ClusterRequest, ProjectionPoint, ReduceRequest,
    SimilarityApiResponse, SimilarityData,
};
use crate::domain::{ClusterAlgorithm, Feature, Metric, ReduceMethod};

/// Errors surfaced by the catalog service client. Transport and status
/// failures are recovered locally at every call site that has a fallback;
/// an unknown subject is fatal for that single query.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status {0}")]
    Status(StatusCode),

    #[error("unknown subject: {0}")]
    UnknownSubject(String),
}

/// Client for the remote classification service. One attempt per call:
/// no retry, no backoff, no timeout. A hung call blocks only the query
/// that issued it.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(crate::config::api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full subject listing. The bundled catalog stands in verbatim when
    /// the service cannot be reached.
    pub async fn list_aliens(&self) -> Result<Vec<Alien>, ApiError> {
        let request = self.http.get(format!("{}/aliens", self.base_url));
        Self::recover("/aliens", Self::send(request).await, || {
            Ok(catalog::catalog().to_vec())
        })
    }

    /// Detail record for one subject. On failure the record is synthesized
    /// from the catalog; an id unknown to both sources is unrecoverable.
    pub async fn alien_detail(&self, id: &str) -> Result<AlienDetail, ApiError> {
        let path = format!("/aliens/{id}");
        let request = self.http.get(format!("{}{path}", self.base_url));
        Self::recover(&path, Self::send(request).await, || {
            fallback::detail_for(id).ok_or_else(|| ApiError::UnknownSubject(id.to_string()))
        })
    }

    /// Ranked similar and opposite subjects. The metric name rides along
    /// on the remote call; the local substitute ignores it.
    pub async fn similarity(&self, id: &str, metric: Metric) -> Result<SimilarityData, ApiError> {
        let path = format!("/similarity/{id}?metric={}", metric.as_str());
        let request = self.http.get(format!("{}{path}", self.base_url));

        let response: Result<SimilarityApiResponse, ApiError> = Self::send(request).await;
        Self::recover(&path, response.map(SimilarityData::from), || {
            fallback::similarity_for(id).ok_or_else(|| ApiError::UnknownSubject(id.to_string()))
        })
    }

    /// Partition of all subjects into `k` groups. The substitute is a
    /// round-robin assignment with no relation to features or algorithm.
    pub async fn cluster(
        &self,
        algorithm: ClusterAlgorithm,
        k: usize,
        features: &[Feature],
    ) -> Result<Vec<ClusterGroup>, ApiError> {
        let body = ClusterRequest {
            algorithm: algorithm.as_str().to_string(),
            k,
            features: feature_names(features),
        };
        let request = self.http.post(format!("{}/cluster", self.base_url)).json(&body);
        Self::recover("/cluster", Self::send(request).await, || {
            Ok(fallback::clusters_for(k))
        })
    }

    /// 2D embedding of all subjects. The substitute is the jittered
    /// circle layout, regardless of method or features.
    pub async fn reduce(
        &self,
        method: ReduceMethod,
        features: &[Feature],
    ) -> Result<Vec<ProjectionPoint>, ApiError> {
        let body = ReduceRequest {
            method: method.as_str().to_string(),
            features: feature_names(features),
        };
        let request = self.http.post(format!("{}/reduce", self.base_url)).json(&body);
        Self::recover("/reduce", Self::send(request).await, || {
            Ok(fallback::projection())
        })
    }

    /// Single attempt; a non-success status is an error like any other.
    async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        Ok(response.json::<T>().await?)
    }

    /// The resilient-fetch contract: hand back the remote result, or on
    /// any failure run the fallback producer and return whatever it
    /// yields, including its own error.
    fn recover<T>(
        path: &str,
        attempted: Result<T, ApiError>,
        fallback: impl FnOnce() -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        match attempted {
            Ok(value) => {
                if debug_enabled() {
                    eprintln!("[api] {path}: remote data received");
                }
                Ok(value)
            }
            Err(error) => {
                if debug_enabled() {
                    eprintln!("[api] {path}: {error}; using local substitute");
                }
                fallback()
            }
        }
    }
}

fn feature_names(features: &[Feature]) -> Vec<String> {
    features
        .iter()
        .map(|feature| feature.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Nothing listens on the discard port, so every call exercises the
    /// fallback path.
    fn unreachable_client() -> ApiClient {
        ApiClient::new("http://127.0.0.1:9")
    }

    #[tokio::test]
    async fn listing_falls_back_to_the_bundled_catalog() {
        let aliens = unreachable_client().list_aliens().await.unwrap();

        assert_eq!(aliens.len(), 8);
        let ids: Vec<&str> = aliens.iter().map(|alien| alien.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[tokio::test]
    async fn detail_is_synthesized_with_empty_powers() {
        let detail = unreachable_client().alien_detail("3").await.unwrap();

        assert_eq!(detail.name, "Squidstrictor");
        assert_eq!(detail.stats.intelligence, 90.0);
        assert!(detail.super_powers.is_empty());
    }

    #[tokio::test]
    async fn unknown_subject_is_fatal_for_that_query_only() {
        let client = unreachable_client();

        let error = client.alien_detail("99").await.unwrap_err();
        assert!(matches!(error, ApiError::UnknownSubject(id) if id == "99"));

        // Unrelated queries keep working.
        assert!(client.list_aliens().await.is_ok());
    }

    #[tokio::test]
    async fn similarity_fallback_ranks_neighbours_of_subject_one() {
        let data = unreachable_client()
            .similarity("1", Metric::Cosine)
            .await
            .unwrap();

        let ids: Vec<&str> = data
            .similar
            .iter()
            .map(|result| result.alien.id.as_str())
            .collect();
        assert_eq!(ids, ["8", "6", "5"]);
        assert_eq!(
            data.opposite.map(|result| result.alien.id),
            Some("7".to_string())
        );
    }

    #[tokio::test]
    async fn metric_name_is_ignored_by_the_fallback() {
        let client = unreachable_client();

        let cosine = client.similarity("2", Metric::Cosine).await.unwrap();
        let manhattan = client.similarity("2", Metric::Manhattan).await.unwrap();
        assert_eq!(cosine, manhattan);
    }

    #[tokio::test]
    async fn cluster_fallback_distributes_round_robin() {
        let groups = unreachable_client()
            .cluster(ClusterAlgorithm::KMeans, 3, &Feature::ALL)
            .await
            .unwrap();

        let sizes: Vec<usize> = groups.iter().map(|group| group.aliens.len()).collect();
        assert_eq!(sizes, [3, 3, 2]);
    }

    #[tokio::test]
    async fn reduce_fallback_produces_a_point_per_subject() {
        let points = unreachable_client()
            .reduce(ReduceMethod::Pca, &Feature::ALL)
            .await
            .unwrap();

        assert_eq!(points.len(), 8);
        for point in &points {
            let radius = point.x.hypot(point.y);
            assert!((0.6..=1.0).contains(&radius), "{}: {radius}", point.name);
        }
    }
}
