use std::time::{Duration, Instant};

use color_eyre::Result;

use crate::data::client::ApiClient;
use crate::data::models::{Alien, AlienDetail, ClusterGroup, ProjectionPoint, SimilarityData};
use crate::domain::{ClusterAlgorithm, Feature, Metric, ReduceMethod};

/// How long a fetched subject list stays fresh before the next access
/// triggers a re-fetch. There is no proactive invalidation.
const LIST_FRESHNESS_WINDOW: Duration = Duration::from_secs(5 * 60);

/// Async facade over the catalog service, owned by the `App`. Every
/// operation resolves remote-or-fallback; only the unknown-subject case
/// surfaces as an error.
#[derive(Debug)]
pub struct AppActions {
    client: ApiClient,
    cached_aliens: Vec<Alien>,
    list_fetched_at: Option<Instant>,
}

impl AppActions {
    pub fn new() -> Self {
        Self::with_client(ApiClient::from_env())
    }

    pub fn with_client(client: ApiClient) -> Self {
        Self {
            client,
            cached_aliens: Vec::new(),
            list_fetched_at: None,
        }
    }

    pub fn api_url(&self) -> &str {
        self.client.base_url()
    }

    /// The full subject list, cached for the freshness window and
    /// re-fetched lazily once it lapses.
    pub async fn aliens(&mut self) -> Result<Vec<Alien>> {
        let fresh = self
            .list_fetched_at
            .is_some_and(|at| at.elapsed() < LIST_FRESHNESS_WINDOW);

        if !fresh {
            self.cached_aliens = self.client.list_aliens().await?;
            self.list_fetched_at = Some(Instant::now());
        }

        Ok(self.cached_aliens.clone())
    }

    /// Drops the cached list so the next access re-fetches.
    pub fn invalidate_aliens(&mut self) {
        self.list_fetched_at = None;
    }

    pub async fn alien_detail(&self, id: &str) -> Result<AlienDetail> {
        self.client.alien_detail(id).await.map_err(Into::into)
    }

    pub async fn similarity(&self, id: &str, metric: Metric) -> Result<SimilarityData> {
        self.client.similarity(id, metric).await.map_err(Into::into)
    }

    pub async fn run_cluster(
        &self,
        algorithm: ClusterAlgorithm,
        k: usize,
        features: &[Feature],
    ) -> Result<Vec<ClusterGroup>> {
        self.client
            .cluster(algorithm, k, features)
            .await
            .map_err(Into::into)
    }

    pub async fn run_reduce(
        &self,
        method: ReduceMethod,
        features: &[Feature],
    ) -> Result<Vec<ProjectionPoint>> {
        self.client
            .reduce(method, features)
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_is_served_from_cache_inside_the_freshness_window() {
        let mut actions = AppActions::with_client(ApiClient::new("http://127.0.0.1:9"));

        let first = actions.aliens().await.unwrap();
        let fetched_at = actions.list_fetched_at.unwrap();

        let second = actions.aliens().await.unwrap();
        assert_eq!(first, second);
        // No re-fetch happened: the stamp is unchanged.
        assert_eq!(actions.list_fetched_at.unwrap(), fetched_at);
    }

    #[tokio::test]
    async fn invalidation_forces_a_refetch() {
        let mut actions = AppActions::with_client(ApiClient::new("http://127.0.0.1:9"));

        actions.aliens().await.unwrap();
        let first_stamp = actions.list_fetched_at.unwrap();

        actions.invalidate_aliens();
        actions.aliens().await.unwrap();
        assert!(actions.list_fetched_at.unwrap() >= first_stamp);
        assert_eq!(actions.cached_aliens.len(), 8);
    }
}
