use std::time::{Duration, Instant};

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use tachyonfx::{fx, Effect, EffectTimer, Interpolation};
use throbber_widgets_tui::ThrobberState;

use crate::app::actions::AppActions;
use crate::data::models::{Alien, AlienDetail, ClusterGroup, ProjectionPoint, SimilarityData};
use crate::domain::{ClusterAlgorithm, Feature, Metric, ReduceMethod};

/// UI minimum and maximum for the cluster count control.
pub const MIN_CLUSTERS: usize = 2;
pub const MAX_CLUSTERS: usize = 5;

/// Minimum number of features required before running an analysis.
pub const MIN_FEATURES: usize = 2;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Gallery,
    AlienDetails,
    Similarity,
    Cluster,
    Projection,
}

/// Which face of the detail flip-card is showing.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardFace {
    Front,
    Back,
}

/// A query requested by an input handler, resolved by the event loop
/// after the next draw so the loading state is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingQuery {
    LoadAliens,
    LoadDetail(String),
    LoadSimilarity(String, Metric),
    RunCluster,
    RunReduce,
}

pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub actions: AppActions,
    pub pending: Option<PendingQuery>,
    pub status_message: String,
    pub show_help: bool,

    pub animation_counter: f64,
    pub animation_paused: bool,
    pub last_frame: Instant,
    pub last_tick: Duration,
    pub completion_fx: Option<Effect>,
    pub throbber_state: ThrobberState,

    // Gallery
    pub aliens: Vec<Alien>,
    pub filtered_indices: Vec<usize>,
    pub selected_index: usize,
    pub search_active: bool,
    pub search_input: String,

    // Detail flip-card
    pub card_face: CardFace,
    pub detail: Option<AlienDetail>,
    pub detail_loading: bool,
    pub detail_error: Option<String>,

    // Similarity
    pub metric: Metric,
    pub similarity: Option<SimilarityData>,
    pub similarity_loading: bool,
    pub similarity_selection: usize,

    // Cluster lab
    pub algorithm: ClusterAlgorithm,
    pub cluster_k: usize,
    pub cluster_features: [bool; 4],
    pub clusters: Option<Vec<ClusterGroup>>,
    pub cluster_loading: bool,

    // Projection
    pub method: ReduceMethod,
    pub reduce_features: [bool; 4],
    pub projection: Option<Vec<ProjectionPoint>>,
    pub projection_loading: bool,
    pub projection_selection: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            screen: AppScreen::Gallery,
            actions: AppActions::new(),
            pending: None,
            status_message: String::new(),
            show_help: false,
            animation_counter: 0.0,
            animation_paused: false,
            last_frame: Instant::now(),
            last_tick: Duration::ZERO,
            completion_fx: None,
            throbber_state: ThrobberState::default(),
            aliens: Vec::new(),
            filtered_indices: Vec::new(),
            selected_index: 0,
            search_active: false,
            search_input: String::new(),
            card_face: CardFace::Front,
            detail: None,
            detail_loading: false,
            detail_error: None,
            metric: Metric::Cosine,
            similarity: None,
            similarity_loading: false,
            similarity_selection: 0,
            algorithm: ClusterAlgorithm::KMeans,
            cluster_k: 3,
            cluster_features: [true; 4],
            clusters: None,
            cluster_loading: false,
            method: ReduceMethod::Pca,
            reduce_features: [true; 4],
            projection: None,
            projection_loading: false,
            projection_selection: 0,
        }
    }

    /// Loads the subject list up front. Failure is non-fatal: the screens
    /// re-request through the pending-query machinery.
    pub async fn initialize(&mut self) -> color_eyre::Result<()> {
        self.aliens = self.actions.aliens().await?;
        self.rebuild_filter();
        Ok(())
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.last_tick = delta;

        if !self.animation_paused {
            // Animation counter cycles between 0 and 2*PI
            self.animation_counter += delta.as_secs_f64() * 2.0;
            if self.animation_counter > 2.0 * std::f64::consts::PI {
                self.animation_counter -= 2.0 * std::f64::consts::PI;
            }
        }

        self.throbber_state.calc_next();
    }

    pub fn toggle_animation_pause(&mut self) {
        self.animation_paused = !self.animation_paused;
    }

    /// Short sweep played over the card back when a detail record lands.
    pub fn start_completion_fx(&mut self) {
        self.completion_fx = Some(fx::coalesce(EffectTimer::from_ms(
            450,
            Interpolation::QuadOut,
        )));
    }

    /// Recomputes the gallery's visible rows from the fuzzy search input.
    pub fn rebuild_filter(&mut self) {
        if self.search_input.is_empty() {
            self.filtered_indices = (0..self.aliens.len()).collect();
        } else {
            let matcher = SkimMatcherV2::default();
            let mut scored: Vec<(i64, usize)> = self
                .aliens
                .iter()
                .enumerate()
                .filter_map(|(index, alien)| {
                    matcher
                        .fuzzy_match(&alien.name, &self.search_input)
                        .map(|score| (score, index))
                })
                .collect();
            scored.sort_by(|a, b| b.0.cmp(&a.0));
            self.filtered_indices = scored.into_iter().map(|(_, index)| index).collect();
        }

        if self.selected_index >= self.filtered_indices.len() {
            self.selected_index = self.filtered_indices.len().saturating_sub(1);
        }
    }

    pub fn clear_search(&mut self) {
        self.search_active = false;
        self.search_input.clear();
        self.rebuild_filter();
    }

    /// The subject currently highlighted in the gallery, through the
    /// search filter.
    pub fn selected_alien(&self) -> Option<&Alien> {
        self.filtered_indices
            .get(self.selected_index)
            .and_then(|&index| self.aliens.get(index))
    }

    /// Resets the flip-card for a freshly selected subject.
    pub fn reset_card(&mut self) {
        self.card_face = CardFace::Front;
        self.detail = None;
        self.detail_loading = false;
        self.detail_error = None;
        self.completion_fx = None;
    }

    pub fn enabled_cluster_features(&self) -> Vec<Feature> {
        enabled_features(&self.cluster_features)
    }

    pub fn enabled_reduce_features(&self) -> Vec<Feature> {
        enabled_features(&self.reduce_features)
    }

    /// Jumps to a subject by id and opens its detail card. Partial
    /// similarity records only carry an id; the gallery list has the rest.
    pub fn open_details_by_id(&mut self, id: &str) -> bool {
        let Some(position) = self.aliens.iter().position(|alien| alien.id == id) else {
            return false;
        };

        self.clear_search();
        self.selected_index = self
            .filtered_indices
            .iter()
            .position(|&index| index == position)
            .unwrap_or(0);
        self.reset_card();
        self.screen = AppScreen::AlienDetails;
        true
    }
}

fn enabled_features(toggles: &[bool; 4]) -> Vec<Feature> {
    Feature::ALL
        .into_iter()
        .zip(toggles.iter())
        .filter_map(|(feature, &enabled)| enabled.then_some(feature))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::catalog;

    fn app_with_catalog() -> App {
        let mut app = App::new();
        app.aliens = catalog().to_vec();
        app.rebuild_filter();
        app
    }

    #[test]
    fn search_filters_and_clamps_the_selection() {
        let mut app = app_with_catalog();
        app.selected_index = 7;

        app.search_input = "rath".to_string();
        app.rebuild_filter();

        assert!(!app.filtered_indices.is_empty());
        assert!(app.selected_index < app.filtered_indices.len());
        let best = app.selected_alien().map(|alien| alien.name.clone());
        assert_eq!(best, Some("Rath".to_string()));

        app.clear_search();
        assert_eq!(app.filtered_indices.len(), 8);
    }

    #[test]
    fn opening_by_id_lands_on_the_right_subject() {
        let mut app = app_with_catalog();

        assert!(app.open_details_by_id("5"));
        assert_eq!(app.screen, AppScreen::AlienDetails);
        assert_eq!(
            app.selected_alien().map(|alien| alien.name.as_str()),
            Some("Blitzwolfer")
        );

        assert!(!app.open_details_by_id("99"));
    }

    #[test]
    fn feature_toggles_map_to_the_canonical_order() {
        let mut app = App::new();
        app.cluster_features = [true, false, true, false];

        assert_eq!(
            app.enabled_cluster_features(),
            vec![Feature::Strength, Feature::Intelligence]
        );
    }
}
