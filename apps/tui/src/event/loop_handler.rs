use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;

use crate::app::{handle_input, App, PendingQuery};
use crate::ui;

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        // Update animations
        app.update();

        // Draw the UI with better error context
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        // Resolve the query requested by the previous keypress. The draw
        // above has already put the loading state on screen; the await
        // below blocks only this query, exactly one attempt.
        if let Some(pending) = app.pending.take() {
            resolve_pending(app, pending).await;
            continue;
        }

        // Handle events with improved error context
        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events for now
                }
            }
        }
    }
    Ok(())
}

/// Stores a resolved query's result into the owning screen's state.
/// Transport-level failures never reach here for queries with a full
/// fallback; what remains is the unknown-subject case.
async fn resolve_pending(app: &mut App, pending: PendingQuery) {
    match pending {
        PendingQuery::LoadAliens => match app.actions.aliens().await {
            Ok(aliens) => {
                app.aliens = aliens;
                app.rebuild_filter();
                app.status_message = format!("Loaded {} subjects", app.aliens.len());
            }
            Err(e) => {
                app.status_message = format!("Error: {e}");
            }
        },
        PendingQuery::LoadDetail(id) => {
            match app.actions.alien_detail(&id).await {
                Ok(detail) => {
                    app.detail = Some(detail);
                    app.start_completion_fx();
                }
                Err(e) => {
                    app.detail_error = Some(format!("{e}"));
                }
            }
            app.detail_loading = false;
        }
        PendingQuery::LoadSimilarity(id, metric) => {
            match app.actions.similarity(&id, metric).await {
                Ok(data) => {
                    app.similarity = Some(data);
                }
                Err(e) => {
                    app.status_message = format!("Error: {e}");
                }
            }
            app.similarity_loading = false;
        }
        PendingQuery::RunCluster => {
            let features = app.enabled_cluster_features();
            match app
                .actions
                .run_cluster(app.algorithm, app.cluster_k, &features)
                .await
            {
                Ok(groups) => {
                    app.clusters = Some(groups);
                }
                Err(e) => {
                    app.status_message = format!("Error: {e}");
                }
            }
            app.cluster_loading = false;
        }
        PendingQuery::RunReduce => {
            let features = app.enabled_reduce_features();
            match app.actions.run_reduce(app.method, &features).await {
                Ok(points) => {
                    app.projection = Some(points);
                }
                Err(e) => {
                    app.status_message = format!("Error: {e}");
                }
            }
            app.projection_loading = false;
        }
    }
}

/// Run the application in headless mode (no UI)
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    app.initialize().await?;

    if json {
        render_headless_json(app)?;
    } else {
        render_headless_stats(app);
    }

    Ok(())
}

fn render_headless_stats(app: &App) {
    let stats = build_headless_stats(app);

    println!("\nXenodex Catalog Stats");
    println!("=====================");
    println!("Source: {}", stats.api_url);
    println!("Total subjects: {}", stats.total_subjects);

    println!("\nMean core stats:");
    for (label, value) in &stats.stat_means {
        println!("- {label}: {value:.1}");
    }

    println!("\nStat leaders:");
    for (label, name, value) in &stats.stat_leaders {
        println!("- {label}: {name} ({value:.0})");
    }

    println!("\nSpecies:");
    for (species, count) in &stats.by_species {
        println!("- {species}: {count}");
    }
}

fn render_headless_json(app: &App) -> Result<()> {
    let stats = build_headless_stats(app);
    let json = serde_json::to_string_pretty(&stats)?;
    println!("{json}");
    Ok(())
}

fn build_headless_stats(app: &App) -> HeadlessStats {
    let aliens = &app.aliens;
    let total_subjects = aliens.len();

    let labels = ["strength", "speed", "intelligence", "durability"];

    let mut stat_means = Vec::new();
    let mut stat_leaders = Vec::new();
    for (axis, label) in labels.iter().enumerate() {
        let values = aliens.iter().map(|alien| alien.core_stats()[axis]);

        #[allow(clippy::cast_precision_loss)]
        let mean = if total_subjects == 0 {
            0.0
        } else {
            values.clone().sum::<f64>() / total_subjects as f64
        };
        stat_means.push(((*label).to_string(), mean));

        if let Some((leader, value)) = aliens
            .iter()
            .map(|alien| (alien.name.clone(), alien.core_stats()[axis]))
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        {
            stat_leaders.push(((*label).to_string(), leader, value));
        }
    }

    let mut by_species: Vec<(String, usize)> = Vec::new();
    for alien in aliens {
        let species = alien
            .species
            .clone()
            .unwrap_or_else(|| "(unknown)".to_string());
        if let Some(entry) = by_species.iter_mut().find(|(name, _)| *name == species) {
            entry.1 += 1;
        } else {
            by_species.push((species, 1));
        }
    }

    HeadlessStats {
        api_url: app.actions.api_url().to_string(),
        total_subjects,
        stat_means,
        stat_leaders,
        by_species,
    }
}

#[derive(serde::Serialize)]
struct HeadlessStats {
    api_url: String,
    total_subjects: usize,
    stat_means: Vec<(String, f64)>,
    stat_leaders: Vec<(String, String, f64)>,
    by_species: Vec<(String, usize)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::AppActions;
    use crate::data::client::ApiClient;

    #[tokio::test]
    async fn headless_stats_cover_the_fallback_catalog() {
        let mut app = App::new();
        app.actions = AppActions::with_client(ApiClient::new("http://127.0.0.1:9"));
        app.initialize().await.unwrap();

        let stats = build_headless_stats(&app);
        assert_eq!(stats.total_subjects, 8);
        assert_eq!(stats.stat_means.len(), 4);

        // Fasttrack holds the top speed in the bundled dataset.
        let speed_leader = stats
            .stat_leaders
            .iter()
            .find(|(label, _, _)| label == "speed")
            .unwrap();
        assert_eq!(speed_leader.1, "Fasttrack");
        assert_eq!(speed_leader.2, 98.0);
    }
}
