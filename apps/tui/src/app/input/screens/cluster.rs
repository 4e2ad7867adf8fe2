use crate::app::state::{App, AppScreen, PendingQuery, MAX_CLUSTERS, MIN_CLUSTERS, MIN_FEATURES};
use crossterm::event::KeyCode;

pub fn handle_cluster_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.screen = AppScreen::Gallery;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('a') => {
            app.algorithm = app.algorithm.toggled();
        }
        KeyCode::Left | KeyCode::Char('-') => {
            if app.cluster_k > MIN_CLUSTERS {
                app.cluster_k -= 1;
            }
        }
        KeyCode::Right | KeyCode::Char('+') => {
            if app.cluster_k < MAX_CLUSTERS {
                app.cluster_k += 1;
            }
        }
        KeyCode::Char(ch @ '1'..='4') => {
            let index = ch as usize - '1' as usize;
            app.cluster_features[index] = !app.cluster_features[index];
        }
        KeyCode::Enter => {
            if app.enabled_cluster_features().len() < MIN_FEATURES {
                app.status_message =
                    format!("Select at least {MIN_FEATURES} features before clustering");
                return;
            }
            app.clusters = None;
            app.cluster_loading = true;
            app.pending = Some(PendingQuery::RunCluster);
        }
        _ => {}
    }
}
