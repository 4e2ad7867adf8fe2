use crate::app::state::{App, AppScreen, PendingQuery};
use crossterm::event::KeyCode;

pub fn handle_gallery_input(app: &mut App, key: KeyCode) {
    if app.search_active {
        match key {
            KeyCode::Esc => {
                app.clear_search();
                return;
            }
            KeyCode::Enter => {
                app.search_active = false;
                return;
            }
            KeyCode::Backspace => {
                app.search_input.pop();
                app.rebuild_filter();
                return;
            }
            KeyCode::Char(ch) => {
                app.search_input.push(ch);
                app.rebuild_filter();
                return;
            }
            _ => {}
        }
    }

    let total_rows = app.filtered_indices.len();

    match key {
        KeyCode::Esc => {
            if !app.search_input.is_empty() {
                app.clear_search();
            }
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('/') => {
            app.search_active = true;
        }
        KeyCode::Char('r') => {
            app.actions.invalidate_aliens();
            app.pending = Some(PendingQuery::LoadAliens);
            app.status_message = "Refreshing subject list...".to_string();
        }
        KeyCode::Enter => {
            if app.selected_alien().is_some() {
                app.reset_card();
                app.screen = AppScreen::AlienDetails;
            }
        }
        KeyCode::Char('s') => {
            if let Some(alien) = app.selected_alien() {
                let id = alien.id.clone();
                app.similarity = None;
                app.similarity_selection = 0;
                app.similarity_loading = true;
                app.pending = Some(PendingQuery::LoadSimilarity(id, app.metric));
                app.screen = AppScreen::Similarity;
            }
        }
        KeyCode::Char('c') => {
            app.screen = AppScreen::Cluster;
        }
        KeyCode::Char('p') => {
            app.screen = AppScreen::Projection;
        }
        KeyCode::Up => {
            if app.selected_index > 0 {
                app.selected_index -= 1;
            }
        }
        KeyCode::Down => {
            if total_rows > 0 && app.selected_index + 1 < total_rows {
                app.selected_index += 1;
            }
        }
        KeyCode::PageUp => {
            app.selected_index = app.selected_index.saturating_sub(5);
        }
        KeyCode::PageDown => {
            if total_rows > 0 {
                app.selected_index = (app.selected_index + 5).min(total_rows - 1);
            }
        }
        KeyCode::Home => {
            app.selected_index = 0;
        }
        KeyCode::End => {
            if total_rows > 0 {
                app.selected_index = total_rows - 1;
            }
        }
        _ => {}
    }
}
