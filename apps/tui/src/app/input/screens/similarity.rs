use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen, PendingQuery};
use crossterm::event::KeyCode;

pub fn handle_similarity_input(app: &mut App, key: KeyCode) {
    // Three similar rows plus the opposite row.
    let total_rows = app.similarity.as_ref().map_or(0, |data| {
        data.similar.len() + usize::from(data.opposite.is_some())
    });

    match key {
        KeyCode::Esc => {
            app.screen = AppScreen::Gallery;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('m') => {
            app.metric = app.metric.next();
            rerun_similarity(app);
        }
        KeyCode::Char('r') => {
            rerun_similarity(app);
        }
        KeyCode::Up => {
            app.similarity_selection = wrap_decrement(app.similarity_selection, total_rows);
        }
        KeyCode::Down => {
            app.similarity_selection = wrap_increment(app.similarity_selection, total_rows);
        }
        KeyCode::Enter => {
            if let Some(id) = selected_result_id(app) {
                if !app.open_details_by_id(&id) {
                    app.status_message = format!("Subject {id} is not in the current list");
                }
            }
        }
        _ => {}
    }
}

fn rerun_similarity(app: &mut App) {
    if let Some(alien) = app.selected_alien() {
        let id = alien.id.clone();
        app.similarity = None;
        app.similarity_selection = 0;
        app.similarity_loading = true;
        app.pending = Some(PendingQuery::LoadSimilarity(id, app.metric));
    }
}

fn selected_result_id(app: &App) -> Option<String> {
    let data = app.similarity.as_ref()?;

    if app.similarity_selection < data.similar.len() {
        return Some(data.similar[app.similarity_selection].alien.id.clone());
    }

    data.opposite
        .as_ref()
        .map(|result| result.alien.id.clone())
}
