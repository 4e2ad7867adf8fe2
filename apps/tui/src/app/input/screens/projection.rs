use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen, PendingQuery, MIN_FEATURES};
use crossterm::event::KeyCode;

pub fn handle_projection_input(app: &mut App, key: KeyCode) {
    let total_points = app.projection.as_ref().map_or(0, Vec::len);

    match key {
        KeyCode::Esc => {
            app.screen = AppScreen::Gallery;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('m') => {
            app.method = app.method.toggled();
        }
        KeyCode::Char(ch @ '1'..='4') => {
            let index = ch as usize - '1' as usize;
            app.reduce_features[index] = !app.reduce_features[index];
        }
        KeyCode::Up => {
            app.projection_selection = wrap_decrement(app.projection_selection, total_points);
        }
        KeyCode::Down => {
            app.projection_selection = wrap_increment(app.projection_selection, total_points);
        }
        KeyCode::Enter => {
            if app.enabled_reduce_features().len() < MIN_FEATURES {
                app.status_message =
                    format!("Select at least {MIN_FEATURES} features before projecting");
                return;
            }
            app.projection = None;
            app.projection_selection = 0;
            app.projection_loading = true;
            app.pending = Some(PendingQuery::RunReduce);
        }
        _ => {}
    }
}
