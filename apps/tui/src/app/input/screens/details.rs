use crate::app::state::{App, AppScreen, CardFace, PendingQuery};
use crossterm::event::KeyCode;

pub fn handle_details_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.screen = AppScreen::Gallery;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('f') | KeyCode::Enter => {
            flip_card(app);
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
        _ => {}
    }
}

/// The first flip to the back face triggers the on-demand detail query;
/// later flips just turn the card.
fn flip_card(app: &mut App) {
    match app.card_face {
        CardFace::Front => {
            app.card_face = CardFace::Back;

            if app.detail.is_none() && !app.detail_loading {
                if let Some(alien) = app.selected_alien() {
                    let id = alien.id.clone();
                    app.detail_error = None;
                    app.detail_loading = true;
                    app.pending = Some(PendingQuery::LoadDetail(id));
                }
            }
        }
        CardFace::Back => {
            app.card_face = CardFace::Front;
        }
    }
}
