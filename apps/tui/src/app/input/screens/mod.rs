use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod cluster;
mod details;
mod gallery;
mod help;
mod projection;
mod similarity;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    // Space pauses the ambient animation everywhere except while typing
    // into the gallery search box.
    if !(app.screen == AppScreen::Gallery && app.search_active)
        && help::handle_animation_toggle(app, key)
    {
        return;
    }

    match app.screen {
        AppScreen::Gallery => gallery::handle_gallery_input(app, key),
        AppScreen::AlienDetails => details::handle_details_input(app, key),
        AppScreen::Similarity => similarity::handle_similarity_input(app, key),
        AppScreen::Cluster => cluster::handle_cluster_input(app, key),
        AppScreen::Projection => projection::handle_projection_input(app, key),
    }
}
