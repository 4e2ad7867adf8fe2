// UI module for xenodex_tui
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::{App, AppScreen};
use ratatui::Frame;

pub fn ui(app: &mut App, f: &mut Frame<'_>) {
    if app.show_help {
        let area = f.area();
        screens::help::render_help(f, area);
        return;
    }

    match app.screen {
        AppScreen::Gallery => screens::gallery::render_gallery(app, f),
        AppScreen::AlienDetails => screens::details::render_details(app, f),
        AppScreen::Similarity => screens::similarity::render_similarity(app, f),
        AppScreen::Cluster => screens::cluster::render_cluster(app, f),
        AppScreen::Projection => screens::projection::render_projection(app, f),
    }
}
