//! UI rendering for folio.
//!
//! [`render`] draws the header and the current page. Layout results that
//! the app needs for scrolling (section offsets, scroll limits) are written
//! back into [`App`] during the draw.

mod blog;
mod console;
mod header;
mod home;
pub mod palette;
mod post;
mod text;

pub use blog::EMPTY_LIST_MESSAGE;
pub use home::{layout_home, HomeLayout};
pub use palette::Palette;
pub use text::wrap_text;

use ratatui::{
    layout::{Constraint, Layout},
    widgets::Block,
    Frame,
};

use crate::app::App;
use crate::content::Route;
use header::{render_header, HEADER_HEIGHT};

/// Draw one frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = Palette::for_theme(app.theme.current());
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(1)]).areas(area);
    render_header(frame, header, app, &palette);

    match app.route.clone() {
        Route::Home { .. } => home::render_home(frame, body, app, &palette),
        Route::BlogIndex { .. } => blog::render_blog(frame, body, app, &palette),
        Route::BlogPost { slug } => post::render_post(frame, body, app, &palette, &slug),
    }
}
