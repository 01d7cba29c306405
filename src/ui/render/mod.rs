mod all;
mod confirm;
mod detail;
mod food_form;
mod food_list;
mod footer;
mod header;
mod log;

use self::log::log;
use super::*;
use confirm::delete_confirmation;
use detail::detail;
use food_form::food_form;
use food_list::food_list;
use footer::footer;
use header::header;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub use all::all as render;

/// Return a rectangle centered in `r` taking the given percentages of it.
///
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
