use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Frames of the loading animation.
///
pub const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Return a vertically centered spinner paragraph for the given height.
///
pub fn widget(state: &State, height: u16) -> Paragraph<'static> {
    let theme = state.get_theme();
    let frame = FRAMES[*state.get_spinner_index() % FRAMES.len()];
    let mut lines = vec![Line::from(""); (height / 2).saturating_sub(1) as usize];
    lines.push(Line::from(Span::styled(
        format!("{} Loading foods...", frame),
        styling::active_list_item_style(theme),
    )));
    Paragraph::new(lines).alignment(Alignment::Center)
}
