use super::Frame;
use crate::state::{LoadStatus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render header widget with title, item count and backend URL.
///
pub fn header(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let count = match state.get_load_status() {
        LoadStatus::Loaded => format!("{} items", state.get_foods().len()),
        LoadStatus::Loading => "loading...".to_string(),
        LoadStatus::Failed(_) => "load failed".to_string(),
        LoadStatus::NotLoaded => "not loaded".to_string(),
    };
    let line = Line::from(vec![
        Span::styled(" Foods ", styling::title_style(theme)),
        Span::styled(format!("· {} ", count), styling::normal_text_style(theme)),
        Span::styled(
            format!("· {}", state.get_api_url()),
            styling::muted_text_style(theme),
        ),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    frame.render_widget(Paragraph::new(line).block(block), size);
}
