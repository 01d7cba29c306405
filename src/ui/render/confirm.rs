use super::{centered_rect, Frame};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the delete confirmation dialog.
///
pub fn delete_confirmation(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let name = match state.get_delete_confirmation_food() {
        Some(food) => food.name.clone(),
        None => return,
    };

    let area = centered_rect(40, 20, size);
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::warning_style(theme))
        .title("Delete food");
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Delete ", styling::normal_text_style(theme)),
            Span::styled(name, styling::active_list_item_style(theme)),
            Span::styled("?", styling::normal_text_style(theme)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "y/enter: delete  n/esc: keep",
            styling::muted_text_style(theme),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}
