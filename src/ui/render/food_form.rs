use super::{centered_rect, Frame};
use crate::state::{FormField, Modal, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the add or edit modal on top of the dashboard.
///
pub fn food_form(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let (title, form) = match state.get_modal() {
        Modal::Add(form) => ("Add food".to_string(), form),
        Modal::Edit { target, form } => (format!("Edit food #{}", target), form),
        Modal::Closed => return,
    };

    let area = centered_rect(60, 70, size);
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .title(Span::styled(title, styling::active_block_title_style()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = FormField::ALL
        .iter()
        .map(|_| Constraint::Length(3))
        .collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (index, field) in FormField::ALL.iter().enumerate() {
        let focused = form.focus() == *field;
        let border_style = if focused {
            styling::active_block_border_style(theme)
        } else {
            styling::normal_block_border_style(theme)
        };
        let mut value = form.value(*field).to_string();
        if focused {
            value.push('▏');
        }
        let input = Paragraph::new(Span::styled(value, styling::normal_text_style(theme))).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(field.label()),
        );
        frame.render_widget(input, rows[index]);
    }

    let error_row = rows[FormField::ALL.len()];
    if let Some(error) = form.error() {
        let line = Line::from(Span::styled(error.to_string(), styling::error_text_style(theme)));
        frame.render_widget(Paragraph::new(line), error_row);
    }
}
