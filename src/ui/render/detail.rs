use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render details of the selected food.
///
pub fn detail(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .title("Details");

    let lines = match state.get_selected_food() {
        Some(food) => {
            let field = |label: &str, value: String| {
                Line::from(vec![
                    Span::styled(format!("{:<13}", label), styling::muted_text_style(theme)),
                    Span::styled(value, styling::normal_text_style(theme)),
                ])
            };
            let availability = if food.available {
                Span::styled("Available", styling::availability_style(theme, true))
            } else {
                Span::styled("Unavailable", styling::availability_style(theme, false))
            };
            vec![
                Line::from(Span::styled(
                    food.name.clone(),
                    styling::current_list_item_style(theme),
                )),
                Line::from(""),
                field("Id", food.id.to_string()),
                field("Price", food.price.clone()),
                Line::from(vec![
                    Span::styled(format!("{:<13}", "Status"), styling::muted_text_style(theme)),
                    availability,
                ]),
                field("Image", food.image.clone()),
                Line::from(""),
                Line::from(Span::styled(
                    food.description.clone(),
                    styling::normal_text_style(theme),
                )),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Nothing selected",
            styling::muted_text_style(theme),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, size);
}
