use super::Frame;
use crate::state::{LoadStatus, State};
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

const BLOCK_TITLE: &str = "Menu";

/// Render the food list according to state.
///
pub fn food_list(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(&theme))
        .title(BLOCK_TITLE);
    if !state.get_modal().is_open() {
        block = block
            .border_style(styling::active_block_border_style(&theme))
            .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()));
    }

    if state.get_foods().is_empty() {
        let message = match state.get_load_status() {
            LoadStatus::Loading => {
                frame.render_widget(spinner::widget(state, size.height).block(block), size);
                return;
            }
            LoadStatus::Failed(_) => "Could not load foods. Press r to retry.",
            _ => "No foods yet. Press a to add one.",
        };
        let paragraph = Paragraph::new(Span::styled(message, styling::muted_text_style(&theme)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, size);
        return;
    }

    let name_width = (size.width as usize).saturating_sub(18).max(8);
    let items: Vec<ListItem> = state
        .get_foods()
        .iter()
        .map(|food| {
            let marker = if food.available { "●" } else { "○" };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", marker),
                    styling::availability_style(&theme, food.available),
                ),
                Span::styled(
                    format!("{:<width$.width$}", food.name, width = name_width),
                    styling::normal_text_style(&theme),
                ),
                Span::styled(
                    format!(" {:>9}", food.price),
                    styling::muted_text_style(&theme),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(styling::active_list_item_style(&theme))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, size, state.get_foods_list_state());
}
