use super::Frame;
use crate::state::{State, Status};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

const DASHBOARD_HINTS: &str =
    "q quit · j/k move · a add · e edit · d delete · space availability · r reload · l log";
const MODAL_HINTS: &str = "tab next · shift+tab previous · enter save · esc cancel";
const CONFIRM_HINTS: &str = "y/enter delete · n/esc keep";

/// Render footer with the status line or key hints for the current mode.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let line = match state.get_status() {
        Some(Status::Error(message)) => Line::from(Span::styled(
            format!(" {} (esc to dismiss)", message),
            styling::error_text_style(theme),
        )),
        Some(Status::Info(message)) => Line::from(Span::styled(
            format!(" {}", message),
            styling::availability_style(theme, true),
        )),
        None => {
            let hints = if state.get_modal().is_open() {
                MODAL_HINTS
            } else if state.has_delete_confirmation() {
                CONFIRM_HINTS
            } else {
                DASHBOARD_HINTS
            };
            Line::from(Span::styled(
                format!(" {}", hints),
                styling::muted_text_style(theme),
            ))
        }
    };
    frame.render_widget(Paragraph::new(line), size);
}
