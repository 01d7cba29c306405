use super::*;
use crate::state::State;

const LOG_PANE_HEIGHT: u16 = 8;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let mut constraints = vec![Constraint::Length(3), Constraint::Min(5)];
    if state.is_log_pane_visible() {
        constraints.push(Constraint::Length(LOG_PANE_HEIGHT));
    }
    constraints.push(Constraint::Length(1));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    header(frame, rows[0], state);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);
    food_list(frame, columns[0], state);
    detail(frame, columns[1], state);

    if state.is_log_pane_visible() {
        log(frame, rows[2], state);
    }
    footer(frame, rows[rows.len() - 1], state);

    // Overlays go last so they draw on top.
    let area = frame.size();
    if state.get_modal().is_open() {
        food_form(frame, area, state);
    } else if state.has_delete_confirmation() {
        delete_confirmation(frame, area, state);
    }
}
