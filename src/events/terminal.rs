use crate::state::State;
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(state, key)),
            Event::Tick => {
                state.advance_spinner_index();
                Ok(true)
            }
        }
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    if state.get_modal().is_open() {
        handle_modal_key(state, key);
        return true;
    }

    if state.has_delete_confirmation() {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                state.confirm_delete();
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                state.cancel_delete_confirmation();
            }
            KeyCode::Char('d') => {
                state.delete_selected_food();
            }
            _ => debug!("Skipping processing of terminal event '{:?}'...", key),
        }
        return true;
    }

    match key.code {
        KeyCode::Char('q') => {
            debug!("Received quit request.");
            return false;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.next_food();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.previous_food();
        }
        KeyCode::Char('a') => {
            state.toggle_add_modal();
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            state.begin_edit_selected();
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            state.delete_selected_food();
        }
        KeyCode::Char(' ') => {
            state.toggle_selected_availability();
        }
        KeyCode::Char('r') => {
            info!("Reloading food list...");
            state.load_foods();
        }
        KeyCode::Char('l') => {
            state.toggle_log_pane();
        }
        KeyCode::Esc => {
            state.clear_status();
        }
        _ => debug!("Skipping processing of terminal event '{:?}'...", key),
    }
    true
}

/// Route keys to the open add or edit modal.
///
fn handle_modal_key(state: &mut State, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            if state.get_modal().is_add() {
                state.toggle_add_modal();
            } else {
                state.toggle_edit_modal();
            }
        }
        KeyCode::Enter => {
            state.submit_modal();
        }
        KeyCode::Tab | KeyCode::Down => {
            state.next_form_field();
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.previous_form_field();
        }
        KeyCode::Backspace => {
            state.remove_form_char();
        }
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            state.add_form_char(c);
        }
        _ => debug!("Skipping processing of modal event '{:?}'...", key),
    }
}
