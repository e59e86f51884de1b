use crate::events::network::Event as NetworkEvent;
use crate::state::{FormField, State, View};
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
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            let ready = match event::poll(tick_rate) {
                Ok(ready) => ready,
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            };
            if ready {
                if let Ok(CrosstermEvent::Key(key)) = event::read() {
                    if tx_clone.send(Event::Input(key)).is_err() {
                        break;
                    }
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(Self::handle_key(key, state)),
            Event::Tick => {
                state.advance_spinner_index();
                Ok(true)
            }
        }
    }

    /// Apply a key press to state. Returns false when exit was requested.
    ///
    fn handle_key(key: KeyEvent, state: &mut State) -> bool {
        if key.kind != KeyEventKind::Press {
            return true;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }

        // A pending delete confirmation captures all input until resolved
        if state.delete_confirmation().is_some() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => state.confirm_delete(),
                KeyCode::Char('n') | KeyCode::Esc => state.cancel_delete(),
                _ => {}
            }
            return true;
        }

        match state.current_view().clone() {
            View::Dashboard => Self::handle_dashboard_key(key, state),
            View::Products => Self::handle_products_key(key, state),
            View::CreateProduct | View::EditProduct => Self::handle_form_key(key, state),
        }
    }

    fn handle_dashboard_key(key: KeyEvent, state: &mut State) -> bool {
        match key.code {
            KeyCode::Char('q') => return false,
            KeyCode::Char('p') | KeyCode::Enter => state.navigate_to(View::Products),
            KeyCode::Char('r') => state.dispatch(NetworkEvent::Refresh),
            KeyCode::Char('d') => state.toggle_debug_mode(),
            _ => {}
        }
        true
    }

    fn handle_products_key(key: KeyEvent, state: &mut State) -> bool {
        match key.code {
            KeyCode::Char('q') => return false,
            KeyCode::Char('j') | KeyCode::Down => state.next_product(),
            KeyCode::Char('k') | KeyCode::Up => state.previous_product(),
            KeyCode::Char('n') => state.open_create_form(),
            KeyCode::Char('e') => state.open_edit_form(),
            KeyCode::Char('x') | KeyCode::Delete => state.request_delete_confirmation(),
            KeyCode::Char('r') => state.dispatch(NetworkEvent::Refresh),
            KeyCode::Char('d') => state.toggle_debug_mode(),
            KeyCode::Char('b') | KeyCode::Esc => state.navigate_back(),
            _ => {}
        }
        true
    }

    fn handle_form_key(key: KeyEvent, state: &mut State) -> bool {
        match key.code {
            KeyCode::Esc => {
                state.close_form();
                return true;
            }
            KeyCode::Tab => {
                state.form_mut().next_field();
                return true;
            }
            KeyCode::BackTab => {
                state.form_mut().previous_field();
                return true;
            }
            _ => {}
        }

        // Ctrl+S submits from anywhere in the form
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            Self::submit_form(state);
            return true;
        }

        if state.form().active_field == FormField::Description {
            // The textarea handles its own editing keys, including Enter
            state.form_mut().description.input(key);
            return true;
        }

        match key.code {
            KeyCode::Enter => Self::submit_form(state),
            KeyCode::Backspace => state.form_mut().backspace(),
            KeyCode::Char(c) => state.form_mut().input_char(c),
            _ => {}
        }
        true
    }

    /// Validate the form and dispatch the matching mutation. Validation
    /// failures are surfaced on the form instead of being dispatched.
    ///
    fn submit_form(state: &mut State) {
        let event = match state.editing_product_id() {
            None => state
                .form()
                .to_draft()
                .map(|draft| NetworkEvent::CreateProduct { draft }),
            Some(id) => state
                .form()
                .to_patch()
                .map(|patch| NetworkEvent::UpdateProduct { id, patch }),
        };
        match event {
            Ok(event) => {
                state.dispatch(event);
                state.close_form();
            }
            Err(e) => {
                warn!("Rejected product form: {}", e);
                state.set_form_error(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platzi::Product;
    use fake::{Fake, Faker};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn product(id: i64, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            ..Faker.fake()
        }
    }

    #[test]
    fn quit_key_requests_exit() {
        let mut state = State::default();
        assert!(!Handler::handle_key(press(KeyCode::Char('q')), &mut state));
    }

    #[test]
    fn ctrl_c_requests_exit_everywhere() {
        let mut state = State::default();
        state.navigate_to(View::Products);
        state.open_create_form();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!Handler::handle_key(key, &mut state));
    }

    #[test]
    fn dashboard_opens_products_view() {
        let mut state = State::default();
        assert!(Handler::handle_key(press(KeyCode::Char('p')), &mut state));
        assert_eq!(*state.current_view(), View::Products);
    }

    #[test]
    fn products_view_navigates_selection() {
        let mut state = State::default();
        state.set_products(vec![product(1, "A"), product(2, "B")]);
        state.navigate_to(View::Products);
        Handler::handle_key(press(KeyCode::Char('j')), &mut state);
        assert_eq!(state.selected_product().map(|p| p.id), Some(2));
        Handler::handle_key(press(KeyCode::Char('k')), &mut state);
        assert_eq!(state.selected_product().map(|p| p.id), Some(1));
    }

    #[test]
    fn delete_flow_requires_confirmation() {
        let mut state = State::default();
        state.set_products(vec![product(1, "Target")]);
        state.navigate_to(View::Products);
        Handler::handle_key(press(KeyCode::Char('x')), &mut state);
        assert_eq!(state.delete_confirmation(), Some(1));
        Handler::handle_key(press(KeyCode::Char('n')), &mut state);
        assert!(state.delete_confirmation().is_none());
    }

    #[test]
    fn form_typing_fills_active_field() {
        let mut state = State::default();
        state.navigate_to(View::Products);
        state.open_create_form();
        Handler::handle_key(press(KeyCode::Char('M')), &mut state);
        Handler::handle_key(press(KeyCode::Char('u')), &mut state);
        Handler::handle_key(press(KeyCode::Char('g')), &mut state);
        Handler::handle_key(press(KeyCode::Tab), &mut state);
        Handler::handle_key(press(KeyCode::Char('5')), &mut state);
        assert_eq!(state.form().title, "Mug");
        assert_eq!(state.form().price, "5");
    }

    #[test]
    fn invalid_form_submit_sets_error_and_stays_open() {
        let mut state = State::default();
        state.navigate_to(View::Products);
        state.open_create_form();
        Handler::handle_key(press(KeyCode::Enter), &mut state);
        assert_eq!(*state.current_view(), View::CreateProduct);
        assert!(state.form_error().is_some());
    }

    #[test]
    fn escape_closes_form() {
        let mut state = State::default();
        state.navigate_to(View::Products);
        state.open_create_form();
        Handler::handle_key(press(KeyCode::Esc), &mut state);
        assert_eq!(*state.current_view(), View::Products);
    }
}
