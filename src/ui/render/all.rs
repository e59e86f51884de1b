use super::Frame;
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

/// Render the whole interface according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.size());

    if state.is_debug_mode() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[0]);
        super::main::main(frame, columns[0], state);
        super::log::log(frame, columns[1], state);
    } else {
        super::main::main(frame, chunks[0], state);
    }

    super::footer::footer(frame, chunks[1], state);
}
