//! View-mode state machine
//!
//! Defines which screen is visible and how button presses move between
//! screens. Whether a press also draws a number is decided by the
//! controller from the mode *before* the transition.

/// Which screen is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Title screen, nothing drawn yet
    #[default]
    Start,
    /// Current number with the history line
    Current,
    /// Grid of every number drawn so far
    All,
}

/// Button events understood by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateEvent {
    /// Primary button
    DrawPressed,
    /// Secondary button
    ShowAllPressed,
}

/// State machine for view transitions
pub struct StateMachine;

impl StateMachine {
    /// Processes a button event and returns the new mode
    ///
    /// # Arguments
    /// * `current` - Mode before the press
    /// * `event` - Button that was pressed
    /// * `has_current_number` - Whether at least one number has been drawn
    pub fn process_event(current: ViewMode, event: StateEvent, has_current_number: bool) -> ViewMode {
        match (current, event) {
            // Draw always lands on the current-number screen, from any mode
            (_, StateEvent::DrawPressed) => ViewMode::Current,

            // Nothing to list before the first draw
            (mode, StateEvent::ShowAllPressed) if !has_current_number => mode,

            (_, StateEvent::ShowAllPressed) => ViewMode::All,
        }
    }

    /// Returns true if a draw press in `mode` may consume a number
    pub fn draw_allowed(mode: ViewMode) -> bool {
        mode != ViewMode::All
    }
}
