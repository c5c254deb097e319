//! Application controller
//!
//! Owns the draw engine and the visible mode, and reacts to the two buttons.
//! One controller exists per session; hosts call its handlers from their
//! event loop, one press at a time.

use tracing::{debug, info};

use crate::app::effects::{Audio, Cue, Screen};
use crate::app::state::{StateEvent, StateMachine, ViewMode};
use crate::config::game::GameConfig;
use crate::domain::{DrawEngine, DrawOutcome, NumberRange, RandomSource};
use crate::input::Button;
use crate::ui::layout::{all_numbers_frame, current_frame, start_frame};

/// Main game controller
pub struct BingoController<S: Screen, A: Audio> {
    engine: DrawEngine,
    /// Numbers eligible for the all-numbers grid
    display_range: NumberRange,
    mode: ViewMode,
    screen: S,
    audio: A,
}

impl<S: Screen, A: Audio> BingoController<S, A> {
    /// Shuffles a new game and shows the title screen
    pub fn new<R: RandomSource + ?Sized>(config: &GameConfig, rng: &mut R, screen: S, audio: A) -> Self {
        let engine = DrawEngine::new(config.draw_range, config.history_len, rng);
        Self::with_engine(engine, config.display_range, screen, audio)
    }

    /// Starts a game on an existing engine and shows the title screen
    pub fn with_engine(engine: DrawEngine, display_range: NumberRange, screen: S, audio: A) -> Self {
        let mut controller = Self {
            engine,
            display_range,
            mode: ViewMode::Start,
            screen,
            audio,
        };

        info!(
            "New game: {}..={} ({} numbers), history of {}",
            controller.engine.range().min(),
            controller.engine.range().max(),
            controller.engine.remaining(),
            controller.engine.history().capacity()
        );
        controller.screen.show(&start_frame());
        controller
    }

    /// Dispatches a button press to its handler
    pub fn handle_button(&mut self, button: Button) {
        match button {
            Button::Primary => self.on_draw_action(),
            Button::Secondary => self.on_show_all_action(),
        }
    }

    /// Primary button: draw the next number, or return from the grid
    ///
    /// In the grid view the press only switches back to the current-number
    /// screen. Once every number is drawn the press replays the screen and
    /// plays the exhausted cue.
    pub fn on_draw_action(&mut self) {
        self.audio.stop_all();

        if StateMachine::draw_allowed(self.mode) {
            match self.engine.draw() {
                DrawOutcome::Drawn(n) => {
                    self.audio.play(Cue::Draw);
                    debug!("Drew {} ({} left)", n, self.engine.remaining());
                    if self.engine.is_exhausted() {
                        info!("All numbers drawn");
                    }
                }
                DrawOutcome::Exhausted => {
                    self.audio.play(Cue::Exhausted);
                    debug!("Draw pressed with no numbers left");
                }
            }
        }

        self.screen
            .show(&current_frame(self.engine.current(), self.engine.history()));
        self.transition(StateEvent::DrawPressed);
    }

    /// Secondary button: list every number drawn so far
    ///
    /// Ignored until the first number has been drawn.
    pub fn on_show_all_action(&mut self) {
        self.transition(StateEvent::ShowAllPressed);

        if self.mode == ViewMode::All {
            self.screen
                .show(&all_numbers_frame(self.engine.shown(), self.display_range));
        }
    }

    fn transition(&mut self, event: StateEvent) {
        let next = StateMachine::process_event(self.mode, event, self.engine.current().is_some());
        if next != self.mode {
            debug!("View {:?} -> {:?}", self.mode, next);
        }
        self.mode = next;
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn engine(&self) -> &DrawEngine {
        &self.engine
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}
