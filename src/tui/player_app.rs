//! Interactive player
//!
//! Runs the animator against the wall clock: every loop iteration advances
//! virtual time to the real elapsed time, redraws, and waits for input until
//! the next scheduled wake-up.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;
use super::ui::{render_player, PlayerView};
use crate::animator::{Animator, AnimatorConfig, RunMode, SourceText, StartOutcome};
use crate::clipboard::Copy;
use crate::render::Latest;
use crate::theme::Theme;

/// Longest wait between redraws, so the screen stays responsive to resizes.
const MAX_IDLE_WAIT: Duration = Duration::from_millis(100);

/// Factor applied to the per-character delay by one speed key press.
const SPEED_STEP: f64 = 1.25;
const MIN_SPEED_MS: f64 = 5.0;
const MAX_SPEED_MS: f64 = 500.0;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Start,
    TogglePause,
    Reset,
    Copy,
    /// Shorter delays
    Faster,
    /// Longer delays
    Slower,
    Quit,
}

/// Map a key event to a player action.
pub fn action_for(key: KeyEvent) -> Option<PlayerAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'))
            .then_some(PlayerAction::Quit);
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char('s') => Some(PlayerAction::Start),
        KeyCode::Char(' ') | KeyCode::Char('p') => Some(PlayerAction::TogglePause),
        KeyCode::Char('r') | KeyCode::Esc => Some(PlayerAction::Reset),
        KeyCode::Char('c') | KeyCode::Char('y') => Some(PlayerAction::Copy),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(PlayerAction::Faster),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(PlayerAction::Slower),
        KeyCode::Char('q') => Some(PlayerAction::Quit),
        _ => None,
    }
}

/// Appearance of the player window.
#[derive(Debug, Clone)]
pub struct PlayerSettings {
    pub title: String,
    pub language: String,
    pub theme: Theme,
    pub show_line_numbers: bool,
    /// Start typing as soon as the window opens
    pub auto_start: bool,
}

/// Animator plus everything the player shows around it, without a terminal.
pub struct PlayerState {
    animator: Animator<Latest>,
    source: Arc<SourceText>,
    settings: PlayerSettings,
    status: Option<String>,
    copy: Copy,
    quit: bool,
}

impl PlayerState {
    pub fn new(
        source: Arc<SourceText>,
        config: AnimatorConfig,
        settings: PlayerSettings,
    ) -> Result<Self> {
        Self::with_copy(source, config, settings, Copy::new())
    }

    /// Create with a specific clipboard (for testing).
    pub fn with_copy(
        source: Arc<SourceText>,
        config: AnimatorConfig,
        settings: PlayerSettings,
        copy: Copy,
    ) -> Result<Self> {
        let animator = Animator::new(config, Latest::new())?;
        Ok(Self {
            animator,
            source,
            settings,
            status: None,
            copy,
            quit: false,
        })
    }

    pub fn animator(&self) -> &Animator<Latest> {
        &self.animator
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Move virtual time up to `elapsed`.
    pub fn tick(&mut self, elapsed: Duration) {
        self.animator.advance_to(elapsed);
    }

    /// How long the loop may sleep before the next wake-up is due.
    pub fn wait_time(&mut self, elapsed: Duration) -> Duration {
        match self.animator.next_deadline() {
            Some(due) => due.saturating_sub(elapsed).min(MAX_IDLE_WAIT),
            None => MAX_IDLE_WAIT,
        }
    }

    pub fn handle(&mut self, action: PlayerAction) {
        match action {
            PlayerAction::Start => match self.animator.start(&self.source) {
                Ok(StartOutcome::Started) => self.status = None,
                Ok(StartOutcome::Resumed) => self.status = Some("Resumed".to_string()),
                Ok(StartOutcome::AlreadyRunning) => {}
                Err(e) => self.status = Some(e.to_string()),
            },
            PlayerAction::TogglePause => {
                if self.animator.mode() == RunMode::Idle || self.animator.mode() == RunMode::Done {
                    self.handle(PlayerAction::Start);
                } else {
                    self.animator.toggle_pause();
                }
            }
            PlayerAction::Reset => {
                self.animator.reset();
                self.status = None;
            }
            PlayerAction::Copy => {
                let text = self.animator.revealed_text();
                self.status = Some(match self.copy.text(&text) {
                    Ok(result) => result.message(),
                    Err(e) => e.to_string(),
                });
            }
            PlayerAction::Faster => {
                let speed = self.animator.config().speed_ms / SPEED_STEP;
                self.change_speed(speed);
            }
            PlayerAction::Slower => {
                let speed = self.animator.config().speed_ms * SPEED_STEP;
                self.change_speed(speed);
            }
            PlayerAction::Quit => self.quit = true,
        }
    }

    /// Set the per-character delay, clamped to a usable range.
    fn change_speed(&mut self, speed: f64) {
        let speed = speed.clamp(MIN_SPEED_MS, MAX_SPEED_MS);
        self.status = Some(match self.animator.set_speed(speed) {
            Ok(()) => format!("Speed {:.0} ms per character", speed),
            Err(e) => e.to_string(),
        });
    }

    pub fn view(&self) -> PlayerView<'_> {
        PlayerView {
            title: &self.settings.title,
            language: &self.settings.language,
            theme: &self.settings.theme,
            show_line_numbers: self.settings.show_line_numbers,
            snapshot: self.animator.sink().get(),
            mode: self.animator.mode(),
            status: self.status.as_deref(),
        }
    }
}

/// Player application state
pub struct PlayerApp {
    app: App,
    state: PlayerState,
    clock: Instant,
}

impl PlayerApp {
    pub fn new(
        source: Arc<SourceText>,
        config: AnimatorConfig,
        settings: PlayerSettings,
    ) -> Result<Self> {
        let auto_start = settings.auto_start;
        let mut state = PlayerState::new(source, config, settings)?;
        let app = App::new()?;
        if auto_start {
            state.handle(PlayerAction::Start);
        }
        Ok(Self {
            app,
            state,
            clock: Instant::now(),
        })
    }

    /// Run until the user quits. Returns the revealed text.
    #[cfg(not(tarpaulin_include))]
    pub fn run(mut self) -> Result<String> {
        while !self.state.should_quit() {
            let elapsed = self.clock.elapsed();
            self.state.tick(elapsed);

            let view = self.state.view();
            self.app.draw(|frame| render_player(frame, &view))?;

            let wait = self.state.wait_time(self.clock.elapsed());
            if let Some(Event::Key(key)) = self.app.poll_event(wait)? {
                if let Some(action) = action_for(key) {
                    tracing::debug!(?action, "key");
                    self.state.handle(action);
                }
            }
        }
        self.app.restore()?;
        Ok(self.state.animator().revealed_text())
    }
}
