//! The typing animator state machine.
//!
//! Every state change goes through [`Animator::apply`], fed either by a
//! caller command (start, pause, resume, reset) or by a scheduler wake-up.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use super::delay::DelayModel;
use super::error::AnimatorError;
use super::preamble::{HoldOutcome, Preamble, PreambleConfig};
use super::state::{revealed_text, RevealState, RevealedLine, RunMode, SourceText};
use super::{RunId, Wake};
use crate::render::{Frame, PreambleView, RenderSink};
use crate::scheduler::{Scheduler, TaskId};

/// Animator settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatorConfig {
    /// Base delay per character in milliseconds
    pub speed_ms: f64,
    /// Loading phrases before typing; `None` skips straight to typing
    pub preamble: Option<PreambleConfig>,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            speed_ms: 40.0,
            preamble: Some(PreambleConfig::default()),
            seed: None,
        }
    }
}

impl AnimatorConfig {
    pub fn without_preamble(speed_ms: f64) -> Self {
        Self {
            speed_ms,
            preamble: None,
            seed: None,
        }
    }
}

/// What a Start request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new run began
    Started,
    /// A paused run continued
    Resumed,
    /// A run is already in progress; nothing changed
    AlreadyRunning,
}

#[derive(Debug)]
enum Input {
    Start(Arc<SourceText>),
    Pause,
    Resume,
    Reset,
    Wake(Wake),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Applied {
    Start(StartOutcome),
    Changed,
    Ignored,
}

/// Replays source text with humanized timing.
#[derive(Debug)]
pub struct Animator<S> {
    config: AnimatorConfig,
    delay: DelayModel,
    rng: StdRng,
    sched: Scheduler<Wake>,
    run: RunId,
    mode: RunMode,
    source: Arc<SourceText>,
    reveal: RevealState,
    lines: Vec<RevealedLine>,
    preamble: Option<Preamble>,
    tick: Option<TaskId>,
    sink: S,
}

impl<S: RenderSink> Animator<S> {
    /// Create an idle animator.
    ///
    /// # Errors
    /// Returns [`AnimatorError::InvalidSpeed`] unless the speed is positive and finite.
    pub fn new(config: AnimatorConfig, sink: S) -> Result<Self, AnimatorError> {
        validate_speed(config.speed_ms)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            delay: DelayModel::new(config.speed_ms),
            config,
            rng,
            sched: Scheduler::new(),
            run: RunId::default(),
            mode: RunMode::Idle,
            source: Arc::new(SourceText::default()),
            reveal: RevealState::default(),
            lines: Vec::new(),
            preamble: None,
            tick: None,
            sink,
        })
    }

    // === Commands ===

    /// Begin a run over `source`, or resume a paused one.
    ///
    /// # Errors
    /// Returns [`AnimatorError::EmptyInput`] without touching state when
    /// `source` has no lines.
    pub fn start(&mut self, source: &Arc<SourceText>) -> Result<StartOutcome, AnimatorError> {
        match self.apply(Input::Start(Arc::clone(source)))? {
            Applied::Start(outcome) => Ok(outcome),
            Applied::Changed | Applied::Ignored => Ok(StartOutcome::AlreadyRunning),
        }
    }

    /// Freeze typing. Only valid while typing; returns whether it paused.
    pub fn pause(&mut self) -> bool {
        self.apply_infallible(Input::Pause)
    }

    /// Continue a paused run. Only valid while paused; returns whether it resumed.
    pub fn resume(&mut self) -> bool {
        self.apply_infallible(Input::Resume)
    }

    /// Pause when typing, resume when paused.
    pub fn toggle_pause(&mut self) -> bool {
        match self.mode {
            RunMode::Typing => self.pause(),
            RunMode::Paused => self.resume(),
            _ => false,
        }
    }

    /// Cancel all pending work and return to `Idle`.
    pub fn reset(&mut self) {
        self.apply_infallible(Input::Reset);
    }

    /// Change the typing speed; applies from the next scheduled delay.
    ///
    /// # Errors
    /// Returns [`AnimatorError::InvalidSpeed`] for non-positive speeds.
    pub fn set_speed(&mut self, speed_ms: f64) -> Result<(), AnimatorError> {
        validate_speed(speed_ms)?;
        self.config.speed_ms = speed_ms;
        self.delay = DelayModel::new(speed_ms);
        Ok(())
    }

    // === Clock ===

    /// Process every wake-up due at or before `now`. Returns how many ran.
    pub fn advance_to(&mut self, now: Duration) -> usize {
        let mut handled = 0;
        while let Some(wake) = self.sched.pop_due(now) {
            self.apply_infallible(Input::Wake(wake));
            handled += 1;
        }
        handled
    }

    /// Jump from deadline to deadline until nothing is scheduled or `max_steps` ran.
    pub fn run_until_idle(&mut self, max_steps: usize) -> usize {
        let mut handled = 0;
        while handled < max_steps {
            let Some(wake) = self.sched.pop_next() else {
                break;
            };
            self.apply_infallible(Input::Wake(wake));
            handled += 1;
        }
        handled
    }

    /// Run exactly one pending wake-up, if any.
    pub fn step(&mut self) -> bool {
        self.run_until_idle(1) == 1
    }

    pub fn now(&self) -> Duration {
        self.sched.now()
    }

    pub fn next_deadline(&mut self) -> Option<Duration> {
        self.sched.next_deadline()
    }

    /// Number of pending scheduled wake-ups.
    pub fn pending(&self) -> usize {
        self.sched.pending()
    }

    // === Accessors ===

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn reveal(&self) -> RevealState {
        self.reveal
    }

    pub fn lines(&self) -> &[RevealedLine] {
        &self.lines
    }

    pub fn revealed_text(&self) -> String {
        revealed_text(&self.lines)
    }

    pub fn source(&self) -> &Arc<SourceText> {
        &self.source
    }

    pub fn preamble(&self) -> Option<&Preamble> {
        self.preamble.as_ref()
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    // === State machine ===

    fn apply_infallible(&mut self, input: Input) -> bool {
        matches!(self.apply(input), Ok(Applied::Changed | Applied::Start(_)))
    }

    /// The only place state changes.
    fn apply(&mut self, input: Input) -> Result<Applied, AnimatorError> {
        let applied = match input {
            Input::Start(source) => self.on_start(source)?,
            Input::Pause => self.on_pause(),
            Input::Resume => self.on_resume(),
            Input::Reset => self.on_reset(),
            Input::Wake(wake) if wake.run() != self.run => {
                trace!(?wake, "dropping wake-up from a previous run");
                Applied::Ignored
            }
            Input::Wake(Wake::Tick(_)) => self.on_tick(),
            Input::Wake(Wake::Flip(_, pos)) => self.on_flip(pos),
            Input::Wake(Wake::Hold(_)) => self.on_hold(),
            Input::Wake(Wake::Spinner(_)) => self.on_spinner(),
        };

        debug_assert!(self.reveal.line_index <= self.source.line_count());
        debug_assert!(self.reveal.char_index <= self.source.line_len(self.reveal.line_index));

        if applied != Applied::Ignored {
            self.emit();
        }
        Ok(applied)
    }

    fn on_start(&mut self, source: Arc<SourceText>) -> Result<Applied, AnimatorError> {
        if source.is_empty() {
            return Err(AnimatorError::EmptyInput);
        }

        match self.mode {
            RunMode::Paused => {
                self.on_resume();
                Ok(Applied::Start(StartOutcome::Resumed))
            }
            RunMode::Preamble | RunMode::Typing => {
                debug!(mode = %self.mode, "start ignored: already running");
                Ok(Applied::Start(StartOutcome::AlreadyRunning))
            }
            RunMode::Idle | RunMode::Done => {
                self.clear();
                self.source = source;
                info!(
                    lines = self.source.line_count(),
                    chars = self.source.char_count(),
                    "animation started"
                );

                let preamble = match &self.config.preamble {
                    Some(config) => Preamble::begin(config, self.run, &mut self.sched, &mut self.rng),
                    None => None,
                };
                match preamble {
                    Some(preamble) => {
                        self.preamble = Some(preamble);
                        self.mode = RunMode::Preamble;
                    }
                    None => self.begin_typing(),
                }
                Ok(Applied::Start(StartOutcome::Started))
            }
        }
    }

    fn on_pause(&mut self) -> Applied {
        if self.mode != RunMode::Typing {
            return Applied::Ignored;
        }
        if let Some(task) = self.tick.take() {
            self.sched.cancel(task);
        }
        self.mode = RunMode::Paused;
        debug!(reveal = ?self.reveal, "paused");
        Applied::Changed
    }

    fn on_resume(&mut self) -> Applied {
        if self.mode != RunMode::Paused {
            return Applied::Ignored;
        }
        self.mode = RunMode::Typing;
        self.schedule_tick(Duration::ZERO);
        debug!(reveal = ?self.reveal, "resumed");
        Applied::Changed
    }

    fn on_reset(&mut self) -> Applied {
        self.clear();
        self.mode = RunMode::Idle;
        debug!("reset");
        Applied::Changed
    }

    fn on_tick(&mut self) -> Applied {
        self.tick = None;
        if self.mode != RunMode::Typing {
            return Applied::Ignored;
        }

        let source = Arc::clone(&self.source);
        let RevealState {
            line_index,
            char_index,
        } = self.reveal;

        let Some(line) = source.line(line_index) else {
            self.mode = RunMode::Done;
            info!(at_ms = self.sched.now().as_millis() as u64, "animation finished");
            return Applied::Changed;
        };

        if char_index == 0 && self.lines.len() == line_index {
            self.lines.push(RevealedLine::new(line_index + 1));
        }
        let Some(record) = self.lines.last_mut() else {
            return Applied::Ignored;
        };

        if let Some(&c) = line.get(char_index) {
            record.content.push(c);
            self.reveal.char_index += 1;
            let next = line.get(char_index + 1).copied();
            let delay = self.delay.char_delay(c, next, &mut self.rng);
            self.schedule_tick(delay);
        } else {
            record.complete = true;
            self.reveal.line_index += 1;
            self.reveal.char_index = 0;
            let delay = self.delay.line_break_delay(&mut self.rng);
            self.schedule_tick(delay);
        }
        Applied::Changed
    }

    fn on_flip(&mut self, pos: usize) -> Applied {
        match (&mut self.preamble, self.mode) {
            (Some(preamble), RunMode::Preamble) => {
                preamble.on_flip(pos, &mut self.sched, &mut self.rng);
                Applied::Changed
            }
            _ => Applied::Ignored,
        }
    }

    fn on_hold(&mut self) -> Applied {
        let Some(preamble) = self.preamble.as_mut() else {
            return Applied::Ignored;
        };
        if self.mode != RunMode::Preamble {
            return Applied::Ignored;
        }

        if preamble.on_hold(&mut self.sched) == HoldOutcome::Finished {
            self.preamble = None;
            self.begin_typing();
        }
        Applied::Changed
    }

    fn on_spinner(&mut self) -> Applied {
        match (&mut self.preamble, self.mode) {
            (Some(preamble), RunMode::Preamble) => {
                preamble.on_spinner(&mut self.sched);
                Applied::Changed
            }
            _ => Applied::Ignored,
        }
    }

    fn begin_typing(&mut self) {
        self.mode = RunMode::Typing;
        self.schedule_tick(Duration::ZERO);
    }

    fn schedule_tick(&mut self, delay: Duration) {
        if let Some(previous) = self.tick.take() {
            self.sched.cancel(previous);
        }
        self.tick = Some(self.sched.schedule(delay, Wake::Tick(self.run)));
    }

    /// Drop all pending work and per-run state, and start a new generation.
    fn clear(&mut self) {
        if let Some(mut preamble) = self.preamble.take() {
            preamble.cancel(&mut self.sched);
        }
        self.sched.cancel_all();
        self.tick = None;
        self.run = self.run.next();
        self.reveal = RevealState::default();
        self.lines.clear();
    }

    fn emit(&mut self) {
        let view = self.preamble.as_ref().map(|preamble| PreambleView {
            spinner: preamble.spinner(),
            text: preamble.text(),
        });
        let frame = Frame {
            at: self.sched.now(),
            mode: self.mode,
            lines: &self.lines,
            preamble: view.as_ref(),
        };
        self.sink.render(&frame);
    }
}

fn validate_speed(speed_ms: f64) -> Result<(), AnimatorError> {
    if speed_ms.is_finite() && speed_ms > 0.0 {
        Ok(())
    } else {
        Err(AnimatorError::InvalidSpeed(speed_ms))
    }
}
