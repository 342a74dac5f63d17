//! Loading-phrase preamble shown before typing starts.
//!
//! A run picks a few phrases from the pool and scrambles from one to the
//! next, holding each settled phrase for its share of the time budget.
//! A spinner glyph ticks on its own timer while the preamble is active.

use std::time::Duration;

use rand::Rng;
use tracing::debug;

use super::scramble::{PositionStep, Scramble, ScrambleTiming};
use super::{RunId, Wake};
use crate::scheduler::{Scheduler, TaskId};

/// Default loading phrases.
pub const DEFAULT_PHRASES: &[&str] = &[
    "Thinking",
    "Processing",
    "Compiling",
    "Brewing",
    "Crafting",
    "Initializing",
    "Loading",
    "Preparing",
    "Computing",
    "Analyzing",
    "Optimizing",
    "Bootstrapping",
    "Synthesizing",
    "Calibrating",
    "Pondering",
    "Configuring",
];

/// Spinner glyphs, advanced once per spinner period.
pub const SPINNER_FRAMES: &[char] = &[
    '◐', '◓', '◑', '◒', '◆', '◇', '■', '□', '▲', '△', '◉', '◈',
];

/// Preamble settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PreambleConfig {
    /// Pool to draw phrases from
    pub phrases: Vec<String>,
    /// Ceiling on the whole preamble
    pub budget: Duration,
    /// Fewest phrases shown (clamped to the pool size)
    pub min_messages: usize,
    /// Most phrases shown (clamped to the pool size)
    pub max_messages: usize,
    /// Shortest hold of a settled phrase
    pub min_hold: Duration,
    /// Time reserved for each scramble transition
    pub transition_time: Duration,
    pub scramble: ScrambleTiming,
    pub spinner_period: Duration,
}

impl Default for PreambleConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(ToString::to_string).collect(),
            budget: Duration::from_millis(4000),
            min_messages: 2,
            max_messages: 4,
            min_hold: Duration::from_millis(200),
            transition_time: Duration::from_millis(400),
            scramble: ScrambleTiming::default(),
            spinner_period: Duration::from_millis(250),
        }
    }
}

impl PreambleConfig {
    /// Use `phrases` as the pool instead of the defaults.
    pub fn with_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phrases = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// How long each settled phrase is held when `count` phrases are shown.
    pub fn hold_time(&self, count: usize) -> Duration {
        if count == 0 {
            return self.min_hold;
        }
        let slice = self.budget / count as u32;
        slice.saturating_sub(self.transition_time).max(self.min_hold)
    }
}

/// Draw between `min` and `max` phrases without replacement.
pub fn select_phrases<R: Rng + ?Sized>(
    pool: &[String],
    min: usize,
    max: usize,
    rng: &mut R,
) -> Vec<String> {
    let max = max.min(pool.len());
    let min = min.min(max);
    if max == 0 {
        return Vec::new();
    }

    let count = rng.random_range(min..=max);
    let mut available: Vec<&String> = pool.iter().collect();
    let mut selected = Vec::with_capacity(count);
    for _ in 0..count {
        let index = rng.random_range(0..available.len());
        selected.push(available.remove(index).clone());
    }
    selected
}

/// Cosmetic rotating indicator.
#[derive(Debug, Clone, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn glyph(&self) -> char {
        SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()]
    }

    pub fn advance(&mut self) {
        self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
    }
}

/// Result of a held phrase expiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldOutcome {
    /// Scrambling to the next phrase
    NextPhrase,
    /// Every phrase shown; typing may begin
    Finished,
}

/// One preamble run, from the first scramble to the last hold.
#[derive(Debug)]
pub struct Preamble {
    run: RunId,
    phrases: Vec<String>,
    current: usize,
    hold: Duration,
    scramble: Scramble,
    spinner: Spinner,
    position_tasks: Vec<Option<TaskId>>,
    hold_task: Option<TaskId>,
    spinner_task: Option<TaskId>,
    timing: ScrambleTiming,
    spinner_period: Duration,
}

impl Preamble {
    /// Select phrases and schedule the first transition plus the spinner.
    ///
    /// Returns `None` when the pool yields no phrases.
    pub(crate) fn begin<R: Rng + ?Sized>(
        config: &PreambleConfig,
        run: RunId,
        sched: &mut Scheduler<Wake>,
        rng: &mut R,
    ) -> Option<Self> {
        let phrases = select_phrases(
            &config.phrases,
            config.min_messages,
            config.max_messages,
            rng,
        );
        if phrases.is_empty() {
            return None;
        }

        let hold = config.hold_time(phrases.len());
        debug!(?phrases, hold_ms = hold.as_millis() as u64, "preamble selected");

        let mut preamble = Self {
            run,
            scramble: Scramble::new("", &phrases[0], config.scramble),
            phrases,
            current: 0,
            hold,
            spinner: Spinner::default(),
            position_tasks: Vec::new(),
            hold_task: None,
            spinner_task: None,
            timing: config.scramble,
            spinner_period: config.spinner_period,
        };
        preamble.schedule_transition(sched);
        preamble.spinner_task = Some(sched.schedule(preamble.spinner_period, Wake::Spinner(run)));
        Some(preamble)
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Index of the phrase currently scrambling or held.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn hold(&self) -> Duration {
        self.hold
    }

    pub fn text(&self) -> String {
        self.scramble.text()
    }

    pub fn spinner(&self) -> char {
        self.spinner.glyph()
    }

    /// Whether the current transition has settled.
    pub fn is_settled(&self) -> bool {
        self.scramble.is_complete()
    }

    /// Advance the chain of one scramble position.
    pub(crate) fn on_flip<R: Rng + ?Sized>(
        &mut self,
        pos: usize,
        sched: &mut Scheduler<Wake>,
        rng: &mut R,
    ) {
        match self.scramble.step(pos, rng) {
            PositionStep::Flip(delay) => {
                let task = sched.schedule(delay, Wake::Flip(self.run, pos));
                if let Some(slot) = self.position_tasks.get_mut(pos) {
                    *slot = Some(task);
                }
            }
            PositionStep::Settled => {
                if let Some(slot) = self.position_tasks.get_mut(pos) {
                    *slot = None;
                }
                if self.scramble.is_complete() && self.hold_task.is_none() {
                    self.hold_task = Some(sched.schedule(self.hold, Wake::Hold(self.run)));
                }
            }
        }
    }

    /// The held phrase expired: start the next transition or finish.
    pub(crate) fn on_hold(&mut self, sched: &mut Scheduler<Wake>) -> HoldOutcome {
        self.hold_task = None;
        if self.current + 1 >= self.phrases.len() {
            self.cancel(sched);
            return HoldOutcome::Finished;
        }

        let previous = self.scramble.text();
        self.current += 1;
        self.scramble = Scramble::new(&previous, &self.phrases[self.current], self.timing);
        self.schedule_transition(sched);
        HoldOutcome::NextPhrase
    }

    pub(crate) fn on_spinner(&mut self, sched: &mut Scheduler<Wake>) {
        self.spinner.advance();
        self.spinner_task = Some(sched.schedule(self.spinner_period, Wake::Spinner(self.run)));
    }

    /// Cancel every pending position chain, the hold and the spinner.
    pub(crate) fn cancel(&mut self, sched: &mut Scheduler<Wake>) {
        for task in self.position_tasks.drain(..).flatten() {
            sched.cancel(task);
        }
        if let Some(task) = self.hold_task.take() {
            sched.cancel(task);
        }
        if let Some(task) = self.spinner_task.take() {
            sched.cancel(task);
        }
    }

    fn schedule_transition(&mut self, sched: &mut Scheduler<Wake>) {
        let run = self.run;
        self.position_tasks = (0..self.scramble.len())
            .map(|pos| Some(sched.schedule(self.scramble.start_delay(pos), Wake::Flip(run, pos))))
            .collect();
        if self.scramble.is_complete() {
            self.hold_task = Some(sched.schedule(self.hold, Wake::Hold(run)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn pool(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn hold_time_for_two_messages() {
        let config = PreambleConfig::default();
        assert_eq!(config.hold_time(2), Duration::from_millis(1600));
    }

    #[test]
    fn hold_time_never_drops_below_minimum() {
        let config = PreambleConfig {
            budget: Duration::from_millis(1000),
            ..PreambleConfig::default()
        };
        // 1000 / 4 = 250, minus 400 would be negative
        assert_eq!(config.hold_time(4), Duration::from_millis(200));
    }

    #[test]
    fn selection_is_without_replacement() {
        let phrases = pool(&["a", "b", "c", "d", "e"]);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let selected = select_phrases(&phrases, 2, 4, &mut rng);
            assert!((2..=4).contains(&selected.len()));
            let unique: HashSet<_> = selected.iter().collect();
            assert_eq!(unique.len(), selected.len());
            assert!(selected.iter().all(|s| phrases.contains(s)));
        }
    }

    #[test]
    fn selection_clamps_to_pool_size() {
        let phrases = pool(&["only"]);
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(select_phrases(&phrases, 2, 4, &mut rng), vec!["only"]);
        assert!(select_phrases(&[], 2, 4, &mut rng).is_empty());
    }

    #[test]
    fn spinner_wraps_around() {
        let mut spinner = Spinner::default();
        assert_eq!(spinner.glyph(), '◐');
        for _ in 0..SPINNER_FRAMES.len() {
            spinner.advance();
        }
        assert_eq!(spinner.glyph(), '◐');
    }

    #[test]
    fn begin_schedules_positions_and_spinner() {
        let config = PreambleConfig::default().with_phrases(["Loading"]);
        let mut sched = Scheduler::new();
        let mut rng = StdRng::seed_from_u64(9);

        let preamble = Preamble::begin(&config, RunId(1), &mut sched, &mut rng).unwrap();

        assert_eq!(preamble.phrases(), ["Loading"]);
        // 7 positions + spinner
        assert_eq!(sched.pending(), 8);
        assert_eq!(sched.next_deadline(), Some(Duration::ZERO));
    }

    #[test]
    fn begin_with_empty_pool_returns_none() {
        let config = PreambleConfig::default().with_phrases(Vec::<String>::new());
        let mut sched = Scheduler::new();
        let mut rng = StdRng::seed_from_u64(9);
        assert!(Preamble::begin(&config, RunId(1), &mut sched, &mut rng).is_none());
        assert!(sched.is_idle());
    }

    #[test]
    fn cancel_stops_every_chain() {
        let config = PreambleConfig::default().with_phrases(["Thinking", "Brewing"]);
        let mut sched = Scheduler::new();
        let mut rng = StdRng::seed_from_u64(2);
        let mut preamble = Preamble::begin(&config, RunId(3), &mut sched, &mut rng).unwrap();

        preamble.cancel(&mut sched);

        assert!(sched.is_idle());
    }
}
