//! Staggered character-scramble transition between two strings.
//!
//! Each position runs its own chain: wait `pos × stagger`, flicker through a
//! few random printable characters, then settle on the target character.
//! The transition is complete once every position has settled.

use std::time::Duration;

use rand::Rng;

/// Timing of a scramble transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrambleTiming {
    /// Delay between the start of consecutive positions
    pub stagger: Duration,
    /// Time between random characters at one position
    pub flip_interval: Duration,
    /// Random characters shown before a position settles
    pub flips: u32,
}

impl Default for ScrambleTiming {
    fn default() -> Self {
        let flip_duration = Duration::from_millis(150);
        let flip_interval = Duration::from_millis(30);
        Self {
            stagger: Duration::from_millis(25),
            flip_interval,
            flips: (flip_duration.as_millis() / flip_interval.as_millis()) as u32,
        }
    }
}

impl ScrambleTiming {
    /// Wall time from the start of the transition until `len` positions settle.
    pub fn total(&self, len: usize) -> Duration {
        if len == 0 {
            return Duration::ZERO;
        }
        self.stagger * (len as u32 - 1) + self.flip_interval * self.flips
    }
}

/// What a position's chain does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionStep {
    /// Showed a random character; flip again after the delay
    Flip(Duration),
    /// Position holds its final character
    Settled,
}

#[derive(Debug, Clone)]
struct Slot {
    shown: Option<char>,
    target: Option<char>,
    flips_left: u32,
    settled: bool,
}

/// In-flight transition from one string to another.
#[derive(Debug, Clone)]
pub struct Scramble {
    slots: Vec<Slot>,
    settled: usize,
    timing: ScrambleTiming,
}

impl Scramble {
    pub fn new(old: &str, new: &str, timing: ScrambleTiming) -> Self {
        let old: Vec<char> = old.chars().collect();
        let new: Vec<char> = new.chars().collect();
        let len = old.len().max(new.len());

        let slots = (0..len)
            .map(|i| Slot {
                shown: old.get(i).copied(),
                target: new.get(i).copied(),
                flips_left: timing.flips,
                settled: false,
            })
            .collect();

        Self {
            slots,
            settled: 0,
            timing,
        }
    }

    /// Number of animated positions (`max(len(old), len(new))`).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Delay before position `pos` starts flickering.
    pub fn start_delay(&self, pos: usize) -> Duration {
        self.timing.stagger * pos as u32
    }

    /// Advance the chain of position `pos` by one step.
    ///
    /// A settled position stays settled; repeated calls do not count it twice.
    pub fn step<R: Rng + ?Sized>(&mut self, pos: usize, rng: &mut R) -> PositionStep {
        let Some(slot) = self.slots.get_mut(pos) else {
            return PositionStep::Settled;
        };
        if slot.settled {
            return PositionStep::Settled;
        }

        if slot.flips_left > 0 {
            slot.flips_left -= 1;
            slot.shown = Some(random_printable(rng));
            PositionStep::Flip(self.timing.flip_interval)
        } else {
            slot.shown = slot.target;
            slot.settled = true;
            self.settled += 1;
            PositionStep::Settled
        }
    }

    pub fn is_complete(&self) -> bool {
        self.settled == self.slots.len()
    }

    /// Text currently displayed; blank positions collapse.
    pub fn text(&self) -> String {
        self.slots.iter().filter_map(|slot| slot.shown).collect()
    }
}

/// A random printable ASCII character (`!` through `~`).
fn random_printable<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(rng.random_range(33u8..127))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Run every position chain to completion in deadline order.
    fn run_to_end(scramble: &mut Scramble, rng: &mut StdRng) -> Vec<String> {
        let mut frames = Vec::new();
        let mut due: Vec<(Duration, usize)> = (0..scramble.len())
            .map(|pos| (scramble.start_delay(pos), pos))
            .collect();

        while !due.is_empty() {
            due.sort();
            let (at, pos) = due.remove(0);
            if let PositionStep::Flip(delay) = scramble.step(pos, rng) {
                due.push((at + delay, pos));
            }
            frames.push(scramble.text());
        }
        frames
    }

    #[test]
    fn default_timing_matches_flip_budget() {
        let timing = ScrambleTiming::default();
        assert_eq!(timing.flips, 5);
        assert_eq!(timing.stagger, Duration::from_millis(25));
        assert_eq!(timing.total(7), Duration::from_millis(6 * 25 + 150));
        assert_eq!(timing.total(0), Duration::ZERO);
    }

    #[test]
    fn empty_to_word_settles_exactly() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut scramble = Scramble::new("", "Loading", ScrambleTiming::default());
        assert_eq!(scramble.text(), "");

        let frames = run_to_end(&mut scramble, &mut rng);

        assert!(scramble.is_complete());
        assert_eq!(scramble.text(), "Loading");
        assert_eq!(frames.last().map(String::as_str), Some("Loading"));
    }

    #[test]
    fn longer_old_text_shrinks_to_new() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut scramble = Scramble::new("Bootstrapping", "Brewing", ScrambleTiming::default());
        assert_eq!(scramble.len(), 13);
        assert_eq!(scramble.text(), "Bootstrapping");

        run_to_end(&mut scramble, &mut rng);

        assert_eq!(scramble.text(), "Brewing");
    }

    #[test]
    fn positions_beyond_old_text_start_blank() {
        let scramble = Scramble::new("ab", "abcdef", ScrambleTiming::default());
        assert_eq!(scramble.text(), "ab");
        assert_eq!(scramble.len(), 6);
    }

    #[test]
    fn flips_show_printable_characters() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut scramble = Scramble::new("", "x", ScrambleTiming::default());

        for _ in 0..5 {
            assert_eq!(
                scramble.step(0, &mut rng),
                PositionStep::Flip(Duration::from_millis(30))
            );
            let shown = scramble.text().chars().next().unwrap();
            assert!(('!'..='~').contains(&shown));
        }
        assert_eq!(scramble.step(0, &mut rng), PositionStep::Settled);
        assert_eq!(scramble.text(), "x");
    }

    #[test]
    fn settling_twice_counts_once() {
        let timing = ScrambleTiming {
            flips: 0,
            ..ScrambleTiming::default()
        };
        let mut rng = StdRng::seed_from_u64(4);
        let mut scramble = Scramble::new("", "ab", timing);

        assert_eq!(scramble.step(0, &mut rng), PositionStep::Settled);
        assert_eq!(scramble.step(0, &mut rng), PositionStep::Settled);
        assert!(!scramble.is_complete());
        scramble.step(1, &mut rng);
        assert!(scramble.is_complete());
    }

    #[test]
    fn empty_transition_is_complete_immediately() {
        let scramble = Scramble::new("", "", ScrambleTiming::default());
        assert!(scramble.is_empty());
        assert!(scramble.is_complete());
    }

    #[test]
    fn stagger_delays_grow_with_position() {
        let scramble = Scramble::new("", "abc", ScrambleTiming::default());
        assert_eq!(scramble.start_delay(0), Duration::ZERO);
        assert_eq!(scramble.start_delay(2), Duration::from_millis(50));
    }
}
