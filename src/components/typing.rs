//! Looping type / hold / delete text animation, shared by the hero tagline
//! and the welcome overlay. Pure state driven by a fixed-interval tick.

use crate::components::rng::Lcg;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
	Typing,
	Holding(u32),
	Deleting,
}

/// Character-by-character phrase animation: grow one char per tick, hold
/// the finished phrase for `hold_ticks`, shrink back, then move on to the
/// next phrase (sequential, or seeded-random without immediate repeats).
/// Phrases must be ASCII.
#[derive(Clone, Copy, Debug)]
pub struct Typist {
	phrases: &'static [&'static str],
	phrase: usize,
	len: usize,
	phase: Phase,
	hold_ticks: u32,
	shuffle: bool,
	rng: Lcg,
}

impl Typist {
	pub fn new(phrases: &'static [&'static str], hold_ticks: u32, shuffle: bool, seed: u64) -> Self {
		debug_assert!(!phrases.is_empty());
		debug_assert!(phrases.iter().all(|p| p.is_ascii()));
		Self {
			phrases,
			phrase: 0,
			len: 0,
			phase: Phase::Typing,
			hold_ticks,
			shuffle,
			rng: Lcg::new(seed),
		}
	}

	/// Currently visible prefix of the active phrase.
	pub fn text(&self) -> &'static str {
		&self.phrases[self.phrase][..self.len]
	}

	/// Advance the animation by one timer tick.
	pub fn tick(&mut self) {
		let current = self.phrases[self.phrase];
		match self.phase {
			Phase::Typing => {
				if self.len < current.len() {
					self.len += 1;
				} else {
					self.phase = Phase::Holding(self.hold_ticks);
				}
			}
			Phase::Holding(0) => self.phase = Phase::Deleting,
			Phase::Holding(left) => self.phase = Phase::Holding(left - 1),
			Phase::Deleting => {
				if self.len > 0 {
					self.len -= 1;
				} else {
					self.phrase = self.next_phrase();
					self.phase = Phase::Typing;
				}
			}
		}
	}

	fn next_phrase(&mut self) -> usize {
		if self.phrases.len() < 2 {
			return self.phrase;
		}
		if !self.shuffle {
			return (self.phrase + 1) % self.phrases.len();
		}
		// Re-roll rather than repeating the phrase we just showed.
		loop {
			let next = self.rng.pick(self.phrases.len());
			if next != self.phrase {
				return next;
			}
		}
	}
}
