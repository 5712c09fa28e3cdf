/// Seedable linear congruential generator. The animations only need cheap
/// decorative jitter, and a fixed seed keeps tests reproducible.
#[derive(Clone, Copy, Debug)]
pub struct Lcg(u64);

impl Lcg {
	pub fn new(seed: u64) -> Self {
		Self(seed)
	}

	/// Uniform float in `[0, 1)`.
	pub fn next_f64(&mut self) -> f64 {
		self.0 = self.0.wrapping_mul(9301).wrapping_add(49297) % 233280;
		self.0 as f64 / 233280.0
	}

	/// Uniform index in `[0, len)`. `len` must be nonzero.
	pub fn pick(&mut self, len: usize) -> usize {
		debug_assert!(len > 0);
		((self.next_f64() * len as f64) as usize).min(len - 1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_same_seed_same_sequence() {
		let mut a = Lcg::new(42);
		let mut b = Lcg::new(42);
		for _ in 0..100 {
			assert_eq!(a.next_f64(), b.next_f64());
		}
	}

	#[test]
	fn test_values_stay_in_unit_interval() {
		let mut rng = Lcg::new(7);
		for _ in 0..1000 {
			let v = rng.next_f64();
			assert!((0.0..1.0).contains(&v));
		}
	}

	#[test]
	fn test_pick_stays_in_bounds() {
		let mut rng = Lcg::new(99);
		for _ in 0..1000 {
			assert!(rng.pick(3) < 3);
		}
	}
}
