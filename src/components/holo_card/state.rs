/// Measured geometry of the card surface, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceRect {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
}

/// Render-ready tilt tuple emitted to the visual shell: rotation in degrees
/// plus the highlight center as percentages of the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltState {
	pub rotate_x: f64,
	pub rotate_y: f64,
	pub mouse_x: f64,
	pub mouse_y: f64,
	pub hovered: bool,
}

impl TiltState {
	/// Neutral rest pose: no rotation, highlight centered.
	pub const REST: Self = Self {
		rotate_x: 0.0,
		rotate_y: 0.0,
		mouse_x: 50.0,
		mouse_y: 50.0,
		hovered: false,
	};
}

impl Default for TiltState {
	fn default() -> Self {
		Self::REST
	}
}

/// Converts pointer positions over a rectangular surface into a 3D tilt
/// transform and a highlight-gradient position. A disabled engine stays at
/// the rest pose and ignores every event (touch / small-screen hosts).
#[derive(Clone, Copy, Debug)]
pub struct TiltEngine {
	max_rotation: f64,
	disabled: bool,
	state: TiltState,
}

impl TiltEngine {
	pub fn new(max_rotation: f64, disabled: bool) -> Self {
		Self {
			max_rotation,
			disabled,
			state: TiltState::REST,
		}
	}

	pub fn state(&self) -> TiltState {
		self.state
	}

	pub fn pointer_move(&mut self, client_x: f64, client_y: f64, rect: SurfaceRect) {
		if self.disabled || rect.width <= 0.0 || rect.height <= 0.0 {
			// Surface not laid out yet, or tilt is off for this host.
			return;
		}
		let center_x = rect.left + rect.width / 2.0;
		let center_y = rect.top + rect.height / 2.0;
		self.state.mouse_x = (client_x - rect.left) / rect.width * 100.0;
		self.state.mouse_y = (client_y - rect.top) / rect.height * 100.0;
		self.state.rotate_x = (client_y - center_y) / rect.height * -self.max_rotation;
		self.state.rotate_y = (client_x - center_x) / rect.width * self.max_rotation;
	}

	pub fn pointer_enter(&mut self) {
		if !self.disabled {
			self.state.hovered = true;
		}
	}

	pub fn pointer_leave(&mut self) {
		if !self.disabled {
			self.state = TiltState::REST;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const RECT: SurfaceRect = SurfaceRect {
		left: 0.0,
		top: 0.0,
		width: 200.0,
		height: 100.0,
	};

	#[test]
	fn test_starts_at_rest() {
		let engine = TiltEngine::new(15.0, false);
		assert_eq!(engine.state(), TiltState::REST);
	}

	#[test]
	fn test_pointer_move_worked_example() {
		let mut engine = TiltEngine::new(15.0, false);
		engine.pointer_move(150.0, 75.0, RECT);
		let s = engine.state();
		assert_eq!(s.rotate_x, -3.75);
		assert_eq!(s.rotate_y, 3.75);
		assert_eq!(s.mouse_x, 75.0);
		assert_eq!(s.mouse_y, 75.0);
	}

	#[test]
	fn test_rotation_bounded_inside_surface() {
		let mut engine = TiltEngine::new(15.0, false);
		for ix in 0..=20 {
			for iy in 0..=20 {
				let x = RECT.left + RECT.width * ix as f64 / 20.0;
				let y = RECT.top + RECT.height * iy as f64 / 20.0;
				engine.pointer_move(x, y, RECT);
				let s = engine.state();
				assert!(s.rotate_x.abs() <= 15.0, "rotate_x {} at ({x},{y})", s.rotate_x);
				assert!(s.rotate_y.abs() <= 15.0, "rotate_y {} at ({x},{y})", s.rotate_y);
				assert!((0.0..=100.0).contains(&s.mouse_x));
				assert!((0.0..=100.0).contains(&s.mouse_y));
			}
		}
	}

	#[test]
	fn test_leave_resets_to_rest() {
		let mut engine = TiltEngine::new(15.0, false);
		engine.pointer_enter();
		engine.pointer_move(10.0, 10.0, RECT);
		assert!(engine.state().hovered);
		engine.pointer_leave();
		assert_eq!(engine.state(), TiltState::REST);
	}

	#[test]
	fn test_disabled_ignores_all_events() {
		let mut engine = TiltEngine::new(15.0, true);
		engine.pointer_enter();
		engine.pointer_move(150.0, 75.0, RECT);
		assert_eq!(engine.state(), TiltState::REST);
		engine.pointer_leave();
		assert_eq!(engine.state(), TiltState::REST);
	}

	#[test]
	fn test_unmeasured_rect_is_skipped() {
		let mut engine = TiltEngine::new(15.0, false);
		let unmeasured = SurfaceRect {
			left: 0.0,
			top: 0.0,
			width: 0.0,
			height: 0.0,
		};
		engine.pointer_move(40.0, 40.0, unmeasured);
		assert_eq!(engine.state(), TiltState::REST);
	}
}
