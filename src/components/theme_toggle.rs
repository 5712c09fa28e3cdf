use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::theme::ThemeContext;

/// Pull distance (px) required for a release to fire the toggle.
const TOGGLE_THRESHOLD: f64 = 30.0;
/// Distance at which the feedback text starts encouraging the pull.
const FEEDBACK_THRESHOLD: f64 = 15.0;
/// Resting position of the cord knob inside the bulb scene viewBox.
const KNOB_REST: (f64, f64) = (30.0, 70.0);

/// Cord-pull gesture: armed on press, travelled distance on release decides
/// whether the toggle fires. Leaving the surface cancels the gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TugState {
	active: bool,
	start: (f64, f64),
	current: (f64, f64),
}

impl TugState {
	pub fn press(&mut self, x: f64, y: f64) {
		self.active = true;
		self.start = (x, y);
		self.current = (x, y);
	}

	pub fn drag(&mut self, x: f64, y: f64) {
		if self.active {
			self.current = (x, y);
		}
	}

	/// Straight-line distance pulled so far; zero while idle.
	pub fn distance(&self) -> f64 {
		if !self.active {
			return 0.0;
		}
		let (dx, dy) = (self.current.0 - self.start.0, self.current.1 - self.start.1);
		(dx * dx + dy * dy).sqrt()
	}

	/// End the gesture; true when the cord was pulled far enough.
	pub fn release(&mut self) -> bool {
		let fired = self.distance() > TOGGLE_THRESHOLD;
		*self = Self::default();
		fired
	}

	/// Abandon the gesture without firing.
	pub fn cancel(&mut self) {
		*self = Self::default();
	}

	pub fn is_active(&self) -> bool {
		self.active
	}

	/// Cord-knob offset from rest, clamped so the cord stays in the scene.
	pub fn knob_offset(&self) -> (f64, f64) {
		if !self.active {
			return (0.0, 0.0);
		}
		(
			(self.current.0 - self.start.0).clamp(-20.0, 20.0),
			(self.current.1 - self.start.1).clamp(-10.0, 35.0),
		)
	}

	pub fn feedback(&self) -> Option<&'static str> {
		let d = self.distance();
		if d > TOGGLE_THRESHOLD {
			Some("Ready to toggle!")
		} else if d > FEEDBACK_THRESHOLD {
			Some("Keep pulling...")
		} else {
			None
		}
	}
}

/// Draggable light-bulb theme switch, fixed to the top corner of the page.
/// Pulling the cord past the threshold swaps the palette.
#[component]
pub fn ThemeToggle() -> impl IntoView {
	let theme = ThemeContext::use_context();
	let tug = RwSignal::new(TugState::default());

	let on_mousedown = move |ev: MouseEvent| {
		ev.prevent_default();
		tug.update(|t| t.press(ev.client_x() as f64, ev.client_y() as f64));
	};
	let on_mousemove = move |ev: MouseEvent| {
		if tug.with_untracked(|t| t.is_active()) {
			tug.update(|t| t.drag(ev.client_x() as f64, ev.client_y() as f64));
		}
	};
	let on_mouseup = move |_: MouseEvent| {
		let mut fired = false;
		tug.update(|t| fired = t.release());
		if fired {
			theme.toggle();
		}
	};
	let on_mouseleave = move |_: MouseEvent| {
		if tug.with_untracked(|t| t.is_active()) {
			tug.update(|t| t.cancel());
		}
	};

	let knob = move || {
		let (dx, dy) = tug.with(|t| t.knob_offset());
		(KNOB_REST.0 + dx, KNOB_REST.1 + dy)
	};

	view! {
		<div
			class="theme-toggle"
			class:dragging=move || tug.with(|t| t.is_active())
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
		>
			<svg viewBox="0 0 60 110" class="bulb-scene" class:lit=move || !theme.is_dark()>
				<circle class="bulb-glass" cx="30" cy="22" r="16" />
				<path class="bulb-filament" d="M26 30 L30 22 L34 30" fill="none" />
				<rect class="bulb-cap" x="22" y="36" width="16" height="10" rx="2" />
				<line
					class="bulb-cord"
					x1="30"
					y1="46"
					x2=move || knob().0
					y2=move || knob().1
				/>
				<circle
					class="bulb-knob"
					cx=move || knob().0
					cy=move || knob().1
					r="6"
					on:mousedown=on_mousedown
				/>
			</svg>
			{move || {
				tug.with(|t| t.feedback())
					.map(|msg| view! { <span class="tug-feedback">{msg}</span> })
			}}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_short_pull_does_not_fire() {
		let mut tug = TugState::default();
		tug.press(100.0, 100.0);
		tug.drag(110.0, 110.0);
		assert!(tug.distance() < TOGGLE_THRESHOLD);
		assert!(!tug.release());
		assert_eq!(tug, TugState::default());
	}

	#[test]
	fn test_long_pull_fires_on_release() {
		let mut tug = TugState::default();
		tug.press(100.0, 100.0);
		tug.drag(100.0, 140.0);
		assert_eq!(tug.distance(), 40.0);
		assert!(tug.release());
	}

	#[test]
	fn test_cancel_never_fires() {
		let mut tug = TugState::default();
		tug.press(0.0, 0.0);
		tug.drag(0.0, 200.0);
		tug.cancel();
		assert!(!tug.release());
	}

	#[test]
	fn test_drag_ignored_while_idle() {
		let mut tug = TugState::default();
		tug.drag(50.0, 50.0);
		assert_eq!(tug.distance(), 0.0);
		assert!(!tug.is_active());
	}

	#[test]
	fn test_feedback_stages() {
		let mut tug = TugState::default();
		tug.press(0.0, 0.0);
		assert_eq!(tug.feedback(), None);
		tug.drag(0.0, 20.0);
		assert_eq!(tug.feedback(), Some("Keep pulling..."));
		tug.drag(0.0, 45.0);
		assert_eq!(tug.feedback(), Some("Ready to toggle!"));
	}
}
