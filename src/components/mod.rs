pub(crate) mod cert_modal;
mod holo_card;
mod navbar;
mod network_nodes;
mod rng;
mod sections;
mod theme_toggle;
mod typing;
mod welcome;

pub use holo_card::HoloCard;
pub use navbar::Navbar;
pub use network_nodes::{NetworkNodes, Section};
pub use sections::{About, Contact, Hero, Projects, Skills};
pub use theme_toggle::ThemeToggle;
pub use welcome::Welcome;

use leptos::prelude::*;
use leptos_use::{UseWindowSizeReturn, use_window_size};

/// Tilt is meaningless on touch-sized viewports; cards below this width
/// render flat.
pub fn use_tilt_disabled() -> Signal<bool> {
	let UseWindowSizeReturn { width, .. } = use_window_size();
	Signal::derive(move || width.get() <= 768.0)
}
