use std::time::Duration;

use leptos::prelude::*;

use crate::components::typing::Typist;
use crate::data;

/// Interval between typing ticks on the overlay.
const TYPE_MS: u64 = 120;
/// Ticks a fully typed handle stays on screen (~1.5 s).
const HOLD_TICKS: u32 = 12;
/// The intro dismisses itself after this long.
const AUTO_DISMISS_MS: u64 = 8000;

/// Full-screen intro overlay: a looping typed handle, a skip button and an
/// auto-dismiss timeout. Both timers are cancelled on unmount.
#[component]
pub fn Welcome(#[prop(into)] on_complete: Callback<()>) -> impl IntoView {
	let typist = RwSignal::new(Typist::new(
		data::WELCOME_PHRASES,
		HOLD_TICKS,
		false,
		js_sys::Date::now() as u64,
	));
	let typed = move || typist.with(|t| t.text());

	let type_handle = set_interval_with_handle(
		move || typist.update(|t| t.tick()),
		Duration::from_millis(TYPE_MS),
	)
	.ok();
	let dismiss_handle = set_timeout_with_handle(
		move || on_complete.run(()),
		Duration::from_millis(AUTO_DISMISS_MS),
	)
	.ok();
	on_cleanup(move || {
		if let Some(handle) = type_handle {
			handle.clear();
		}
		if let Some(handle) = dismiss_handle {
			handle.clear();
		}
	});

	view! {
		<div class="welcome-overlay">
			<button class="welcome-skip" on:click=move |_| on_complete.run(())>
				"Skip intro"
			</button>
			<div class="welcome-text">
				<h1>"Welcome"</h1>
				<p>{data::SUBTITLE}</p>
				<div class="welcome-typed">"> " {typed} <span class="cursor">"_"</span></div>
			</div>
		</div>
	}
}
