use std::time::Duration;

use leptos::prelude::*;

use crate::components::typing::Typist;
use crate::components::{NetworkNodes, Section};
use crate::data;

/// Typing cadence for the hero tagline.
const TYPE_MS: u64 = 40;
/// Ticks a finished tagline stays on screen (~2 s).
const HOLD_TICKS: u32 = 50;

/// Landing section: name, rotating tagline and social links over the hero
/// network graph.
#[component]
pub fn Hero() -> impl IntoView {
	let typist = RwSignal::new(Typist::new(
		data::HERO_PHRASES,
		HOLD_TICKS,
		true,
		js_sys::Date::now() as u64,
	));
	let handle = set_interval_with_handle(
		move || typist.update(|t| t.tick()),
		Duration::from_millis(TYPE_MS),
	)
	.ok();
	on_cleanup(move || {
		if let Some(handle) = handle {
			handle.clear();
		}
	});

	view! {
		<section id="hero" class="section hero">
			<NetworkNodes section=Section::Hero />
			<div class="hero-content">
				<p class="hero-greeting">"Hi there, I'm"</p>
				<h1 class="hero-name">"sudo_kk"</h1>
				<div class="hero-tagline">
					{move || typist.with(|t| t.text())} <span class="cursor">"|"</span>
				</div>
				<div class="hero-socials">
					{data::SOCIALS
						.iter()
						.map(|social| {
							view! {
								<a
									class="hero-social"
									href=social.url
									target="_blank"
									rel="noreferrer"
								>
									{social.name}
								</a>
							}
						})
						.collect_view()}
				</div>
				<a class="hero-cta" href="#projects">
					"See my work"
				</a>
			</div>
		</section>
	}
}
