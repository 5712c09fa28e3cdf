use leptos::prelude::*;
use web_sys::MouseEvent;

use super::state::{SurfaceRect, TiltEngine};

/// Holographic card: perspective tilt and a radial highlight follow the
/// pointer; a looping glow sweep runs while hovered. With `disable_tilt`
/// set the card renders flat and skips all pointer work.
#[component]
pub fn HoloCard(
	#[prop(default = 15.0)] max_rotation: f64,
	#[prop(into)] disable_tilt: Signal<bool>,
	children: Children,
) -> impl IntoView {
	let card_ref = NodeRef::<leptos::html::Div>::new();
	let engine = RwSignal::new(TiltEngine::new(max_rotation, false));

	// Rebuild the engine whenever the host crosses the mobile breakpoint;
	// a fresh engine starts back at the rest pose.
	Effect::new(move |_| {
		let disabled = disable_tilt.get();
		engine.set(TiltEngine::new(max_rotation, disabled));
	});

	let on_mousemove = move |ev: MouseEvent| {
		if disable_tilt.get_untracked() {
			return;
		}
		let Some(card) = card_ref.get_untracked() else {
			return;
		};
		let rect = card.get_bounding_client_rect();
		let rect = SurfaceRect {
			left: rect.left(),
			top: rect.top(),
			width: rect.width(),
			height: rect.height(),
		};
		engine.update(|e| e.pointer_move(ev.client_x() as f64, ev.client_y() as f64, rect));
	};
	let on_mouseenter = move |_: MouseEvent| {
		if !disable_tilt.get_untracked() {
			engine.update(|e| e.pointer_enter());
		}
	};
	let on_mouseleave = move |_: MouseEvent| {
		if !disable_tilt.get_untracked() {
			engine.update(|e| e.pointer_leave());
		}
	};

	let card_style = move || {
		let s = engine.with(|e| e.state());
		format!("transform: rotateX({:.3}deg) rotateY({:.3}deg);", s.rotate_x, s.rotate_y)
	};
	let overlay_style = move || {
		let s = engine.with(|e| e.state());
		format!(
			"background: radial-gradient(circle at {:.1}% {:.1}%, \
			 rgba(255, 255, 255, 0.2) 0%, rgba(255, 255, 255, 0.05) 40%, transparent 70%);",
			s.mouse_x, s.mouse_y
		)
	};
	// The drop shadow tilts at half strength, which reads as depth.
	let shadow_style = move || {
		let s = engine.with(|e| e.state());
		format!(
			"transform: rotateX({:.3}deg) rotateY({:.3}deg);",
			s.rotate_x * 0.5,
			s.rotate_y * 0.5
		)
	};
	let hovered = move || engine.with(|e| e.state().hovered);

	view! {
		<div
			node_ref=card_ref
			class="holo-card-container"
			on:mousemove=on_mousemove
			on:mouseenter=on_mouseenter
			on:mouseleave=on_mouseleave
		>
			<div class="holo-card-shadow" class:hovered=hovered style=shadow_style />
			<div
				class="holo-card"
				class:hovered=hovered
				class=("tilt-disabled", move || disable_tilt.get())
				style=card_style
			>
				<div class="holo-card-overlay" class:hovered=hovered style=overlay_style />
				<div class="holo-card-content">{children()}</div>
			</div>
		</div>
	}
}
