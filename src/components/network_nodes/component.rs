use std::time::Duration;

use leptos::prelude::*;
use log::debug;

use super::state::{ADVANCE_INTERVAL_MS, NetworkState, SPAWN_INTERVAL_MS};
use super::types::Section;

/// Decorative per-section node graph with data particles travelling along
/// its edges. Spawn and advance timers are cancelled on unmount, and the
/// graph is rebuilt whenever the section signal changes.
#[component]
pub fn NetworkNodes(
	#[prop(into)] section: Signal<Section>,
	#[prop(default = true)] visible: bool,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let state = RwSignal::new(NetworkState::new(
		section.get_untracked(),
		js_sys::Date::now() as u64,
	));
	state.update_untracked(|s| s.set_visible(visible));

	Effect::new(move |_| {
		let current = section.get();
		state.update(|s| s.set_section(current));
	});

	// Slow timer: re-measure the container and spawn one particle. Taking a
	// fresh measurement each spawn keeps spawn-time geometry current without
	// a resize listener; in-flight particles keep their frozen targets.
	let spawn_handle = set_interval_with_handle(
		move || {
			if let Some(el) = container_ref.get_untracked() {
				let rect = el.get_bounding_client_rect();
				state.update_untracked(|s| s.resize(rect.width(), rect.height()));
			}
			state.update(|s| s.spawn_particle());
		},
		Duration::from_millis(SPAWN_INTERVAL_MS),
	)
	.ok();

	// Fast timer: advance the whole particle set in one pass. Skipped
	// outright while there is nothing to move.
	let advance_handle = set_interval_with_handle(
		move || {
			if state.with_untracked(|s| s.particles.is_empty()) {
				return;
			}
			state.update(|s| s.advance_particles());
		},
		Duration::from_millis(ADVANCE_INTERVAL_MS),
	)
	.ok();

	on_cleanup(move || {
		if let Some(handle) = spawn_handle {
			handle.clear();
		}
		if let Some(handle) = advance_handle {
			handle.clear();
		}
		debug!("network animator unmounted");
	});

	let edge_lines = move || {
		state.with(|s| {
			s.edges
				.iter()
				.filter_map(|edge| {
					let from = s.node(edge.from)?;
					let to = s.node(edge.to)?;
					Some(view! {
						<line
							class="network-edge"
							x1=format!("{}%", from.x)
							y1=format!("{}%", from.y)
							x2=format!("{}%", to.x)
							y2=format!("{}%", to.y)
							stroke-opacity=format!("{:.2}", edge.weight * 0.6)
						/>
					})
				})
				.collect_view()
		})
	};

	let node_dots = move || {
		state.with(|s| {
			s.nodes
				.iter()
				.map(|node| {
					view! {
						<g class="network-node-group">
							<circle
								class="network-node"
								cx=format!("{}%", node.x)
								cy=format!("{}%", node.y)
								r=node.radius
								fill=node.kind.fill()
							/>
							<text
								class="network-node-label"
								x=format!("{}%", node.x)
								y=format!("{}%", node.y - 6.0)
							>
								{node.label}
							</text>
						</g>
					}
				})
				.collect_view()
		})
	};

	let particle_dots = move || {
		state.with(|s| {
			s.particles
				.iter()
				.map(|particle| {
					let (x, y) = particle.position();
					view! { <circle class="network-particle" cx=x cy=y r="2" /> }
				})
				.collect_view()
		})
	};

	view! {
		<div node_ref=container_ref class="network-nodes" class:visible=visible>
			<svg class="network-svg">{edge_lines} {node_dots} {particle_dots}</svg>
		</div>
	}
}
