use log::debug;

use super::types::{NetEdge, NetNode, Particle, Section};
use crate::components::rng::Lcg;

/// Spawn cadence for new particles while visible.
pub const SPAWN_INTERVAL_MS: u64 = 1500;
/// Advance cadence for in-flight particles.
pub const ADVANCE_INTERVAL_MS: u64 = 16;
/// Wall-clock lifetime after which a particle is dropped.
pub const PARTICLE_LIFETIME_MS: f64 = 2000.0;
/// Progress gained per advance tick; progress caps at 1.0.
const PROGRESS_STEP: f64 = 0.02;

/// Owned state of one mounted network animator: the section graph plus the
/// live particle set. All mutation goes through the tick operations so the
/// component shell stays a thin timer wrapper around it.
#[derive(Clone, Debug)]
pub struct NetworkState {
	pub section: Section,
	pub nodes: &'static [NetNode],
	pub edges: Vec<NetEdge>,
	pub particles: Vec<Particle>,
	pub width: f64,
	pub height: f64,
	pub visible: bool,
	rng: Lcg,
	spawned: u64,
}

impl NetworkState {
	pub fn new(section: Section, seed: u64) -> Self {
		let mut rng = Lcg::new(seed);
		let nodes = section.nodes();
		let edges = derive_edges(nodes, &mut rng);
		debug!(
			"network graph for {:?}: {} nodes, {} edges",
			section,
			nodes.len(),
			edges.len()
		);
		Self {
			section,
			nodes,
			edges,
			particles: Vec::new(),
			width: 0.0,
			height: 0.0,
			visible: true,
			rng,
			spawned: 0,
		}
	}

	/// Replace the whole graph when the host switches sections. Nothing from
	/// the previous section survives, including in-flight particles.
	pub fn set_section(&mut self, section: Section) {
		if section == self.section {
			return;
		}
		self.section = section;
		self.nodes = section.nodes();
		self.edges = derive_edges(self.nodes, &mut self.rng);
		self.particles.clear();
	}

	pub fn set_visible(&mut self, visible: bool) {
		self.visible = visible;
	}

	/// Record the last-measured container size. Only future spawns resolve
	/// against it; in-flight particles keep their frozen pixel targets.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn node(&self, id: &str) -> Option<&NetNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Insert one particle on a uniformly chosen edge, endpoints resolved
	/// from percent coordinates and the current container size. No-op while
	/// hidden or when the section has no edges. A zero-sized container still
	/// spawns (everything lands at the origin) and self-corrects once the
	/// next measurement comes in.
	pub fn spawn_particle(&mut self) {
		if !self.visible || self.edges.is_empty() {
			return;
		}
		let pick = self.rng.pick(self.edges.len());
		let edge = &self.edges[pick];
		let (Some(from), Some(to)) = (self.node(edge.from), self.node(edge.to)) else {
			return;
		};
		let origin = (from.x / 100.0 * self.width, from.y / 100.0 * self.height);
		let target = (to.x / 100.0 * self.width, to.y / 100.0 * self.height);
		let edge_key = edge.key();
		self.spawned += 1;
		self.particles.push(Particle {
			id: format!("particle-{}", self.spawned),
			origin,
			target,
			progress: 0.0,
			age_ms: 0.0,
			edge_key,
		});
	}

	/// Advance every live particle exactly once in a single pass, then drop
	/// the ones past their lifetime. Callers skip this tick entirely while
	/// the set is empty.
	pub fn advance_particles(&mut self) {
		for p in &mut self.particles {
			p.progress = (p.progress + PROGRESS_STEP).min(1.0);
			p.age_ms += ADVANCE_INTERVAL_MS as f64;
		}
		let expired: Vec<String> = self
			.particles
			.iter()
			.filter(|p| p.age_ms >= PARTICLE_LIFETIME_MS)
			.map(|p| p.id.clone())
			.collect();
		for id in expired {
			self.expire(&id);
		}
	}

	/// Remove one particle by id.
	pub fn expire(&mut self, id: &str) {
		self.particles.retain(|p| p.id != id);
	}
}

/// One edge per unordered pair referenced by any node's neighbor list.
/// Neighbor ids that do not resolve to a node in the set are skipped.
fn derive_edges(nodes: &[NetNode], rng: &mut Lcg) -> Vec<NetEdge> {
	let mut edges: Vec<NetEdge> = Vec::new();
	for node in nodes {
		for &neighbor in node.neighbors {
			if !nodes.iter().any(|n| n.id == neighbor) {
				continue;
			}
			let seen = edges.iter().any(|e| {
				(e.from == node.id && e.to == neighbor) || (e.from == neighbor && e.to == node.id)
			});
			if !seen {
				edges.push(NetEdge {
					from: node.id,
					to: neighbor,
					weight: 0.5 + rng.next_f64() * 0.5,
				});
			}
		}
	}
	edges
}

#[cfg(test)]
mod tests {
	use super::super::types::NodeKind;
	use super::*;

	fn measured(section: Section) -> NetworkState {
		let mut state = NetworkState::new(section, 1);
		state.resize(200.0, 100.0);
		state
	}

	#[test]
	fn test_edges_unique_per_unordered_pair() {
		for section in Section::ALL {
			let state = NetworkState::new(section, 1);
			for (i, e) in state.edges.iter().enumerate() {
				let dup = state.edges[i + 1..].iter().any(|o| {
					(o.from == e.from && o.to == e.to) || (o.from == e.to && o.to == e.from)
				});
				assert!(!dup, "duplicate pair {}-{} in {:?}", e.from, e.to, section);
			}
		}
	}

	#[test]
	fn test_contact_graph_shape() {
		let state = NetworkState::new(Section::Contact, 1);
		assert_eq!(state.nodes.len(), 3);
		let pairs: Vec<_> = state.edges.iter().map(|e| (e.from, e.to)).collect();
		assert_eq!(pairs, [("github", "linkedin"), ("linkedin", "twitter")]);
	}

	#[test]
	fn test_edge_weights_in_range() {
		for section in Section::ALL {
			for edge in &NetworkState::new(section, 7).edges {
				assert!((0.5..=1.0).contains(&edge.weight), "weight {}", edge.weight);
			}
		}
	}

	#[test]
	fn test_dangling_neighbor_skipped() {
		let nodes: &[NetNode] = &[
			NetNode {
				id: "a",
				x: 10.0,
				y: 10.0,
				kind: NodeKind::Skill,
				label: "A",
				radius: 5.0,
				neighbors: &["b", "ghost"],
			},
			NetNode {
				id: "b",
				x: 90.0,
				y: 90.0,
				kind: NodeKind::Skill,
				label: "B",
				radius: 5.0,
				neighbors: &["a"],
			},
		];
		let edges = derive_edges(nodes, &mut Lcg::new(1));
		assert_eq!(edges.len(), 1);
		assert_eq!((edges[0].from, edges[0].to), ("a", "b"));
	}

	#[test]
	fn test_same_seed_same_graph() {
		let a = NetworkState::new(Section::Hero, 123);
		let b = NetworkState::new(Section::Hero, 123);
		assert_eq!(a.nodes, b.nodes);
		assert_eq!(a.edges, b.edges);
	}

	#[test]
	fn test_spawn_noop_while_hidden() {
		let mut state = measured(Section::Hero);
		state.set_visible(false);
		state.spawn_particle();
		assert!(state.particles.is_empty());
	}

	#[test]
	fn test_spawn_resolves_pixel_endpoints() {
		let mut state = measured(Section::Contact);
		state.spawn_particle();
		let p = &state.particles[0];
		let from = state.node(p.edge_key.split('-').next().unwrap()).unwrap();
		assert_eq!(p.origin, (from.x / 100.0 * 200.0, from.y / 100.0 * 100.0));
		assert_eq!(p.progress, 0.0);
	}

	#[test]
	fn test_zero_size_container_spawns_at_origin() {
		let mut state = NetworkState::new(Section::Contact, 1);
		state.spawn_particle();
		assert_eq!(state.particles[0].origin, (0.0, 0.0));
		assert_eq!(state.particles[0].target, (0.0, 0.0));
	}

	#[test]
	fn test_progress_monotonic_and_capped() {
		let mut state = measured(Section::Skills);
		state.spawn_particle();
		let mut last = 0.0;
		for _ in 0..80 {
			state.advance_particles();
			let Some(p) = state.particles.first() else {
				break;
			};
			assert!(p.progress >= last);
			assert!(p.progress <= 1.0);
			last = p.progress;
		}
	}

	#[test]
	fn test_lifetime_bounds_particle_count() {
		let mut state = measured(Section::Hero);
		let spawn_every = (SPAWN_INTERVAL_MS / ADVANCE_INTERVAL_MS) as usize;
		let cap = (PARTICLE_LIFETIME_MS / SPAWN_INTERVAL_MS as f64).ceil() as usize + 1;
		for tick in 0..2000 {
			if tick % spawn_every == 0 {
				state.spawn_particle();
			}
			state.advance_particles();
			assert!(
				state.particles.len() <= cap,
				"{} particles at tick {tick}",
				state.particles.len()
			);
		}
	}

	#[test]
	fn test_resize_leaves_inflight_particles_alone() {
		let mut state = measured(Section::Contact);
		state.spawn_particle();
		let before = state.particles[0].target;
		state.resize(800.0, 600.0);
		state.advance_particles();
		assert_eq!(state.particles[0].target, before);
	}

	#[test]
	fn test_expire_removes_by_id() {
		let mut state = measured(Section::Hero);
		state.spawn_particle();
		state.spawn_particle();
		let id = state.particles[0].id.clone();
		state.expire(&id);
		assert_eq!(state.particles.len(), 1);
		assert_ne!(state.particles[0].id, id);
	}

	#[test]
	fn test_set_section_replaces_everything() {
		let mut state = measured(Section::Hero);
		state.spawn_particle();
		state.set_section(Section::Contact);
		assert_eq!(state.section, Section::Contact);
		assert_eq!(state.nodes.len(), 3);
		assert!(state.particles.is_empty());
	}
}
