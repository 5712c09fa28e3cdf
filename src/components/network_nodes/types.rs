/// Page region used as the key into the static graph lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
	Hero,
	About,
	Skills,
	Projects,
	Contact,
}

/// Visual category of a node; selects its fill color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	Skill,
	Project,
	Achievement,
	Security,
}

impl NodeKind {
	pub fn fill(self) -> &'static str {
		match self {
			NodeKind::Skill => "var(--color-primary)",
			NodeKind::Project => "#4ecdc4",
			NodeKind::Achievement => "#ffd700",
			NodeKind::Security => "#ff6b6b",
		}
	}
}

/// One node of a section graph. Coordinates are percentages of the host
/// container; `neighbors` reference other ids in the same table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetNode {
	pub id: &'static str,
	pub x: f64,
	pub y: f64,
	pub kind: NodeKind,
	pub label: &'static str,
	pub radius: f64,
	pub neighbors: &'static [&'static str],
}

/// Derived edge between two nodes; at most one per unordered pair.
#[derive(Clone, Debug, PartialEq)]
pub struct NetEdge {
	pub from: &'static str,
	pub to: &'static str,
	pub weight: f64,
}

impl NetEdge {
	pub fn key(&self) -> String {
		format!("{}-{}", self.from, self.to)
	}
}

/// Short-lived marker travelling along one edge. Endpoint pixels are frozen
/// at spawn time; a mid-flight container resize does not move them.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub id: String,
	pub origin: (f64, f64),
	pub target: (f64, f64),
	pub progress: f64,
	pub age_ms: f64,
	pub edge_key: String,
}

impl Particle {
	/// Linear blend between origin and target at the current progress.
	pub fn position(&self) -> (f64, f64) {
		(
			self.origin.0 + (self.target.0 - self.origin.0) * self.progress,
			self.origin.1 + (self.target.1 - self.origin.1) * self.progress,
		)
	}
}
