//! Fixed per-section node tables. Same section, same graph, every time.

use super::types::{NetNode, NodeKind, Section};

const HERO: &[NetNode] = &[
	NetNode {
		id: "main",
		x: 50.0,
		y: 50.0,
		kind: NodeKind::Security,
		label: "sudo_kk",
		radius: 8.0,
		neighbors: &["dev", "cyber", "student"],
	},
	NetNode {
		id: "dev",
		x: 20.0,
		y: 30.0,
		kind: NodeKind::Skill,
		label: "Developer",
		radius: 6.0,
		neighbors: &["main", "cyber"],
	},
	NetNode {
		id: "cyber",
		x: 80.0,
		y: 30.0,
		kind: NodeKind::Security,
		label: "Cybersecurity",
		radius: 6.0,
		neighbors: &["main", "dev"],
	},
	NetNode {
		id: "student",
		x: 50.0,
		y: 80.0,
		kind: NodeKind::Achievement,
		label: "Student",
		radius: 5.0,
		neighbors: &["main"],
	},
];

const ABOUT: &[NetNode] = &[
	NetNode {
		id: "profile",
		x: 30.0,
		y: 40.0,
		kind: NodeKind::Achievement,
		label: "Profile",
		radius: 7.0,
		neighbors: &["education", "passion"],
	},
	NetNode {
		id: "education",
		x: 70.0,
		y: 25.0,
		kind: NodeKind::Skill,
		label: "Education",
		radius: 5.0,
		neighbors: &["profile"],
	},
	NetNode {
		id: "passion",
		x: 70.0,
		y: 55.0,
		kind: NodeKind::Project,
		label: "Passion",
		radius: 5.0,
		neighbors: &["profile"],
	},
];

const SKILLS: &[NetNode] = &[
	NetNode {
		id: "frontend",
		x: 25.0,
		y: 30.0,
		kind: NodeKind::Skill,
		label: "Frontend",
		radius: 6.0,
		neighbors: &["backend", "mobile"],
	},
	NetNode {
		id: "backend",
		x: 75.0,
		y: 30.0,
		kind: NodeKind::Skill,
		label: "Backend",
		radius: 6.0,
		neighbors: &["frontend", "security"],
	},
	NetNode {
		id: "mobile",
		x: 25.0,
		y: 70.0,
		kind: NodeKind::Skill,
		label: "Mobile",
		radius: 5.0,
		neighbors: &["frontend"],
	},
	NetNode {
		id: "security",
		x: 75.0,
		y: 70.0,
		kind: NodeKind::Security,
		label: "Security",
		radius: 6.0,
		neighbors: &["backend"],
	},
];

const PROJECTS: &[NetNode] = &[
	NetNode {
		id: "project1",
		x: 30.0,
		y: 25.0,
		kind: NodeKind::Project,
		label: "Project 1",
		radius: 6.0,
		neighbors: &["project2"],
	},
	NetNode {
		id: "project2",
		x: 70.0,
		y: 25.0,
		kind: NodeKind::Project,
		label: "Project 2",
		radius: 6.0,
		neighbors: &["project1", "project3"],
	},
	NetNode {
		id: "project3",
		x: 50.0,
		y: 60.0,
		kind: NodeKind::Project,
		label: "Project 3",
		radius: 6.0,
		neighbors: &["project2"],
	},
];

const CONTACT: &[NetNode] = &[
	NetNode {
		id: "github",
		x: 25.0,
		y: 40.0,
		kind: NodeKind::Skill,
		label: "GitHub",
		radius: 5.0,
		neighbors: &["linkedin"],
	},
	NetNode {
		id: "linkedin",
		x: 75.0,
		y: 40.0,
		kind: NodeKind::Achievement,
		label: "LinkedIn",
		radius: 5.0,
		neighbors: &["github", "twitter"],
	},
	NetNode {
		id: "twitter",
		x: 50.0,
		y: 70.0,
		kind: NodeKind::Project,
		label: "Twitter",
		radius: 5.0,
		neighbors: &["linkedin"],
	},
];

impl Section {
	/// Fixed node table for this section.
	pub fn nodes(self) -> &'static [NetNode] {
		match self {
			Section::Hero => HERO,
			Section::About => ABOUT,
			Section::Skills => SKILLS,
			Section::Projects => PROJECTS,
			Section::Contact => CONTACT,
		}
	}

	pub const ALL: [Section; 5] = [
		Section::Hero,
		Section::About,
		Section::Skills,
		Section::Projects,
		Section::Contact,
	];
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_node_counts_per_section() {
		assert_eq!(Section::Hero.nodes().len(), 4);
		assert_eq!(Section::About.nodes().len(), 3);
		assert_eq!(Section::Skills.nodes().len(), 4);
		assert_eq!(Section::Projects.nodes().len(), 3);
		assert_eq!(Section::Contact.nodes().len(), 3);
	}

	#[test]
	fn test_contact_table_shape() {
		let ids: Vec<_> = Section::Contact.nodes().iter().map(|n| n.id).collect();
		assert_eq!(ids, ["github", "linkedin", "twitter"]);
	}

	#[test]
	fn test_ids_unique_and_neighbors_resolve() {
		for section in Section::ALL {
			let nodes = section.nodes();
			for (i, node) in nodes.iter().enumerate() {
				assert!(
					!nodes[i + 1..].iter().any(|other| other.id == node.id),
					"duplicate id {} in {:?}",
					node.id,
					section
				);
				for neighbor in node.neighbors {
					assert!(
						nodes.iter().any(|n| n.id == *neighbor),
						"dangling neighbor {} in {:?}",
						neighbor,
						section
					);
				}
			}
		}
	}

	#[test]
	fn test_coordinates_are_percentages() {
		for section in Section::ALL {
			for node in section.nodes() {
				assert!((0.0..=100.0).contains(&node.x));
				assert!((0.0..=100.0).contains(&node.y));
				assert!(node.radius > 0.0);
			}
		}
	}
}
