//! Static portfolio content: works, skills, socials and typing phrases.
//! Pure data tables, no logic.

pub struct Work {
	pub title: &'static str,
	pub description: &'static str,
	pub tags: &'static [&'static str],
	pub slug: &'static str,
	pub category: &'static str,
	pub featured: bool,
	pub live_url: Option<&'static str>,
	pub github_url: Option<&'static str>,
}

pub struct Skill {
	pub name: &'static str,
	pub level: u8,
}

pub struct Social {
	pub name: &'static str,
	pub url: &'static str,
}

pub struct Certification {
	pub image: &'static str,
	pub title: &'static str,
}

pub const SUBTITLE: &str = "Turning ideas into interactive experiences";

pub const WORKS: &[Work] = &[
	Work {
		title: "Plant Disease Identification",
		description: "AI-powered plant disease identification web application, featuring \
			Gemini image recognition for real-time plant disease analysis and detection.",
		tags: &["FlutterFlow", "Google Gemini AI"],
		slug: "plant-disease-detection",
		category: "ai",
		featured: true,
		live_url: Some("https://plant-disease-app.flutterflow.app"),
		github_url: None,
	},
	Work {
		title: "Packet Lens",
		description: "Lightweight network traffic inspector that captures live packets, \
			flags suspicious flows and renders per-protocol breakdowns.",
		tags: &["Rust", "Networking", "Security"],
		slug: "packet-lens",
		category: "cybersecurity",
		featured: true,
		live_url: None,
		github_url: Some("https://github.com/sudo-kk/packet-lens"),
	},
	Work {
		title: "Holographic Portfolio",
		description: "This site: a WASM single-page portfolio with pointer-tracked 3D \
			cards and animated network graphs in every section.",
		tags: &["Rust", "Leptos", "WASM"],
		slug: "holographic-portfolio",
		category: "web",
		featured: false,
		live_url: Some("https://karthik.is-a.dev"),
		github_url: Some("https://github.com/sudo-kk/holo-portfolio"),
	},
];

pub const SKILLS: &[Skill] = &[
	Skill { name: "Frontend Development", level: 100 },
	Skill { name: "UI/UX Design", level: 100 },
	Skill { name: "Backend Development", level: 100 },
	Skill { name: "Mobile Development", level: 100 },
];

pub const SOCIALS: &[Social] = &[
	Social { name: "GitHub", url: "https://github.com/sudo-kk" },
	Social { name: "LinkedIn", url: "https://www.linkedin.com/in/karthik-v-k-b38170335" },
	Social { name: "X", url: "https://x.com/sudo__kk" },
	Social { name: "Instagram", url: "https://instagram.com/sudo_kk" },
];

pub const CONTACT_EMAIL: &str = "hello@karthik.is-a.dev";

/// Certificate scans shown in the About gallery; images live in the site
/// root next to `index.html`.
pub const CERTIFICATIONS: &[Certification] = &[Certification {
	image: "/cert1.jpg",
	title: "Certification 1",
}];

/// Rotating hero taglines; mostly security trivia, picked at random.
pub const HERO_PHRASES: &[&str] = &[
	"Turning ideas into interactive experiences",
	"Did you know? 95% of cybersecurity breaches are due to human error",
	"The term 'bug' originated from an actual moth in a computer",
	"The average cost of a data breach is $3.86 million",
	"There's a new cyber attack every 39 seconds",
	"Phishing tricks people into revealing sensitive personal information",
	"Strong passwords and 2FA improve online account security",
	"Software updates fix security flaws to block threats",
	"Ransomware locks data, demanding payment for decryption keys",
	"Did you know 90% of cyberattacks start with phishing?",
];

/// Handles typed out on the welcome overlay, in order.
pub const WELCOME_PHRASES: &[&str] = &[
	"karthik.is-a.dev",
	"sudo_kk.portfolio",
	"cybersecurity.expert",
	"fullstack.developer",
];

/// Look up one work record by its route slug.
pub fn work_by_slug(slug: &str) -> Option<&'static Work> {
	WORKS.iter().find(|w| w.slug == slug)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_slugs_are_unique_and_resolvable() {
		for (i, work) in WORKS.iter().enumerate() {
			let found = work_by_slug(work.slug).expect("slug should resolve");
			assert_eq!(found.title, work.title);
			assert!(
				!WORKS[i + 1..].iter().any(|other| other.slug == work.slug),
				"duplicate slug {}",
				work.slug
			);
		}
	}

	#[test]
	fn test_unknown_slug_is_none() {
		assert!(work_by_slug("no-such-project").is_none());
	}

	#[test]
	fn test_certifications_have_root_relative_images() {
		assert!(!CERTIFICATIONS.is_empty());
		for cert in CERTIFICATIONS {
			assert!(cert.image.starts_with('/'), "image {}", cert.image);
			assert!(!cert.title.is_empty());
		}
	}
}
