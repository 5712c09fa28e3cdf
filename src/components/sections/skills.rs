use leptos::prelude::*;

use crate::components::{HoloCard, NetworkNodes, Section, use_tilt_disabled};
use crate::data;

/// Skills grid: one tilting card per skill with a level bar.
#[component]
pub fn Skills() -> impl IntoView {
	let disable_tilt = use_tilt_disabled();

	view! {
		<section id="skills" class="section skills">
			<NetworkNodes section=Section::Skills />
			<h2 class="section-title">"Skills"</h2>
			<div class="skills-grid">
				{data::SKILLS
					.iter()
					.map(|skill| {
						view! {
							<HoloCard disable_tilt=disable_tilt>
								<h3 class="skill-name">{skill.name}</h3>
								<div class="skill-bar">
									<div
										class="skill-bar-fill"
										style=format!("width: {}%;", skill.level)
									/>
								</div>
							</HoloCard>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}
