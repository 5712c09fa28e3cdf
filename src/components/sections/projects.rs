use leptos::prelude::*;

use crate::components::{HoloCard, NetworkNodes, Section, use_tilt_disabled};
use crate::data;

/// Projects showcase: a card per work, linking to its detail page.
#[component]
pub fn Projects() -> impl IntoView {
	let disable_tilt = use_tilt_disabled();

	view! {
		<section id="projects" class="section projects">
			<NetworkNodes section=Section::Projects />
			<h2 class="section-title">"Projects"</h2>
			<div class="projects-grid">
				{data::WORKS
					.iter()
					.map(|work| {
						view! {
							<a class="project-link" href=format!("/project/{}", work.slug)>
								<HoloCard disable_tilt=disable_tilt>
									<h3>{work.title}</h3>
									<p class="project-category">{work.category}</p>
									<p class="project-description">{work.description}</p>
									<div class="project-tags">
										{work
											.tags
											.iter()
											.map(|tag| view! { <span class="tag">{*tag}</span> })
											.collect_view()}
									</div>
									{work.featured.then(|| view! { <span class="featured">"featured"</span> })}
								</HoloCard>
							</a>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}
