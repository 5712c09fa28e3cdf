use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::{HoloCard, Navbar, NetworkNodes, Section, ThemeToggle, use_tilt_disabled};
use crate::data;
use crate::pages::not_found::NotFound;

/// Single project page, addressed by slug; unknown slugs fall through to
/// the 404 view.
#[component]
pub fn ProjectDetail() -> impl IntoView {
	let params = use_params_map();
	let disable_tilt = use_tilt_disabled();
	let work = move || {
		params.with(|p| p.get("slug").and_then(|slug| data::work_by_slug(&slug)))
	};

	view! {
		<Navbar />
		<ThemeToggle />
		{move || match work() {
			Some(work) => {
				Either::Left(
					view! {
						<section class="section project-detail">
							<NetworkNodes section=Section::Projects />
							<div class="project-detail-card">
								<HoloCard disable_tilt=disable_tilt>
									<h1>{work.title}</h1>
									<p class="project-category">{work.category}</p>
									<p>{work.description}</p>
									<div class="project-tags">
										{work
											.tags
											.iter()
											.map(|tag| view! { <span class="tag">{*tag}</span> })
											.collect_view()}
									</div>
									<div class="project-links">
										{work
											.live_url
											.map(|url| {
												view! {
													<a href=url target="_blank" rel="noreferrer">
														"Live"
													</a>
												}
											})}
										{work
											.github_url
											.map(|url| {
												view! {
													<a href=url target="_blank" rel="noreferrer">
														"Source"
													</a>
												}
											})}
									</div>
								</HoloCard>
							</div>
						</section>
					},
				)
			}
			None => Either::Right(view! { <NotFound /> }),
		}}
	}
}
