use leptos::prelude::*;

use crate::components::{NetworkNodes, Section};
use crate::data;

/// Contact placeholder: email and social links over the contact graph.
#[component]
pub fn Contact() -> impl IntoView {
	view! {
		<section id="contact" class="section contact">
			<NetworkNodes section=Section::Contact />
			<h2 class="section-title">"Get In Touch"</h2>
			<p class="contact-blurb">
				"Whether it's a project, a CTF team or just a question about "
				"something I wrote, my inbox is open."
			</p>
			<a class="contact-email" href=format!("mailto:{}", data::CONTACT_EMAIL)>
				{data::CONTACT_EMAIL}
			</a>
			<div class="contact-socials">
				{data::SOCIALS
					.iter()
					.map(|social| {
						view! {
							<a href=social.url target="_blank" rel="noreferrer">
								{social.name}
							</a>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}
