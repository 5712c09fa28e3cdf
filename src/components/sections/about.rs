use leptos::prelude::*;

use crate::components::cert_modal::{CertModal, CertViewer};
use crate::components::{HoloCard, NetworkNodes, Section, use_tilt_disabled};
use crate::data;

/// About section: a holographic card of profile text plus the certification
/// gallery, over the about graph.
#[component]
pub fn About() -> impl IntoView {
	let disable_tilt = use_tilt_disabled();
	let cert_viewer = RwSignal::new(CertViewer::default());

	view! {
		<section id="about" class="section about">
			<NetworkNodes section=Section::About />
			<h2 class="section-title">"About Me"</h2>
			<div class="about-card">
				<HoloCard disable_tilt=disable_tilt>
					<h3>"Developer & Security Enthusiast"</h3>
					<p>
						"I'm a student who spends most evenings somewhere between a "
						"code editor and a packet capture. I build web and mobile "
						"things for fun, and break them (my own!) to learn how they "
						"fail."
					</p>
					<p>
						"Right now I'm deep into full-stack development and practical "
						"cybersecurity: CTFs, network analysis and the occasional "
						"write-up. If it blinks, routes or hashes, I want to know how "
						"it works."
					</p>
					<ul class="about-facts">
						<li>"Based in Kerala, India"</li>
						<li>"Computer science undergrad"</li>
						<li>"CTF player and write-up hoarder"</li>
					</ul>
					<div class="about-certs">
						<h4>"My Certifications"</h4>
						<div class="cert-grid">
							{data::CERTIFICATIONS
								.iter()
								.map(|cert| {
									view! {
										<img
											class="cert-thumb"
											src=cert.image
											alt=cert.title
											on:click=move |_| {
												cert_viewer.update(|v| v.open(cert.image))
											}
										/>
									}
								})
								.collect_view()}
						</div>
					</div>
				</HoloCard>
			</div>
			<CertModal viewer=cert_viewer />
		</section>
	}
}
