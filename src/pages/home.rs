use leptos::prelude::*;

use crate::components::{About, Contact, Hero, Navbar, Projects, Skills, ThemeToggle, Welcome};

/// Default Home Page: welcome overlay on first paint, then the section
/// stack.
#[component]
pub fn Home() -> impl IntoView {
	let (show_welcome, set_show_welcome) = signal(true);

	view! {
		{move || {
			show_welcome
				.get()
				.then(|| view! { <Welcome on_complete=move |_| set_show_welcome.set(false) /> })
		}}
		<Navbar />
		<ThemeToggle />
		<main class="main-content">
			<Hero />
			<About />
			<Skills />
			<Projects />
			<Contact />
			<div class="redesign-banner">
				<p>"Pshhh!... A new look is coming..."</p>
			</div>
		</main>
	}
}
