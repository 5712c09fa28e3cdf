use leptos::prelude::*;

/// Fixed top navigation with anchors into the home sections.
#[component]
pub fn Navbar() -> impl IntoView {
	view! {
		<nav class="navbar">
			<a class="navbar-brand" href="/">
				"sudo_kk"
			</a>
			<div class="navbar-links">
				<a href="/#about">"About"</a>
				<a href="/#skills">"Skills"</a>
				<a href="/#projects">"Projects"</a>
				<a href="/#contact">"Contact"</a>
			</div>
		</nav>
	}
}
