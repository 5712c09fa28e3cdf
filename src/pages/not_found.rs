use leptos::prelude::*;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<section class="section not-found">
			<h1>"404"</h1>
			<p>"This page drifted off the grid."</p>
			<a href="/">"Back home"</a>
		</section>
	}
}
