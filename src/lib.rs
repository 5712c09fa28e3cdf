//! Leptos client-side app wiring and routes for the portfolio site.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::hooks::use_location;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod data;
mod pages;
mod theme;

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::project_detail::ProjectDetail;
use crate::theme::{ThemeContext, provide_theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the portfolio pages and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_theme();
	let theme = ThemeContext::use_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=move || theme.attr() />

		// sets the document title
		<Title text="sudo_kk | Portfolio" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<ScrollReset />
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/project/:slug") view=ProjectDetail />
			</Routes>
		</Router>
	}
}

/// Jumps the window back to the top whenever the path changes, so a detail
/// page never inherits the grid's scroll offset.
#[component]
fn ScrollReset() -> impl IntoView {
	let location = use_location();
	Effect::new(move |_| {
		location.pathname.track();
		window().scroll_to_with_x_and_y(0.0, 0.0);
	});
}
