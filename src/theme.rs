use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::{UseStorageOptions, use_local_storage_with_options};

/// Dark/light palette flag, shared through context and persisted across
/// visits under a single local-storage key.
#[derive(Clone, Copy)]
pub struct ThemeContext {
	dark: Signal<bool>,
	set_dark: WriteSignal<bool>,
}

impl ThemeContext {
	/// Grab the theme from context; the app root always provides it.
	pub fn use_context() -> Self {
		expect_context::<ThemeContext>()
	}

	pub fn is_dark(&self) -> bool {
		self.dark.get()
	}

	/// Value for the `data-theme` attribute driving the CSS palette.
	pub fn attr(&self) -> &'static str {
		if self.dark.get() { "dark" } else { "light" }
	}

	pub fn toggle(&self) {
		self.set_dark.update(|d| *d = !*d);
	}
}

/// Provide the theme context, restoring the persisted flag. First-time
/// visitors get the dark palette.
pub fn provide_theme() {
	let (dark, set_dark, _) = use_local_storage_with_options::<bool, FromToStringCodec>(
		"darkMode",
		UseStorageOptions::default().initial_value(true),
	);
	provide_context(ThemeContext { dark, set_dark });
}
