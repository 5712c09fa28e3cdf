use leptos::ev;
use leptos::prelude::*;

/// Which certification image, if any, is enlarged in the overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CertViewer {
	selected: Option<&'static str>,
}

impl CertViewer {
	pub fn open(&mut self, image: &'static str) {
		self.selected = Some(image);
	}

	pub fn close(&mut self) {
		self.selected = None;
	}

	pub fn selected(&self) -> Option<&'static str> {
		self.selected
	}
}

/// Click-to-enlarge overlay for a certification image. The close button,
/// a click outside the frame, or Escape all dismiss it.
#[component]
pub fn CertModal(viewer: RwSignal<CertViewer>) -> impl IntoView {
	let escape = window_event_listener(ev::keydown, move |ev| {
		if ev.key() == "Escape" {
			viewer.update(|v| v.close());
		}
	});
	on_cleanup(move || escape.remove());

	view! {
		{move || {
			viewer
				.with(|v| v.selected())
				.map(|src| {
					view! {
						<div
							class="cert-modal-overlay"
							on:click=move |_| viewer.update(|v| v.close())
						>
							<div class="cert-modal" on:click=|ev| ev.stop_propagation()>
								<button
									class="cert-modal-close"
									on:click=move |_| viewer.update(|v| v.close())
								>
									"×"
								</button>
								<img src=src alt="Certification" />
							</div>
						</div>
					}
				})
		}}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_starts_closed() {
		assert_eq!(CertViewer::default().selected(), None);
	}

	#[test]
	fn test_open_then_close() {
		let mut viewer = CertViewer::default();
		viewer.open("/cert1.jpg");
		assert_eq!(viewer.selected(), Some("/cert1.jpg"));
		viewer.close();
		assert_eq!(viewer.selected(), None);
	}

	#[test]
	fn test_open_replaces_previous_selection() {
		let mut viewer = CertViewer::default();
		viewer.open("/cert1.jpg");
		viewer.open("/cert2.jpg");
		assert_eq!(viewer.selected(), Some("/cert2.jpg"));
	}
}
