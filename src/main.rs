//! CSR entry point: mounts the app onto `<body>`.

use holo_portfolio::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
