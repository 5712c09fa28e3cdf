mod component;
mod graphs;
mod state;
mod types;

pub use component::NetworkNodes;
pub use types::Section;
