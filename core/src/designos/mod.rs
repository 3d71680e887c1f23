pub mod coercion;
pub mod extraction;
pub mod model;
pub mod normalize;
pub mod prompts;
pub mod render;
pub mod workflow;
