//! carousel-rs: headless carousel engine.
//!
//! The crate owns the interaction and layout state of a paginated content
//! viewer: drag/touch sessions, track geometry, and plugin-contributed
//! strategies. Markup and styling stay with the host's renderer.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{CarouselConfig, CarouselEngine};
pub use error::{CarouselError, CarouselResult};
