mod error;
mod loader;
#[cfg(test)]
mod tests;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_render_config, parse_render_config};
pub use types::{RenderConfig, StatusColors};
