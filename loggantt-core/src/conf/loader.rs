use crate::conf::error::ConfigError;
use crate::conf::types::RenderConfig;
use std::fs;
use std::path::Path;

/// Loads render settings. Without a path the defaults apply; a path that
/// was given must exist.
pub fn load_render_config(path: Option<&Path>) -> Result<RenderConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };

    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg = parse_render_config(&contents).map_err(|e| match e {
        ConfigError::Parse { source, .. } => ConfigError::parse(path, source),
        other => other,
    })?;

    tracing::debug!(path = %path.display(), "render config loaded");
    Ok(cfg)
}

pub fn parse_render_config(contents: &str) -> Result<RenderConfig, ConfigError> {
    let cfg: RenderConfig =
        hcl::from_str(contents).map_err(|e| ConfigError::parse("<inline>", e))?;
    cfg.validate()?;
    Ok(cfg)
}
