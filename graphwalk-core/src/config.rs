use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::{LayoutConfig, Viewport};
use crate::render::RenderStyle;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub viewport: Viewport,
    pub layout: LayoutConfig,
    pub style: RenderStyle,
    /// Delay between animation ticks.
    pub tick_interval_ms: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            layout: LayoutConfig::default(),
            style: RenderStyle::default(),
            tick_interval_ms: 600,
        }
    }
}

impl SessionConfig {
    /// Parse a (possibly partial) JSON config. Blank input gives the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.tick_interval_ms, 600);
        assert_eq!(cfg.layout.radius, 200.0);
        assert_eq!(cfg.style.node_radius, 18.0);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let cfg = SessionConfig::from_json(r#"{"tick_interval_ms": 250, "layout": {"radius": 120}}"#).unwrap();
        assert_eq!(cfg.tick_interval_ms, 250);
        assert_eq!(cfg.layout.radius, 120.0);
        assert_eq!(cfg.style, RenderStyle::default());
        assert_eq!(cfg.viewport, Viewport::default());
    }

    #[test]
    fn test_blank_and_invalid_json() {
        assert_eq!(SessionConfig::from_json("  ").unwrap(), SessionConfig::default());
        assert!(SessionConfig::from_json("{not json").is_err());
    }
}
