//! Tooltip configuration
//!
//! Provided through Dioxus context by the app shell; components fall back to
//! `TooltipConfig::default()` when nothing is provided.

use crate::placement::PlacementConfig;
use serde::Deserialize;

/// Delay before a hovered tooltip shows, in milliseconds
pub const DEFAULT_TOOLTIP_DELAY_MS: u64 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    pub delay_ms: u64,
    pub placement: PlacementConfig,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_TOOLTIP_DELAY_MS,
            placement: PlacementConfig::default(),
        }
    }
}

impl TooltipConfig {
    /// Set delay before showing in milliseconds.
    #[must_use]
    pub fn delay_ms(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Set the footprint and spacing used for placement.
    #[must_use]
    pub fn placement(mut self, placement: PlacementConfig) -> Self {
        self.placement = placement;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TooltipConfig::default();
        assert_eq!(config.delay_ms, 300);
        assert_eq!(config.placement, PlacementConfig::default());
    }

    #[test]
    fn test_builder() {
        let config = TooltipConfig::default().delay_ms(150);
        assert_eq!(config.delay_ms, 150);
    }

    #[test]
    fn test_deserialize_nested_override() {
        let config: TooltipConfig =
            serde_json::from_str(r#"{"placement": {"offset": 6}}"#).unwrap();
        assert_eq!(config.delay_ms, 300);
        assert_eq!(config.placement.offset, 6.0);
        assert_eq!(config.placement.margin, 20.0);
    }
}
