//! Fixture data for the terminal
//!
//! Everything the dashboard shows is static and compiled into the binary.

use anomeme_ui::{
    Analytics, Execution, HelpText, Portfolio, RiskAssessment, SocialSignal, TerminalSnapshot,
    TooltipConfig, UserProfile,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Embedded fixture data (compiled into the binary)
const FIXTURE_JSON: &str = include_str!("../fixtures/terminal.json");

#[derive(Error, Debug)]
pub enum DemoDataError {
    #[error("Failed to parse fixture JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Fixture section '{section}' is empty")]
    Empty { section: &'static str },
    #[error("Risk score {score} is outside 0-100")]
    InvalidScore { score: u8 },
}

#[derive(Debug, Deserialize)]
struct FixtureData {
    #[serde(default)]
    tooltip: TooltipConfig,
    profile: UserProfile,
    signals: Vec<SocialSignal>,
    portfolio: Portfolio,
    execution: Execution,
    risk: RiskAssessment,
    analytics: Analytics,
    #[serde(default)]
    help: HelpText,
}

/// Parsed fixture: what to render and how tooltips behave
#[derive(Clone, Debug, PartialEq)]
pub struct DemoData {
    pub snapshot: TerminalSnapshot,
    pub tooltip: TooltipConfig,
}

/// Parse and validate the embedded fixture
pub fn load() -> Result<DemoData, DemoDataError> {
    parse(FIXTURE_JSON).inspect_err(|e| warn!("Demo data unavailable: {}", e))
}

fn parse(json: &str) -> Result<DemoData, DemoDataError> {
    let fixture: FixtureData = serde_json::from_str(json)?;

    if fixture.signals.is_empty() {
        return Err(DemoDataError::Empty { section: "signals" });
    }
    if fixture.portfolio.positions.is_empty() {
        return Err(DemoDataError::Empty {
            section: "portfolio.positions",
        });
    }
    if fixture.risk.score > 100 {
        return Err(DemoDataError::InvalidScore {
            score: fixture.risk.score,
        });
    }

    debug!(
        "Loaded fixture: {} signals, {} positions",
        fixture.signals.len(),
        fixture.portfolio.positions.len()
    );

    Ok(DemoData {
        snapshot: TerminalSnapshot {
            profile: fixture.profile,
            signals: fixture.signals,
            portfolio: fixture.portfolio,
            execution: fixture.execution,
            risk: fixture.risk,
            analytics: fixture.analytics,
            help: fixture.help,
        },
        tooltip: fixture.tooltip,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anomeme_ui::{RiskLevel, SignalStatus};

    /// The embedded fixture with one JSON pointer replaced
    fn fixture_with(pointer: &str, value: serde_json::Value) -> String {
        let mut json: serde_json::Value = serde_json::from_str(FIXTURE_JSON).unwrap();
        *json.pointer_mut(pointer).unwrap() = value;
        json.to_string()
    }

    #[test]
    fn test_embedded_fixture_loads() {
        let data = load().unwrap();
        let snapshot = &data.snapshot;
        assert_eq!(snapshot.signals.len(), 4);
        assert_eq!(snapshot.signals[0].status, SignalStatus::Triggered);
        assert_eq!(snapshot.signals[3].status, SignalStatus::Rejected);
        assert_eq!(snapshot.portfolio.positions.len(), 5);
        assert_eq!(snapshot.risk.level(), RiskLevel::Low);
        assert_eq!(snapshot.analytics.rank, 127);
        assert!(!snapshot.help.settings.is_empty());
        assert_eq!(data.tooltip, TooltipConfig::default());
    }

    #[test]
    fn test_tooltip_section_overrides_delay() {
        let json = fixture_with("/tooltip", serde_json::json!({ "delay_ms": 120 }));
        let data = parse(&json).unwrap();
        assert_eq!(data.tooltip.delay_ms, 120);
        assert_eq!(data.tooltip.placement.panel_width, 300.0);
    }

    #[test]
    fn test_missing_tooltip_section_uses_defaults() {
        let mut json: serde_json::Value = serde_json::from_str(FIXTURE_JSON).unwrap();
        json.as_object_mut().unwrap().remove("tooltip");
        let data = parse(&json.to_string()).unwrap();
        assert_eq!(data.tooltip, TooltipConfig::default());
    }

    #[test]
    fn test_empty_signals_rejected() {
        let json = fixture_with("/signals", serde_json::json!([]));
        assert!(matches!(
            parse(&json),
            Err(DemoDataError::Empty { section: "signals" })
        ));
    }

    #[test]
    fn test_out_of_range_score_rejected() {
        let json = fixture_with("/risk/score", serde_json::json!(140));
        assert!(matches!(
            parse(&json),
            Err(DemoDataError::InvalidScore { score: 140 })
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse("{ not json").unwrap_err();
        assert!(matches!(err, DemoDataError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse fixture JSON"));
    }
}
