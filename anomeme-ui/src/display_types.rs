//! Display types for UI components
//!
//! Everything the terminal shows is fixture data. These types carry only what
//! the views render, and deserialize straight from the fixture JSON so pages
//! can hand them to props-based components.

use serde::Deserialize;

/// Processing state of a social signal card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalStatus {
    Triggered,
    Processing,
    Scanning,
    Rejected,
}

impl SignalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SignalStatus::Triggered => "⚡ TRIGGERED",
            SignalStatus::Processing => "PROCESSING",
            SignalStatus::Scanning => "SCANNING...",
            SignalStatus::Rejected => "❌ REJECTED",
        }
    }
}

/// One post from the social feed
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialSignal {
    pub author: String,
    pub age: String,
    pub quote: String,
    /// e.g. "Sentiment: 92%" or "Market Impact: High"
    pub metric: String,
    pub status: SignalStatus,
}

/// Direction of a percentage change, for coloring
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn of(change_percent: f64) -> Trend {
        if change_percent > 0.0 {
            Trend::Up
        } else if change_percent < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            Trend::Up => "text-green-400",
            Trend::Down => "text-red-400",
            Trend::Flat => "text-white/60",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Position {
    pub symbol: String,
    pub price: String,
    pub change_percent: f64,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Portfolio {
    pub total_return_percent: f64,
    pub total_value: String,
    pub day_change_percent: f64,
    pub positions: Vec<Position>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Execution {
    pub intent_label: String,
    pub status: String,
    pub mev_shield_active: bool,
    pub progress_percent: u8,
    pub gas_used: String,
    pub slippage: String,
    pub execution_time: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RiskCheck {
    pub name: String,
    pub passed: bool,
}

/// Bucket for a 0-100 risk score
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> RiskLevel {
        match score {
            0..=33 => RiskLevel::Low,
            34..=66 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW RISK",
            RiskLevel::Medium => "MEDIUM RISK",
            RiskLevel::High => "HIGH RISK",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            RiskLevel::Low => "text-green-400",
            RiskLevel::Medium => "text-orange-400",
            RiskLevel::High => "text-red-400",
        }
    }

    pub fn bar_class(&self) -> &'static str {
        match self {
            RiskLevel::Low => "bg-green-500",
            RiskLevel::Medium => "bg-orange-500",
            RiskLevel::High => "bg-red-500",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RiskAssessment {
    /// 0-100, lower is safer
    pub score: u8,
    pub checks: Vec<RiskCheck>,
}

impl RiskAssessment {
    pub fn level(&self) -> RiskLevel {
        RiskLevel::from_score(self.score)
    }
}

/// A "Label: value" row
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Analytics {
    pub success_rate: String,
    pub avg_execution: String,
    pub stats: Vec<LabeledValue>,
    pub rank: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserProfile {
    pub handle: String,
    pub xp: String,
    pub wallet_connected: bool,
    pub wallet_address: String,
    pub risk_profile: Vec<LabeledValue>,
    pub today: Vec<LabeledValue>,
}

/// Tooltip copy for every section of the terminal
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HelpText {
    pub brand: String,
    pub tagline: String,
    pub session: String,
    pub xp: String,
    pub system_status: String,
    pub signals: String,
    pub create_intent: String,
    pub portfolio: String,
    pub execution: String,
    pub active_intent: String,
    pub mev_shield: String,
    pub risk: String,
    pub risk_score: String,
    pub analytics: String,
    pub settings: String,
}

/// Everything the terminal dashboard renders
#[derive(Clone, Debug, PartialEq)]
pub struct TerminalSnapshot {
    pub profile: UserProfile,
    pub signals: Vec<SocialSignal>,
    pub portfolio: Portfolio,
    pub execution: Execution,
    pub risk: RiskAssessment,
    pub analytics: Analytics,
    pub help: HelpText,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_boundaries() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(15), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(33), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(34), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(66), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(67), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
    }

    #[test]
    fn test_trend_of_change() {
        assert_eq!(Trend::of(23.0), Trend::Up);
        assert_eq!(Trend::of(-5.0), Trend::Down);
        assert_eq!(Trend::of(0.0), Trend::Flat);
    }

    #[test]
    fn test_signal_status_deserializes_lowercase() {
        let signal: SocialSignal = serde_json::from_str(
            r#"{"author": "@whale_alert", "age": "15s ago", "quote": "moved",
                "metric": "Market Impact: High", "status": "processing"}"#,
        )
        .unwrap();
        assert_eq!(signal.status, SignalStatus::Processing);
        assert_eq!(signal.status.label(), "PROCESSING");
    }
}
