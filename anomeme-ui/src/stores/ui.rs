//! Terminal UI state store (session, modals, form drafts)

use dioxus::prelude::*;
use tracing::info;

// =============================================================================
// Select choices
// =============================================================================

/// A fixed set of options backing a `<select>`
pub trait Choice: Copy + PartialEq + 'static {
    fn all() -> &'static [Self];
    /// Value attribute of the `<option>`
    fn value(&self) -> &'static str;
    fn label(&self) -> &'static str;

    fn from_value(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.value() == value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sentiment {
    #[default]
    Positive,
    Negative,
    Any,
}

impl Choice for Sentiment {
    fn all() -> &'static [Self] {
        &[Sentiment::Positive, Sentiment::Negative, Sentiment::Any]
    }

    fn value(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Any => "any",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Any => "Any",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Confidence {
    #[default]
    Seventy,
    Eighty,
    Ninety,
}

impl Confidence {
    pub fn percent(&self) -> u8 {
        match self {
            Confidence::Seventy => 70,
            Confidence::Eighty => 80,
            Confidence::Ninety => 90,
        }
    }
}

impl Choice for Confidence {
    fn all() -> &'static [Self] {
        &[Confidence::Seventy, Confidence::Eighty, Confidence::Ninety]
    }

    fn value(&self) -> &'static str {
        match self {
            Confidence::Seventy => "70",
            Confidence::Eighty => "80",
            Confidence::Ninety => "90",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Confidence::Seventy => "70%+",
            Confidence::Eighty => "80%+",
            Confidence::Ninety => "90%+",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriceDirection {
    #[default]
    Increase,
    Decrease,
    Any,
}

impl Choice for PriceDirection {
    fn all() -> &'static [Self] {
        &[
            PriceDirection::Increase,
            PriceDirection::Decrease,
            PriceDirection::Any,
        ]
    }

    fn value(&self) -> &'static str {
        match self {
            PriceDirection::Increase => "increase",
            PriceDirection::Decrease => "decrease",
            PriceDirection::Any => "any",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PriceDirection::Increase => "Increase",
            PriceDirection::Decrease => "Decrease",
            PriceDirection::Any => "Any Change",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeFrame {
    #[default]
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
    OneHour,
}

impl Choice for TimeFrame {
    fn all() -> &'static [Self] {
        &[
            TimeFrame::OneMinute,
            TimeFrame::FiveMinutes,
            TimeFrame::FifteenMinutes,
            TimeFrame::OneHour,
        ]
    }

    fn value(&self) -> &'static str {
        match self {
            TimeFrame::OneMinute => "1m",
            TimeFrame::FiveMinutes => "5m",
            TimeFrame::FifteenMinutes => "15m",
            TimeFrame::OneHour => "1h",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TimeFrame::OneMinute => "1 Minute",
            TimeFrame::FiveMinutes => "5 Minutes",
            TimeFrame::FifteenMinutes => "15 Minutes",
            TimeFrame::OneHour => "1 Hour",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Slippage {
    One,
    #[default]
    Three,
    Five,
    Ten,
}

impl Choice for Slippage {
    fn all() -> &'static [Self] {
        &[Slippage::One, Slippage::Three, Slippage::Five, Slippage::Ten]
    }

    fn value(&self) -> &'static str {
        match self {
            Slippage::One => "1",
            Slippage::Three => "3",
            Slippage::Five => "5",
            Slippage::Ten => "10",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Slippage::One => "1%",
            Slippage::Three => "3%",
            Slippage::Five => "5%",
            Slippage::Ten => "10%",
        }
    }
}

/// Social accounts offered as intent sources
pub const SOCIAL_SOURCES: &[&str] = &["@elonmusk", "@VitalikButerin", "@whale_alert", "custom"];

// =============================================================================
// Intent draft
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriggerKind {
    #[default]
    Social,
    Price,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TradeAction {
    #[default]
    Buy,
    Sell,
}

impl TradeAction {
    pub fn verb(&self) -> &'static str {
        match self {
            TradeAction::Buy => "buy",
            TradeAction::Sell => "sell",
        }
    }
}

/// Contents of the create-intent form. Nothing is submitted anywhere.
#[derive(Clone, Debug, PartialEq, Store)]
pub struct IntentDraft {
    pub trigger: TriggerKind,
    pub action: TradeAction,
    pub social_source: String,
    /// Comma-separated
    pub keywords: String,
    pub sentiment: Sentiment,
    pub confidence: Confidence,
    pub price_token: String,
    pub price_direction: PriceDirection,
    pub price_change: String,
    pub time_frame: TimeFrame,
    pub trade_token: String,
    pub amount: String,
    pub max_slippage: Slippage,
    pub stop_loss: String,
    pub take_profit: String,
    pub rug_protection: bool,
    pub mev_protection: bool,
    pub sniper_protection: bool,
}

impl Default for IntentDraft {
    fn default() -> Self {
        Self {
            trigger: TriggerKind::Social,
            action: TradeAction::Buy,
            social_source: SOCIAL_SOURCES[0].to_string(),
            keywords: String::new(),
            sentiment: Sentiment::Positive,
            confidence: Confidence::Seventy,
            price_token: String::new(),
            price_direction: PriceDirection::Increase,
            price_change: String::new(),
            time_frame: TimeFrame::OneMinute,
            trade_token: String::new(),
            amount: String::new(),
            max_slippage: Slippage::Three,
            stop_loss: String::new(),
            take_profit: String::new(),
            rug_protection: true,
            mev_protection: true,
            sniper_protection: true,
        }
    }
}

/// Empty form fields fall back to the placeholder the form shows
fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        placeholder
    } else {
        trimmed
    }
}

/// "a", "a and b", "a, b, and c"
fn join_list(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [one] => one.to_string(),
        [a, b] => format!("{a} and {b}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}

impl IntentDraft {
    /// First keyword, or the placeholder's first keyword
    pub fn primary_keyword(&self) -> &str {
        self.keywords
            .split(',')
            .map(str::trim)
            .find(|k| !k.is_empty())
            .unwrap_or("DOGE")
    }

    /// Human-readable IF / THEN / WITH / PROTECTED lines for the preview box
    pub fn preview_lines(&self) -> Vec<String> {
        let condition = match self.trigger {
            TriggerKind::Social => format!(
                "IF {} mentions \u{201c}{}\u{201d} with {} sentiment ({}%+)",
                or_placeholder(&self.social_source, SOCIAL_SOURCES[0]),
                self.primary_keyword(),
                self.sentiment.label().to_lowercase(),
                self.confidence.percent()
            ),
            TriggerKind::Price => {
                let movement = match self.price_direction {
                    PriceDirection::Increase => "rises",
                    PriceDirection::Decrease => "drops",
                    PriceDirection::Any => "moves",
                };
                format!(
                    "IF {} {} {} within {}",
                    or_placeholder(&self.price_token, "DOGE"),
                    movement,
                    or_placeholder(&self.price_change, "5%"),
                    self.time_frame.label().to_lowercase()
                )
            }
        };

        let action = format!(
            "THEN {} {} {} with max {} slippage",
            self.action.verb(),
            or_placeholder(&self.amount, "$100"),
            or_placeholder(&self.trade_token, "DOGE"),
            self.max_slippage.label()
        );

        let limits = format!(
            "WITH stop loss at {} and take profit at {}",
            or_placeholder(&self.stop_loss, "20%"),
            or_placeholder(&self.take_profit, "50%")
        );

        let mut protections = Vec::new();
        if self.rug_protection {
            protections.push("rug detection");
        }
        if self.mev_protection {
            protections.push("MEV shield");
        }
        if self.sniper_protection {
            protections.push("anti-sniper");
        }
        let protection = if protections.is_empty() {
            "UNPROTECTED".to_string()
        } else {
            format!("PROTECTED by {}", join_list(&protections))
        };

        vec![condition, action, limits, protection]
    }
}

// =============================================================================
// Settings draft
// =============================================================================

/// Contents of the settings form. Saved only into this store.
#[derive(Clone, Debug, PartialEq, Store)]
pub struct SettingsDraft {
    pub max_daily_loss: String,
    pub max_position_size: String,
    pub global_stop_loss: String,
    pub auto_execute: bool,
    pub mev_protection: bool,
    pub rug_detection: bool,
    pub telegram_token: String,
    pub discord_webhook: String,
    pub email: String,
}

impl Default for SettingsDraft {
    fn default() -> Self {
        Self {
            max_daily_loss: "$500".to_string(),
            max_position_size: "20%".to_string(),
            global_stop_loss: "25%".to_string(),
            auto_execute: true,
            mev_protection: true,
            rug_detection: true,
            telegram_token: String::new(),
            discord_webhook: String::new(),
            email: String::new(),
        }
    }
}

// =============================================================================
// Combined UI State
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Intent,
    Settings,
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SessionState {
    pub connected: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct UiState {
    pub session: SessionState,
    /// At most one modal is open
    pub modal: Option<ModalKind>,
    pub intent: IntentDraft,
    pub settings: SettingsDraft,
}

impl UiState {
    pub fn connect(&mut self) {
        if !self.session.connected {
            info!("Session connected");
        }
        self.session.connected = true;
    }

    /// Opening a modal replaces whichever one is open
    pub fn open_modal(&mut self, kind: ModalKind) {
        self.modal = Some(kind);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn is_modal_open(&self, kind: ModalKind) -> bool {
        self.modal == Some(kind)
    }

    /// Record the intent draft and close the form. There is no backend.
    pub fn submit_intent(&mut self) {
        info!("Intent created: {}", self.intent.preview_lines().join(" / "));
        self.close_modal();
    }

    /// Replace the saved settings and close the form
    pub fn save_settings(&mut self, settings: SettingsDraft) {
        info!(
            "Settings saved (auto_execute={}, mev_protection={}, rug_detection={})",
            settings.auto_execute, settings.mev_protection, settings.rug_detection
        );
        self.settings = settings;
        self.close_modal();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preview_matches_placeholders() {
        let lines = IntentDraft::default().preview_lines();
        assert_eq!(
            lines,
            vec![
                "IF @elonmusk mentions \u{201c}DOGE\u{201d} with positive sentiment (70%+)",
                "THEN buy $100 DOGE with max 3% slippage",
                "WITH stop loss at 20% and take profit at 50%",
                "PROTECTED by rug detection, MEV shield, and anti-sniper",
            ]
        );
    }

    #[test]
    fn test_preview_price_trigger_and_sell() {
        let draft = IntentDraft {
            trigger: TriggerKind::Price,
            action: TradeAction::Sell,
            price_token: "PEPE".to_string(),
            price_direction: PriceDirection::Decrease,
            price_change: "10%".to_string(),
            time_frame: TimeFrame::FifteenMinutes,
            trade_token: "PEPE".to_string(),
            amount: "$250".to_string(),
            max_slippage: Slippage::Five,
            ..IntentDraft::default()
        };
        let lines = draft.preview_lines();
        assert_eq!(lines[0], "IF PEPE drops 10% within 15 minutes");
        assert_eq!(lines[1], "THEN sell $250 PEPE with max 5% slippage");
    }

    #[test]
    fn test_preview_protection_lists() {
        let mut draft = IntentDraft {
            sniper_protection: false,
            ..IntentDraft::default()
        };
        assert_eq!(
            draft.preview_lines()[3],
            "PROTECTED by rug detection and MEV shield"
        );
        draft.rug_protection = false;
        draft.mev_protection = false;
        assert_eq!(draft.preview_lines()[3], "UNPROTECTED");
    }

    #[test]
    fn test_primary_keyword_skips_blanks() {
        let draft = IntentDraft {
            keywords: " , dogecoin, moon".to_string(),
            ..IntentDraft::default()
        };
        assert_eq!(draft.primary_keyword(), "dogecoin");
    }

    #[test]
    fn test_choice_round_trips_values() {
        assert_eq!(TimeFrame::from_value("1h"), Some(TimeFrame::OneHour));
        assert_eq!(Slippage::from_value("10"), Some(Slippage::Ten));
        assert_eq!(Confidence::from_value("95"), None);
    }

    #[test]
    fn test_only_one_modal_open() {
        let mut state = UiState::default();
        state.open_modal(ModalKind::Intent);
        state.open_modal(ModalKind::Settings);
        assert!(state.is_modal_open(ModalKind::Settings));
        assert!(!state.is_modal_open(ModalKind::Intent));
        state.close_modal();
        assert_eq!(state.modal, None);
    }

    #[test]
    fn test_intent_selection_survives_reopen() {
        let mut state = UiState::default();
        state.open_modal(ModalKind::Intent);
        state.intent.trigger = TriggerKind::Price;
        state.close_modal();
        state.open_modal(ModalKind::Intent);
        assert_eq!(state.intent.trigger, TriggerKind::Price);
    }

    #[test]
    fn test_submit_intent_closes_modal() {
        let mut state = UiState::default();
        state.open_modal(ModalKind::Intent);
        state.submit_intent();
        assert_eq!(state.modal, None);
    }

    #[test]
    fn test_save_settings_replaces_and_closes() {
        let mut state = UiState::default();
        state.open_modal(ModalKind::Settings);
        let edited = SettingsDraft {
            auto_execute: false,
            max_daily_loss: "$250".to_string(),
            ..SettingsDraft::default()
        };
        state.save_settings(edited.clone());
        assert_eq!(state.settings, edited);
        assert_eq!(state.modal, None);
    }

    #[test]
    fn test_connect_is_idempotent() {
        let mut state = UiState::default();
        state.connect();
        state.connect();
        assert!(state.session.connected);
    }
}
