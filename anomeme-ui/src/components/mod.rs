//! Shared UI components

pub mod button;
pub mod dashboard;
pub mod form;
pub mod helpers;
pub mod icons;
pub mod intent_modal;
pub mod landing;
pub mod modal;
pub mod settings_modal;
pub mod terminal_panel;
pub mod utils;

pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use dashboard::DashboardView;
pub use helpers::{ErrorDisplay, Tooltip};
pub use icons::{
    ActivityIcon, AlertTriangleIcon, BarChartIcon, DollarSignIcon, SettingsIcon, ShieldIcon,
    TargetIcon, TrendingUpIcon, UserIcon, XIcon, ZapIcon,
};
pub use intent_modal::IntentModalView;
pub use landing::LandingView;
pub use modal::Modal;
pub use settings_modal::SettingsModalView;
pub use terminal_panel::{PanelStatus, TerminalPanel};
pub use utils::{format_signed_percent, short_address};
