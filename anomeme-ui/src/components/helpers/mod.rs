//! Common helper UI components

mod error_display;
mod tooltip;

pub use error_display::ErrorDisplay;
pub use tooltip::{use_tooltip_handle, Tooltip, TooltipHandle};
