//! anomeme-ui - UI types and components for the ANOMEME terminal
//!
//! Contains display types, stores, the tooltip placement engine and pure view
//! components. The web crate loads fixture data and wires pages together.

pub mod components;
pub mod config;
pub mod display_types;
pub mod hover;
pub mod placement;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
pub use config::TooltipConfig;
pub use display_types::*;
pub use placement::{PlacementConfig, Rect, ResolvedPlacement, Side, Viewport};
