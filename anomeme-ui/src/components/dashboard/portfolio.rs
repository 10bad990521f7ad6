//! Portfolio summary and position rows

use dioxus::prelude::*;

use crate::components::icons::TrendingUpIcon;
use crate::components::terminal_panel::{PanelStatus, TerminalPanel};
use crate::components::utils::format_signed_percent;
use crate::display_types::{Portfolio, Position, Trend};
use crate::placement::Side;

#[component]
pub fn PortfolioPanel(portfolio: Portfolio, help: String) -> Element {
    let total_trend = Trend::of(portfolio.total_return_percent);
    let day_trend = Trend::of(portfolio.day_change_percent);
    let total_return = format_signed_percent(portfolio.total_return_percent);
    let day_change = format_signed_percent(portfolio.day_change_percent);

    rsx! {
        TerminalPanel {
            title: "PORTFOLIO".to_string(),
            help: Some(help),
            help_side: Side::Top,
            icon: rsx! {
                TrendingUpIcon { class: "w-4 h-4" }
            },
            status: PanelStatus::Active,
            div { class: "space-y-6",
                div { class: "text-center space-y-2 animate-scale-in",
                    div { class: "text-5xl font-black tracking-tight animate-count-up {total_trend.text_class()}",
                        "{total_return}"
                    }
                    div { class: "text-2xl anoma-text font-mono font-bold animate-count-up animate-stagger-1",
                        "{portfolio.total_value}"
                    }
                    div { class: "text-base font-semibold animate-stagger-2 {day_trend.text_class()}",
                        "24h: {day_change}"
                    }
                }
                div { class: "space-y-2 max-h-[200px] overflow-y-auto custom-scrollbar",
                    for position in portfolio.positions {
                        PositionRow { key: "{position.symbol}", position }
                    }
                }
            }
        }
    }
}

#[component]
fn PositionRow(position: Position) -> Element {
    let trend = Trend::of(position.change_percent);
    let row_class = match trend {
        Trend::Down => "bg-red-500/5 border-red-500/10",
        Trend::Up | Trend::Flat => "bg-green-500/5 border-green-500/10",
    };
    let change = format_signed_percent(position.change_percent);

    rsx! {
        div { class: "flex justify-between items-center p-2 border {row_class}",
            div { class: "flex items-center gap-3",
                span { class: "text-sm text-white font-semibold", "{position.symbol}" }
                span { class: "text-xs text-white/50", "{position.price}" }
            }
            div { class: "text-right",
                div { class: "font-bold {trend.text_class()}", "{change}" }
                div { class: "text-xs text-white/60", "{position.value}" }
            }
        }
    }
}
