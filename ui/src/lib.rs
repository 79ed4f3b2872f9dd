//! Shared UI crate for Markbook. Most cross-platform logic and views live here.

use dioxus::prelude::{asset, manganis, Asset};

/// Unified theme stylesheet. Web links it; desktop embeds it at compile time.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

pub mod core;
pub mod dashboard;
pub mod views;

pub mod components {
    // Platform-agnostic application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod chart;
    pub use chart::MetricsChart;

    mod data_table;
    pub use data_table::DataTable;

    mod profile_panel;
    pub use profile_panel::ProfilePanel;

    mod summary_footer;
    pub use summary_footer::SummaryFooter;
}
