//! Placeholder dashboard figures
//!
//! These values are fixed; no analytics are computed anywhere.

/// Icon slot for a stat card, resolved to a glyph by the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatIcon {
    Send,
    Delivered,
    Responses,
    Trend,
}

/// A single counter on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub icon: StatIcon,
    pub title: &'static str,
    pub value: &'static str,
}

pub const DASHBOARD_STATS: [StatCard; 4] = [
    StatCard {
        icon: StatIcon::Send,
        title: "Messages Sent",
        value: "1,420",
    },
    StatCard {
        icon: StatIcon::Delivered,
        title: "Delivered",
        value: "1,398",
    },
    StatCard {
        icon: StatIcon::Responses,
        title: "Responses Received",
        value: "287",
    },
    StatCard {
        icon: StatIcon::Trend,
        title: "Response Rate",
        value: "20.5%",
    },
];

pub const CHART_PLACEHOLDER: &str = "Campaign chart would be displayed here.";
