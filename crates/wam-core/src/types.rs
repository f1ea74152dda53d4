//! Shell-level domain types

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Top-level view selected from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewSelector {
    #[default]
    Dashboard,
    NewCampaign,
}

impl ViewSelector {
    pub const ALL: [ViewSelector; 2] = [ViewSelector::Dashboard, ViewSelector::NewCampaign];

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            ViewSelector::Dashboard => "Dashboard",
            ViewSelector::NewCampaign => "New Campaign",
        }
    }
}

/// Date-range toggle on the dashboard.
///
/// Purely cosmetic: the displayed figures never depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardFilter {
    Today,
    #[default]
    ThisWeek,
    ThisMonth,
}

impl DashboardFilter {
    pub const ALL: [DashboardFilter; 3] = [
        DashboardFilter::Today,
        DashboardFilter::ThisWeek,
        DashboardFilter::ThisMonth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardFilter::Today => "Today",
            DashboardFilter::ThisWeek => "This Week",
            DashboardFilter::ThisMonth => "This Month",
        }
    }

    /// Next filter, wrapping around
    pub fn next(self) -> Self {
        match self {
            DashboardFilter::Today => DashboardFilter::ThisWeek,
            DashboardFilter::ThisWeek => DashboardFilter::ThisMonth,
            DashboardFilter::ThisMonth => DashboardFilter::Today,
        }
    }

    /// Previous filter, wrapping around
    pub fn prev(self) -> Self {
        match self {
            DashboardFilter::Today => DashboardFilter::ThisMonth,
            DashboardFilter::ThisWeek => DashboardFilter::Today,
            DashboardFilter::ThisMonth => DashboardFilter::ThisWeek,
        }
    }
}
