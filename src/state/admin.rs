//! Admin dashboard chrome state.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

/// Tabs on the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Overview,
    Users,
    Analytics,
    Settings,
}

impl AdminTab {
    pub const ALL: [Self; 4] = [Self::Overview, Self::Users, Self::Analytics, Self::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Users => "User Management",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }

    /// Stable identifier used in DOM ids.
    pub fn id(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Users => "users",
            Self::Analytics => "analytics",
            Self::Settings => "settings",
        }
    }
}
