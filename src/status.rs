#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Online,
    Warning,
    Offline,
}

impl Status {
    pub fn color_var(self) -> &'static str {
        match self {
            Status::Online => "var(--status-online)",
            Status::Warning => "var(--status-warning)",
            Status::Offline => "var(--status-offline)",
        }
    }

    pub fn glow(self) -> String {
        format!("0 0 10px {}", self.color_var())
    }
}

/// A status plus the label shown next to the indicator dot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusReport {
    pub status: Status,
    pub label: &'static str,
}

impl StatusReport {
    pub const fn new(status: Status, label: &'static str) -> Self {
        Self { status, label }
    }

    pub const fn ready() -> Self {
        Self::new(Status::Online, "Ready")
    }

    pub const fn issues_detected() -> Self {
        Self::new(Status::Warning, "Issues detected")
    }

    pub const fn server_error() -> Self {
        Self::new(Status::Warning, "Error occurred")
    }

    pub const fn offline() -> Self {
        Self::new(Status::Offline, "Offline")
    }

    pub const fn connection_error() -> Self {
        Self::new(Status::Offline, "Connection error")
    }

    pub fn style(&self) -> String {
        format!(
            "background: {}; box-shadow: {};",
            self.status.color_var(),
            self.status.glow()
        )
    }
}

impl Default for StatusReport {
    fn default() -> Self {
        Self::ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_state_has_its_own_color() {
        assert_ne!(Status::Online.color_var(), Status::Warning.color_var());
        assert_ne!(Status::Warning.color_var(), Status::Offline.color_var());
        assert_eq!(Status::Offline.glow(), "0 0 10px var(--status-offline)");
    }

    #[test]
    fn style_combines_color_and_glow() {
        assert_eq!(
            StatusReport::ready().style(),
            "background: var(--status-online); box-shadow: 0 0 10px var(--status-online);"
        );
    }
}
