//! Navigation state machine for the dashboard's content panels.

use std::fmt;
use std::str::FromStr;

/// A content panel of the dashboard, addressed by its nav slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Forecasting,
    Stock,
    Equipment,
    OperationalHours,
    Refills,
    Usage,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Dashboard,
        Section::Forecasting,
        Section::Stock,
        Section::Equipment,
        Section::OperationalHours,
        Section::Refills,
        Section::Usage,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Forecasting => "forecasting",
            Section::Stock => "stock",
            Section::Equipment => "equipment",
            Section::OperationalHours => "operational-hours",
            Section::Refills => "refills",
            Section::Usage => "usage",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Forecasting => "Forecasting",
            Section::Stock => "Stock Levels",
            Section::Equipment => "Equipment",
            Section::OperationalHours => "Operational Hours",
            Section::Refills => "Refills",
            Section::Usage => "Usage",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "fas fa-tachometer-alt",
            Section::Forecasting => "fas fa-chart-line",
            Section::Stock => "fas fa-gas-pump",
            Section::Equipment => "fas fa-cogs",
            Section::OperationalHours => "fas fa-clock",
            Section::Refills => "fas fa-truck",
            Section::Usage => "fas fa-fire",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.slug() == s)
            .ok_or_else(|| format!("Unknown section: {}", s))
    }
}

/// Identifies the activation a load was started for.
///
/// A response may only be rendered while its ticket is still current;
/// any later activation invalidates every earlier ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub section: Section,
    pub generation: u64,
}

/// Result of one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    pub deactivated: Option<Section>,
    pub activated: Option<Section>,
    /// Present when a known section was activated; its loader must run.
    pub ticket: Option<LoadTicket>,
}

/// Tracks the active section and the activation generation.
///
/// There is no history: every activation simply replaces the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRouter {
    active: Option<Section>,
    nav_highlight: String,
    generation: u64,
}

impl Default for SectionRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionRouter {
    /// Starts on the dashboard with generation 0.
    pub fn new() -> Self {
        Self {
            active: Some(Section::Dashboard),
            nav_highlight: Section::Dashboard.slug().to_string(),
            generation: 0,
        }
    }

    pub fn active(&self) -> Option<Section> {
        self.active
    }

    /// The nav slug currently highlighted, which may name no known section.
    pub fn nav_highlight(&self) -> &str {
        &self.nav_highlight
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == Some(section)
    }

    /// Ticket for the current activation, if a section is shown.
    pub fn current_ticket(&self) -> Option<LoadTicket> {
        self.active.map(|section| LoadTicket {
            section,
            generation: self.generation,
        })
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.active == Some(ticket.section) && self.generation == ticket.generation
    }

    /// Switches to the section named by `name`.
    ///
    /// An unknown name hides every panel and leaves only the nav highlight
    /// pointing at it.
    pub fn activate(&mut self, name: &str) -> Activation {
        let target = name.parse::<Section>().ok();
        if target.is_none() {
            tracing::warn!("No panel for section '{}'", name);
        }
        self.transition(target, name)
    }

    pub fn activate_section(&mut self, section: Section) -> Activation {
        self.transition(Some(section), section.slug())
    }

    fn transition(&mut self, target: Option<Section>, highlight: &str) -> Activation {
        let deactivated = self.active.take();
        self.active = target;
        self.nav_highlight = highlight.to_string();
        self.generation += 1;

        tracing::debug!(
            "Section transition {:?} -> {:?} (generation {})",
            deactivated,
            target,
            self.generation
        );

        Activation {
            deactivated,
            activated: target,
            ticket: self.current_ticket(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_dashboard() {
        let router = SectionRouter::new();
        assert_eq!(router.active(), Some(Section::Dashboard));
        assert_eq!(router.nav_highlight(), "dashboard");
        assert_eq!(router.generation(), 0);
    }

    #[test]
    fn test_slugs_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.slug().parse::<Section>(), Ok(section));
        }
        assert!("reports".parse::<Section>().is_err());
    }

    #[test]
    fn test_switch_deactivates_one_and_activates_one() {
        let mut router = SectionRouter::new();
        let activation = router.activate("stock");

        assert_eq!(activation.deactivated, Some(Section::Dashboard));
        assert_eq!(activation.activated, Some(Section::Stock));
        assert_eq!(
            activation.ticket,
            Some(LoadTicket { section: Section::Stock, generation: 1 })
        );
        assert!(router.is_active(Section::Stock));
        assert!(!router.is_active(Section::Dashboard));
    }

    #[test]
    fn test_unknown_section_shows_no_panel() {
        let mut router = SectionRouter::new();
        let activation = router.activate("reports");

        assert_eq!(activation.deactivated, Some(Section::Dashboard));
        assert_eq!(activation.activated, None);
        assert_eq!(activation.ticket, None);
        assert_eq!(router.active(), None);
        assert_eq!(router.nav_highlight(), "reports");

        let activation = router.activate("usage");
        assert_eq!(activation.deactivated, None);
        assert_eq!(activation.activated, Some(Section::Usage));
    }

    #[test]
    fn test_stale_ticket_is_rejected() {
        let mut router = SectionRouter::new();
        let stock_ticket = router.activate("stock").ticket.unwrap();
        assert!(router.is_current(&stock_ticket));

        router.activate("refills");
        assert!(!router.is_current(&stock_ticket));

        // Coming back to the same section still invalidates the old load.
        let again = router.activate("stock").ticket.unwrap();
        assert!(!router.is_current(&stock_ticket));
        assert!(router.is_current(&again));
    }

    #[test]
    fn test_reselecting_section_issues_new_ticket() {
        let mut router = SectionRouter::new();
        let first = router.activate_section(Section::Equipment);
        let second = router.activate_section(Section::Equipment);

        assert_eq!(second.deactivated, Some(Section::Equipment));
        assert_ne!(first.ticket, second.ticket);
    }
}
