//! Threshold rules that turn numbers into badge classes and colours.

use rust_decimal::Decimal;

/// Colour palette shared by the charts, fill bars and notifications.
pub mod palette {
    pub const PRIMARY: &str = "#2563eb";
    pub const SUCCESS: &str = "#10b981";
    pub const WARNING: &str = "#f59e0b";
    pub const ERROR: &str = "#ef4444";
    pub const CRITICAL: &str = "#dc2626";
}

/// Three-tier classification of a tank's fill percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillLevel {
    Critical,
    Warning,
    Healthy,
}

impl FillLevel {
    /// Below 20% is critical, below 40% a warning, anything else healthy.
    pub fn from_percentage(percentage: Decimal) -> Self {
        if percentage < Decimal::from(20) {
            FillLevel::Critical
        } else if percentage < Decimal::from(40) {
            FillLevel::Warning
        } else {
            FillLevel::Healthy
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            FillLevel::Critical => palette::CRITICAL,
            FillLevel::Warning => palette::WARNING,
            FillLevel::Healthy => palette::SUCCESS,
        }
    }
}

/// Badge class for a forecast's remaining days: up to 3 days is critical,
/// up to 7 low, otherwise normal. Unknown remaining days render as normal.
pub fn days_remaining_class(days: Option<Decimal>) -> &'static str {
    match days {
        Some(days) if days <= Decimal::from(3) => "status-critical",
        Some(days) if days <= Decimal::from(7) => "status-low",
        _ => "status-normal",
    }
}

/// Badge for an equipment's active flag as `(label, class)`.
pub fn active_badge(is_active: bool) -> (&'static str, &'static str) {
    if is_active {
        ("Active", "status-normal")
    } else {
        ("Inactive", "status-critical")
    }
}

/// Severity of a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Info => palette::PRIMARY,
            Severity::Success => palette::SUCCESS,
            Severity::Warning => palette::WARNING,
            Severity::Error => palette::ERROR,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}
