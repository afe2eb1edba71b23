//! Client-side building blocks of the fuel-control dashboard.
//!
//! Transport records mirror the REST API's payloads; the remaining modules
//! hold the display rules (formatting, thresholds, table rows), the dashboard
//! summary figures and the navigation state machine. Nothing here touches
//! the browser, so the frontend crate stays a thin rendering layer.

pub mod actions;
pub mod dashboard;
pub mod endpoints;
pub mod error;
pub mod format;
pub mod forms;
pub mod models;
pub mod section;
pub mod status;
pub mod table;

pub use actions::UiAction;
pub use dashboard::{DashboardKpis, StockChartData};
pub use endpoints::ForecastQuery;
pub use error::{ApiError, ApiResult};
pub use forms::{FormError, HoursForm};
pub use models::{
    Alert, CalculateForecastsRequest, Equipment, ForecastRecord, ForecastScenario, FuelType,
    MessageResponse, NewOperationalHoursEntry, OperationalHoursEntry, RefillTransaction, Site,
    StockRecord, UsageTransaction,
};
pub use section::{Activation, LoadTicket, Section, SectionRouter};
pub use status::{FillLevel, Severity};
pub use table::TableContent;
