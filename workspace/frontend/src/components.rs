pub mod dashboard;
pub mod equipment;
pub mod forecasting;
pub mod layout;
pub mod operational_hours;
pub mod refills;
pub mod stock;
pub mod usage;
