mod chart;
mod kpis;
mod recent;
mod view;

pub use view::Dashboard;
