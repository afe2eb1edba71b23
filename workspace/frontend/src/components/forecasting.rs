mod scenarios;
mod view;

pub use view::Forecasting;
