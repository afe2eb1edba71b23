pub mod data_table;
pub mod loader;
pub mod loading;
pub mod toast;
