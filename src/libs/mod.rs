pub mod chart;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod messages;
pub mod range;
pub mod record;
pub mod reshape;
pub mod view;
