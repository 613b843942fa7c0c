pub mod app;
pub mod auth;
pub mod bids;
pub mod config;
pub mod curves;
pub mod error;
pub mod ratings;
pub mod rules;
pub mod state;
pub mod trades;
pub mod users;
pub mod validation;
pub mod views;
