pub mod app_state;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod presentation;
pub mod services;
pub mod sources;

#[cfg(test)]
pub mod test_utils;
