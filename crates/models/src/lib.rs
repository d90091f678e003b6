pub mod errors;
pub mod db;
pub mod category;
pub mod user;
pub mod branch;
pub mod status;
pub mod service;
pub mod appointment;
pub mod favorite_service;
pub mod news;
pub mod service_statistic;

#[cfg(test)]
mod tests;
