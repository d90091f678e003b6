pub mod errors;
pub mod listings;
pub mod routes;
pub mod startup;

pub use startup::run;
