pub mod games;
pub mod health;
pub mod status;

/// Path prefix shared by every endpoint.
pub const API_PREFIX: &str = "/api";
