pub mod errors;
pub mod status_check_service;
