pub mod catalog;
pub mod models;
pub mod repositories;
pub mod services;
