pub mod status_check_service_errors;
