pub mod status_check_repository_errors;
