//! Request pipeline middleware, in the order `app::create_router` installs them.

pub mod cors;
pub mod errors;
pub mod request_log;

#[cfg(test)]
pub(crate) mod log_capture;

pub use cors::cors;
pub use errors::report_errors;
pub use request_log::log_api_requests;
