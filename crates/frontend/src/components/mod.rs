//! Small shared UI pieces

mod error_alert;
mod spinner;

pub use error_alert::ErrorAlert;
pub use spinner::LoadingSpinner;
