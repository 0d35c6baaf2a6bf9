pub mod dashboard;
pub mod notifications;

pub use dashboard::{render_dashboard, update_dashboard, update_solving_buttons};
pub use notifications::{show_api_error, show_error};
