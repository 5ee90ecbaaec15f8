pub mod dashboard_handler;
pub mod dashboard_template;
