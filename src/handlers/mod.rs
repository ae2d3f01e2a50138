pub mod health_handler;
pub mod session_handler;

pub use health_handler::health_check;
pub use session_handler::configure as configure_session_routes;
