/// HTTP handlers for the push gateway API
pub mod push;

pub use push::register_routes;
