pub mod handlers;

pub use handlers::health_routes as router;
