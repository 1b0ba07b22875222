pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use routes::build_router;
pub use server::Server;
