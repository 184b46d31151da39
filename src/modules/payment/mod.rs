pub mod repository;
mod routes;
pub mod service;
mod utils;

pub use routes::get_router;
