mod extractors;
mod frontend;
mod pages;
mod routes;
mod state;
pub mod v1;

pub use extractors::RecognizeForm;
pub use routes::create_router;
pub use state::AppState;
