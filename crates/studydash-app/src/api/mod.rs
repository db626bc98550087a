pub mod bootstrap;
pub mod error;
pub mod state;

pub use error::RequestError;
pub use state::AppState;
