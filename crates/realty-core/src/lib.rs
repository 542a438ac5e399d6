pub mod delay;
pub mod error;
pub mod extract;
pub mod parse;
pub mod request;
pub mod schema;
pub mod transport;

pub use error::RealtyError;
pub use request::{Method, RenderedRequest};
pub use transport::{Response, Transport};
