mod error;
mod functions;
mod jwt;
mod traits;
mod types;

pub use error::AuthError;
pub use functions::parse_bearer;
pub use jwt::JwtVerifier;
pub use traits::{Result, TokenVerifier};
pub use types::Claims;
