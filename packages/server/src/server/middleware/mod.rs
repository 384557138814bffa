pub mod jwt_auth;

pub use jwt_auth::{jwt_auth_middleware, require_organizer, AuthUser};
