pub mod config;
pub mod jwt;
pub mod password;

pub use config::AuthConfig;
pub use jwt::{Claims, JwtService};
pub use password::PasswordService;
