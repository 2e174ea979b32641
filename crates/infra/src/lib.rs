pub mod db;
pub mod models;
pub mod pagination;
pub mod repos;
pub mod scope;

pub use db::Db;
pub use scope::Scope;
