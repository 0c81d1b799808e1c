//! HTTP handlers for roles, users, products and login.

pub mod auth;
pub mod common;
pub mod products;
pub mod roles;
pub mod users;

pub use auth::*;
pub use common::*;
pub use products::*;
pub use roles::*;
pub use users::*;
