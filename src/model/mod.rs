//! Rows and request bodies for roles, users and products.

pub mod product;
pub mod role;
pub mod user;

pub use product::{CreateProduct, CreatedProduct, Product};
pub use role::{CreateRole, CreatedRole, Role};
pub use user::{CreateUser, CreatedUser, LoginRequest, PublicUser, User};
