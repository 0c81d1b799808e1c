//! Per-resource SQL and presence validation.

pub mod auth;
pub mod products;
pub mod roles;
pub mod users;
pub mod validation;

pub use auth::AuthService;
pub use products::ProductService;
pub use roles::RoleService;
pub use users::UserService;

/// Result of a delete-by-id.
#[derive(Clone, Debug, PartialEq)]
pub enum DeleteOutcome<T> {
    /// The row existed and was removed; carries the row as it was read before deleting.
    Deleted(T),
    NotFound,
    /// Still referenced by this many users.
    InUse(i64),
    /// The row was found but the delete affected nothing (removed concurrently).
    NothingDeleted,
}
