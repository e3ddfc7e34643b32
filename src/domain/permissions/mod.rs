pub mod negotiation;
pub mod types;

pub use negotiation::{negotiate_permissions, DEFAULT_PERMISSIONS};
pub use types::{AuthorizationStatus, PermissionRequest, Permissions, RequestedPermissions};
