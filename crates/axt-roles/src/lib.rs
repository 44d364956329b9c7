//! axt Role Registry
//!
//! Static knowledge about ARIA roles and properties:
//! - Closed role enumeration with categories (abstract roles included
//!   so they can be recognized and rejected, never assigned)
//! - Required owned-element constraints per role
//! - Implicit tag -> role mapping for semantic HTML tags
//! - Redefinability rules for tags with fixed native semantics
//! - The supported `aria-*` property vocabulary with value kinds
//!
//! The registry is built once and never mutated.

pub mod props;
pub mod registry;
pub mod role;

pub use props::{PropKind, PropValue, TriState, prop_kind};
pub use registry::{implicit_role_for, is_redefinable, is_structural_child_tag};
pub use role::{Role, RoleCategory};
