//! Derive normalized, recursive schema-field descriptors from the static
//! type declarations of record-like types.
//!
//! Given one structural member or accessor method plus a generic-parameter
//! binding map, build one immutable [`FieldDescriptor`] capturing field name,
//! number, nullability, resolved type identity, and, for container/map/union
//! types, the fully recursive sub-descriptors of their element, key/value, or
//! variant shapes.
//!
//! Design goals:
//! - Generic variables resolve through arbitrary nesting; unbound ones pass
//!   through unchanged.
//! - Name/number overrides follow a layered, conflict-detecting precedence.
//! - Decomposition descends one generic layer per step; no loops.
//! - Members, getters and setters funnel into one descriptor model.
//! - All configuration defects fail eagerly at construction; no partial
//!   descriptors.

pub mod descriptor;
pub mod emit;
pub mod error;
pub mod introspect;
pub mod model;
pub mod naming;
pub mod nullability;
pub mod resolve;

pub use descriptor::{FieldDescriptor, FieldSource, DEFAULT_SETTER_PREFIX};
pub use error::{Result, TypeInfoError};
pub use introspect::{StandardIntrospector, TypeIntrospector};
pub use model::{AccessorDecl, Bindings, Marker, MemberDecl, ParamDecl, RawType, TypeExpr};
pub use naming::CaseFormat;
