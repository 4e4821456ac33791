//! Nullability detection.
//!
//! A field is nullable iff any marker whose designator is `Nullable` appears
//! on the declaration site or on its annotated type. Matching ignores the
//! marker's namespace on purpose: equivalent markers from different
//! ecosystems all count.

use crate::error::{Result, TypeInfoError};
use crate::model::{AccessorDecl, Marker, MemberDecl, NULLABLE_MARKER};

pub fn is_nullable_marker(m: &Marker) -> bool {
    m.designator == NULLABLE_MARKER
}

fn any_nullable<'a>(sites: impl IntoIterator<Item = &'a Marker>) -> bool {
    sites.into_iter().any(is_nullable_marker)
}

/// Markers on the member itself or on its annotated type.
pub fn member_nullable(member: &MemberDecl) -> bool {
    any_nullable(member.markers.iter().chain(member.type_markers.iter()))
}

/// Markers on the accessor itself or on its annotated return type.
pub fn getter_nullable(method: &AccessorDecl) -> bool {
    any_nullable(method.markers.iter().chain(method.return_type_markers.iter()))
}

/// Setters take exactly one parameter; nullability comes from markers on
/// that parameter or on its annotated type.
pub fn setter_nullable(method: &AccessorDecl) -> Result<bool> {
    if method.params.len() != 1 {
        return Err(TypeInfoError::InvalidSetterArity {
            name: method.name.clone(),
            arity: method.params.len(),
        });
    }
    let param = &method.params[0];
    Ok(any_nullable(param.markers.iter().chain(param.type_markers.iter())))
}
