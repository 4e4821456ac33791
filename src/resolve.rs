//! Generic type resolution: substitute bound type variables through a
//! declared type expression. Pure tree-to-tree, single pass.

use crate::model::{Bindings, TypeExpr};

/// Substitute every variable in `ty` that the binding map knows about.
///
/// Unbound variables are returned unchanged (best effort, not an error): the
/// caller may be resolving against a partially instantiated generic context.
pub fn resolve_type(ty: &TypeExpr, bindings: &Bindings) -> TypeExpr {
    match ty {
        TypeExpr::Var(v) => bindings.get(v).cloned().unwrap_or_else(|| ty.clone()),
        TypeExpr::Apply { raw, args } => TypeExpr::Apply {
            raw: raw.clone(),
            args: args.iter().map(|a| resolve_type(a, bindings)).collect(),
        },
        TypeExpr::Array(el) => TypeExpr::Array(Box::new(resolve_type(el, bindings))),
    }
}
