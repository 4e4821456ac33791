//! Container-shape classification boundary.
//!
//! The descriptor builder does not hard-code which generic heads count as
//! sequences or maps; it asks a [`TypeIntrospector`]. Host front-ends with
//! richer type systems (subtyping, aliases, custom collections) implement the
//! trait; [`StandardIntrospector`] covers the structural built-ins and can be
//! widened with extra named heads.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

use crate::model::{RawType, TypeExpr};

/// Classification of container shapes, answered on *resolved* types.
pub trait TypeIntrospector {
    /// If `ty` is a sequence/iterable shape, its element type.
    fn sequence_element(&self, ty: &TypeExpr) -> Option<TypeExpr>;

    /// If `ty` is an associative (map) shape, its key and value types.
    fn map_entry(&self, ty: &TypeExpr) -> Option<(TypeExpr, TypeExpr)>;
}

/// Default introspector.
///
/// Sequences: native arrays, `List`, `Set`, `Iterable`, plus any registered
/// named head with one type argument. Maps: `Map`, plus any registered named
/// head with two type arguments. Raw (argument-less) containers still
/// classify; their missing arguments come back as `Opaque`.
#[derive(Clone, Debug, Default)]
pub struct StandardIntrospector {
    sequence_heads: BTreeSet<String>,
    map_heads: BTreeSet<String>,
}

static SHARED: Lazy<StandardIntrospector> = Lazy::new(StandardIntrospector::default);

impl StandardIntrospector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared default instance with no extra heads registered.
    pub fn shared() -> &'static StandardIntrospector {
        &SHARED
    }

    /// Also treat `Named(head)` applications as sequences.
    pub fn with_sequence_head(mut self, head: impl Into<String>) -> Self {
        self.sequence_heads.insert(head.into());
        self
    }

    /// Also treat `Named(head)` applications as maps.
    pub fn with_map_head(mut self, head: impl Into<String>) -> Self {
        self.map_heads.insert(head.into());
        self
    }

    fn is_sequence_head(&self, raw: &RawType) -> bool {
        match raw {
            RawType::List | RawType::Set | RawType::Iterable => true,
            RawType::Named(n) => self.sequence_heads.contains(n),
            _ => false,
        }
    }

    fn is_map_head(&self, raw: &RawType) -> bool {
        match raw {
            RawType::Map => true,
            RawType::Named(n) => self.map_heads.contains(n),
            _ => false,
        }
    }
}

fn arg_or_opaque(args: &[TypeExpr], index: usize) -> TypeExpr {
    args.get(index)
        .cloned()
        .unwrap_or(TypeExpr::Apply { raw: RawType::Opaque, args: Vec::new() })
}

impl TypeIntrospector for StandardIntrospector {
    fn sequence_element(&self, ty: &TypeExpr) -> Option<TypeExpr> {
        match ty {
            TypeExpr::Array(el) => Some((**el).clone()),
            TypeExpr::Apply { raw, args } if self.is_sequence_head(raw) => {
                Some(arg_or_opaque(args, 0))
            }
            _ => None,
        }
    }

    fn map_entry(&self, ty: &TypeExpr) -> Option<(TypeExpr, TypeExpr)> {
        match ty {
            TypeExpr::Apply { raw, args } if self.is_map_head(raw) => {
                Some((arg_or_opaque(args, 0), arg_or_opaque(args, 1)))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intro() -> &'static StandardIntrospector {
        StandardIntrospector::shared()
    }

    #[test]
    fn builtin_sequence_heads_classify() {
        let el = TypeExpr::simple(RawType::Int32);
        for raw in [RawType::List, RawType::Set, RawType::Iterable] {
            let t = TypeExpr::generic(raw, vec![el.clone()]);
            assert_eq!(intro().sequence_element(&t), Some(el.clone()));
            assert!(intro().map_entry(&t).is_none());
        }
        let arr = TypeExpr::Array(Box::new(el.clone()));
        assert_eq!(intro().sequence_element(&arr), Some(el));
    }

    #[test]
    fn map_yields_both_arguments() {
        let t = TypeExpr::generic(
            RawType::Map,
            vec![TypeExpr::simple(RawType::Str), TypeExpr::simple(RawType::Int64)],
        );
        assert_eq!(
            intro().map_entry(&t),
            Some((TypeExpr::simple(RawType::Str), TypeExpr::simple(RawType::Int64)))
        );
        assert!(intro().sequence_element(&t).is_none());
    }

    #[test]
    fn scalars_and_records_are_neither() {
        for t in [
            TypeExpr::simple(RawType::Str),
            TypeExpr::simple(RawType::Named("User".into())),
            TypeExpr::var("T"),
        ] {
            assert!(intro().sequence_element(&t).is_none());
            assert!(intro().map_entry(&t).is_none());
        }
    }

    #[test]
    fn raw_containers_classify_with_opaque_arguments() {
        let raw_list = TypeExpr::simple(RawType::List);
        assert_eq!(
            intro().sequence_element(&raw_list),
            Some(TypeExpr::simple(RawType::Opaque))
        );
        let raw_map = TypeExpr::simple(RawType::Map);
        let (k, v) = intro().map_entry(&raw_map).unwrap();
        assert_eq!(k, TypeExpr::simple(RawType::Opaque));
        assert_eq!(v, TypeExpr::simple(RawType::Opaque));
    }

    #[test]
    fn named_heads_are_extensible() {
        let custom = StandardIntrospector::new()
            .with_sequence_head("ImmutableList")
            .with_map_head("SortedDict");
        let seq = TypeExpr::generic(
            RawType::Named("ImmutableList".into()),
            vec![TypeExpr::simple(RawType::Bool)],
        );
        assert_eq!(custom.sequence_element(&seq), Some(TypeExpr::simple(RawType::Bool)));
        assert!(intro().sequence_element(&seq).is_none(), "default does not know it");

        let map = TypeExpr::generic(
            RawType::Named("SortedDict".into()),
            vec![TypeExpr::simple(RawType::Str), TypeExpr::simple(RawType::Str)],
        );
        assert!(custom.map_entry(&map).is_some());
    }
}
