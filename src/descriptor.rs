//! The field descriptor value and its construction pipeline.
//!
//! Every entry point runs the same pipeline: resolve the declared type
//! against the binding map, resolve the external name/number, detect
//! nullability, decompose container/map shapes recursively, read the
//! description marker, build. Construction either fully succeeds or fails;
//! no partial descriptor escapes.

use indexmap::IndexMap;

use crate::error::{Result, TypeInfoError};
use crate::introspect::TypeIntrospector;
use crate::model::{AccessorDecl, Bindings, MemberDecl, RawType, TypeExpr};
use crate::naming;
use crate::nullability;
use crate::resolve::resolve_type;

/// Recognized getter prefixes, tried in order.
const GETTER_PREFIXES: [&str; 2] = ["get", "is"];
/// Default setter prefix.
pub const DEFAULT_SETTER_PREFIX: &str = "set";

/// Where a descriptor came from.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldSource {
    /// Backed by a direct structural member.
    Member(MemberDecl),
    /// Backed by a getter or setter method.
    Accessor(AccessorDecl),
    /// Produced during decomposition or union synthesis; no declaration site.
    Synthesized,
}

/// Normalized, recursive description of one schema field.
///
/// Immutable after construction; `raw` is always the erasure of `declared`,
/// and at most one of {element, key+value, variants} is populated.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDescriptor {
    number: Option<u32>,
    name: String,
    nullable: bool,
    declared: TypeExpr,
    raw: RawType,
    source: FieldSource,
    variants: IndexMap<String, FieldDescriptor>,
    element: Option<Box<FieldDescriptor>>,
    key: Option<Box<FieldDescriptor>>,
    value: Option<Box<FieldDescriptor>>,
    description: Option<String>,
}

impl FieldDescriptor {
    // ------------------------- construction ------------------------------- //

    /// Descriptor for a direct member. `index` is the zero-based declaration
    /// order and becomes the number unless an explicit marker overrides it.
    pub fn for_member(
        member: &MemberDecl,
        index: u32,
        bindings: &Bindings,
        intro: &dyn TypeIntrospector,
    ) -> Result<FieldDescriptor> {
        let declared = resolve_type(&member.ty, bindings);
        let name = naming::resolved_name(
            &member.name,
            &member.markers,
            &member.declaring_markers,
            &member.name,
        )?;
        let number = naming::resolved_number(index, &member.markers, &member.name)?;
        let (element, key, value) = decompose(&declared, bindings, intro);
        Ok(FieldDescriptor {
            number: Some(number),
            name,
            nullable: nullability::member_nullable(member),
            raw: declared.raw(),
            declared,
            source: FieldSource::Member(member.clone()),
            variants: IndexMap::new(),
            element,
            key,
            value,
            description: naming::description(&member.markers),
        })
    }

    /// Descriptor for a zero-argument accessor. The natural name is the
    /// method name with its `get`/`is` prefix stripped.
    pub fn for_getter(
        method: &AccessorDecl,
        index: u32,
        bindings: &Bindings,
        intro: &dyn TypeIntrospector,
    ) -> Result<FieldDescriptor> {
        let natural = GETTER_PREFIXES
            .iter()
            .find_map(|p| naming::strip_accessor_prefix(&method.name, p))
            .ok_or_else(|| TypeInfoError::InvalidAccessorName {
                name: method.name.clone(),
                expected: GETTER_PREFIXES.iter().map(|p| p.to_string()).collect(),
            })?;
        let return_ty = method
            .return_ty
            .as_ref()
            .ok_or_else(|| TypeInfoError::MissingReturnType { name: method.name.clone() })?;
        let declared = resolve_type(return_ty, bindings);
        let name = naming::resolved_name(
            &natural,
            &method.markers,
            &method.declaring_markers,
            &method.name,
        )?;
        let number = naming::resolved_number(index, &method.markers, &method.name)?;
        let (element, key, value) = decompose(&declared, bindings, intro);
        Ok(FieldDescriptor {
            number: Some(number),
            name,
            nullable: nullability::getter_nullable(method),
            raw: declared.raw(),
            declared,
            source: FieldSource::Accessor(method.clone()),
            variants: IndexMap::new(),
            element,
            key,
            value,
            description: naming::description(&method.markers),
        })
    }

    /// Descriptor for a single-argument accessor with the default `set`
    /// prefix.
    pub fn for_setter(
        method: &AccessorDecl,
        bindings: &Bindings,
        intro: &dyn TypeIntrospector,
    ) -> Result<FieldDescriptor> {
        Self::for_setter_with_prefix(method, DEFAULT_SETTER_PREFIX, bindings, intro)
    }

    /// Descriptor for a single-argument accessor with a caller-supplied
    /// prefix. Setters are not assigned an ordinal, and the override ladder
    /// does not apply on this path.
    pub fn for_setter_with_prefix(
        method: &AccessorDecl,
        prefix: &str,
        bindings: &Bindings,
        intro: &dyn TypeIntrospector,
    ) -> Result<FieldDescriptor> {
        let natural = naming::strip_accessor_prefix(&method.name, prefix).ok_or_else(|| {
            TypeInfoError::InvalidAccessorName {
                name: method.name.clone(),
                expected: vec![prefix.to_string()],
            }
        })?;
        // validates the single-parameter arity as a side condition
        let nullable = nullability::setter_nullable(method)?;
        let declared = resolve_type(&method.params[0].ty, bindings);
        let (element, key, value) = decompose(&declared, bindings, intro);
        Ok(FieldDescriptor {
            number: None,
            name: natural,
            nullable,
            raw: declared.raw(),
            declared,
            source: FieldSource::Accessor(method.clone()),
            variants: IndexMap::new(),
            element,
            key,
            value,
            description: None,
        })
    }

    /// Descriptor for a tagged-union field. The variants mapping is stored
    /// verbatim, insertion order included; no decomposition is attempted.
    pub fn for_one_of(
        name: impl Into<String>,
        nullable: bool,
        variants: IndexMap<String, FieldDescriptor>,
    ) -> FieldDescriptor {
        let declared = TypeExpr::simple(RawType::UnionValue);
        FieldDescriptor {
            number: None,
            name: name.into(),
            nullable,
            raw: declared.raw(),
            declared,
            source: FieldSource::Synthesized,
            variants,
            element: None,
            key: None,
            value: None,
            description: None,
        }
    }

    /// Copy with only the name replaced.
    pub fn with_name(&self, name: impl Into<String>) -> FieldDescriptor {
        FieldDescriptor { name: name.into(), ..self.clone() }
    }

    // --------------------------- accessors -------------------------------- //

    /// Declared or inferred ordinal; absent for setters and synthesized
    /// descriptors.
    pub fn number(&self) -> Option<u32> {
        self.number
    }

    /// Externally visible field name; empty for synthesized sub-descriptors.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// Declared type after generic resolution.
    pub fn declared(&self) -> &TypeExpr {
        &self.declared
    }

    /// Erasure of [`Self::declared`].
    pub fn raw(&self) -> &RawType {
        &self.raw
    }

    pub fn source(&self) -> &FieldSource {
        &self.source
    }

    /// Tagged-union variants; empty unless built by [`Self::for_one_of`].
    pub fn variants(&self) -> &IndexMap<String, FieldDescriptor> {
        &self.variants
    }

    /// Element shape when the raw type is a sequence.
    pub fn element(&self) -> Option<&FieldDescriptor> {
        self.element.as_deref()
    }

    /// Key shape when the raw type is a map. Present iff [`Self::value`] is.
    pub fn key(&self) -> Option<&FieldDescriptor> {
        self.key.as_deref()
    }

    /// Value shape when the raw type is a map. Present iff [`Self::key`] is.
    pub fn value(&self) -> Option<&FieldDescriptor> {
        self.value.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

// --------------------------- decomposition -------------------------------- //

type SubShapes = (
    Option<Box<FieldDescriptor>>,
    Option<Box<FieldDescriptor>>,
    Option<Box<FieldDescriptor>>,
);

/// Derive (element, key, value) sub-descriptors for an already-resolved type.
/// A type classifies as at most one of sequence/map, so at most one side is
/// populated.
fn decompose(ty: &TypeExpr, bindings: &Bindings, intro: &dyn TypeIntrospector) -> SubShapes {
    if let Some(el) = intro.sequence_element(ty) {
        let el = resolve_type(&el, bindings);
        return (Some(Box::new(synthesized(el, bindings, intro))), None, None);
    }
    if let Some((k, v)) = intro.map_entry(ty) {
        let k = resolve_type(&k, bindings);
        let v = resolve_type(&v, bindings);
        return (
            None,
            Some(Box::new(synthesized(k, bindings, intro))),
            Some(Box::new(synthesized(v, bindings, intro))),
        );
    }
    (None, None, None)
}

/// Sub-descriptor describing a type shape rather than a named field: empty
/// name, no number, not nullable, no declaration site. Recursion descends one
/// layer of the generic structure per call.
fn synthesized(declared: TypeExpr, bindings: &Bindings, intro: &dyn TypeIntrospector) -> FieldDescriptor {
    let (element, key, value) = decompose(&declared, bindings, intro);
    FieldDescriptor {
        number: None,
        name: String::new(),
        nullable: false,
        raw: declared.raw(),
        declared,
        source: FieldSource::Synthesized,
        variants: IndexMap::new(),
        element,
        key,
        value,
        description: None,
    }
}

// ------------------------------- Tests ------------------------------------ //
