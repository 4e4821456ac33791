// Declaration-side data model. No descriptor logic here.
//!
//! Everything a host front-end (derive macro, build script, sidecar table)
//! must hand us about a record-like type: type expressions with their erased
//! heads, generic-parameter bindings, markers (annotations), and the three
//! declaration shapes (direct member, accessor method, parameter).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ------------------------------ Marker kinds ------------------------------ //

/// Explicit field-name override; literal value is the external name.
pub const FIELD_NAME_MARKER: &str = "SchemaFieldName";
/// Case-format override; literal value names a [`crate::naming::CaseFormat`].
pub const CASE_FORMAT_MARKER: &str = "SchemaCaseFormat";
/// Explicit field-number override; literal value parses as `u32`.
pub const FIELD_NUMBER_MARKER: &str = "SchemaFieldNumber";
/// Human-readable field description; literal value is the description.
pub const DESCRIPTION_MARKER: &str = "SchemaFieldDescription";
/// Nullability marker, matched on designator only (any namespace).
pub const NULLABLE_MARKER: &str = "Nullable";

// ------------------------------ Type model -------------------------------- //

/// Erased head identity of a type expression (what survives generic erasure).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RawType {
    Bool,
    Int32,
    Int64,
    Float32,
    Float64,
    Str,
    Bytes,
    List,
    Set,
    Iterable,
    Map,
    Array,
    /// Sentinel head for tagged-union ("one of") values.
    UnionValue,
    /// Erasure of an unresolved type variable or a raw container argument.
    Opaque,
    /// User records and anything else, by name.
    Named(String),
}

impl fmt::Display for RawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawType::Bool => write!(f, "Bool"),
            RawType::Int32 => write!(f, "Int32"),
            RawType::Int64 => write!(f, "Int64"),
            RawType::Float32 => write!(f, "Float32"),
            RawType::Float64 => write!(f, "Float64"),
            RawType::Str => write!(f, "Str"),
            RawType::Bytes => write!(f, "Bytes"),
            RawType::List => write!(f, "List"),
            RawType::Set => write!(f, "Set"),
            RawType::Iterable => write!(f, "Iterable"),
            RawType::Map => write!(f, "Map"),
            RawType::Array => write!(f, "Array"),
            RawType::UnionValue => write!(f, "UnionValue"),
            RawType::Opaque => write!(f, "Opaque"),
            RawType::Named(n) => write!(f, "{n}"),
        }
    }
}

/// A declared type expression, possibly containing unbound type variables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TypeExpr {
    /// Unbound generic type variable, e.g. `T`.
    Var(String),
    /// A named type applied to zero or more type arguments.
    Apply { raw: RawType, args: Vec<TypeExpr> },
    /// Native array of an element type.
    Array(Box<TypeExpr>),
}

impl TypeExpr {
    /// Non-generic named type (`Apply` with no arguments).
    pub fn simple(raw: RawType) -> Self {
        TypeExpr::Apply { raw, args: Vec::new() }
    }

    pub fn var(name: impl Into<String>) -> Self {
        TypeExpr::Var(name.into())
    }

    pub fn generic(raw: RawType, args: Vec<TypeExpr>) -> Self {
        TypeExpr::Apply { raw, args }
    }

    /// The erased head of this expression. Variables that survived
    /// resolution erase to [`RawType::Opaque`].
    pub fn raw(&self) -> RawType {
        match self {
            TypeExpr::Var(_) => RawType::Opaque,
            TypeExpr::Apply { raw, .. } => raw.clone(),
            TypeExpr::Array(_) => RawType::Array,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Var(v) => write!(f, "{v}"),
            TypeExpr::Apply { raw, args } => {
                write!(f, "{raw}")?;
                if !args.is_empty() {
                    write!(f, "<")?;
                    for (i, a) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{a}")?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
            TypeExpr::Array(el) => write!(f, "{el}[]"),
        }
    }
}

/// Type-variable name → concrete type substituted for it in one context.
pub type Bindings = BTreeMap<String, TypeExpr>;

// ------------------------------- Markers ---------------------------------- //

/// One annotation occurrence at some declaration site.
///
/// Recognition is duck-typed on `designator` (the simple name); `path` is the
/// defining namespace and is informational only. This keeps nullability
/// markers from any ecosystem working without a registry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Defining namespace, e.g. `org.example.annotations`. Never matched on.
    pub path: String,
    /// Simple name, e.g. `Nullable` or `SchemaFieldName`.
    pub designator: String,
    /// Optional literal payload.
    pub value: Option<String>,
}

impl Marker {
    pub fn new(path: impl Into<String>, designator: impl Into<String>) -> Self {
        Marker { path: path.into(), designator: designator.into(), value: None }
    }

    pub fn with_value(
        path: impl Into<String>,
        designator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Marker {
            path: path.into(),
            designator: designator.into(),
            value: Some(value.into()),
        }
    }
}

/// First marker with the given designator, if any.
pub fn find_marker<'a>(markers: &'a [Marker], designator: &str) -> Option<&'a Marker> {
    markers.iter().find(|m| m.designator == designator)
}

// ----------------------------- Declarations ------------------------------- //

/// A direct structural member of a record-like type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberDecl {
    /// Natural declared name (default convention: lower camel).
    pub name: String,
    /// Declared type expression, possibly generic.
    pub ty: TypeExpr,
    /// Markers on the member itself.
    pub markers: Vec<Marker>,
    /// Markers on the member's annotated type.
    pub type_markers: Vec<Marker>,
    /// Markers on the record declaring this member.
    pub declaring_markers: Vec<Marker>,
}

impl MemberDecl {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        MemberDecl {
            name: name.into(),
            ty,
            markers: Vec::new(),
            type_markers: Vec::new(),
            declaring_markers: Vec::new(),
        }
    }
}

/// One parameter of an accessor method.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamDecl {
    pub ty: TypeExpr,
    /// Markers on the parameter itself.
    pub markers: Vec<Marker>,
    /// Markers on the parameter's annotated type.
    pub type_markers: Vec<Marker>,
}

impl ParamDecl {
    pub fn new(ty: TypeExpr) -> Self {
        ParamDecl { ty, markers: Vec::new(), type_markers: Vec::new() }
    }
}

/// An accessor method (getter or setter shape).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessorDecl {
    /// Declared method name including its `get`/`is`/`set` prefix.
    pub name: String,
    /// Return type; `None` for void methods.
    pub return_ty: Option<TypeExpr>,
    /// Markers on the annotated return type.
    pub return_type_markers: Vec<Marker>,
    pub params: Vec<ParamDecl>,
    /// Markers on the accessor itself.
    pub markers: Vec<Marker>,
    /// Markers on the record declaring this accessor.
    pub declaring_markers: Vec<Marker>,
}

impl AccessorDecl {
    /// Zero-argument accessor returning `ty`.
    pub fn getter(name: impl Into<String>, ty: TypeExpr) -> Self {
        AccessorDecl {
            name: name.into(),
            return_ty: Some(ty),
            return_type_markers: Vec::new(),
            params: Vec::new(),
            markers: Vec::new(),
            declaring_markers: Vec::new(),
        }
    }

    /// Void accessor taking the given parameters.
    pub fn setter(name: impl Into<String>, params: Vec<ParamDecl>) -> Self {
        AccessorDecl {
            name: name.into(),
            return_ty: None,
            return_type_markers: Vec::new(),
            params,
            markers: Vec::new(),
            declaring_markers: Vec::new(),
        }
    }
}

// ------------------------------- Tests ------------------------------------ //
