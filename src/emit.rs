//! Compact JSON view of a descriptor tree. Debug/inspection surface only;
//! schema use (coercion, row encoding) happens elsewhere.

use serde_json::{json, Value};

use crate::descriptor::FieldDescriptor;

/// Render a descriptor and its sub-shapes as a self-describing JSON object.
/// Optional attributes are omitted rather than emitted as null.
pub fn descriptor_json(d: &FieldDescriptor) -> Value {
    let mut o = json!({
        "name": d.name(),
        "nullable": d.nullable(),
        "type": d.declared().to_string(),
        "raw": d.raw().to_string(),
    });

    if let Some(n) = d.number() {
        o["number"] = Value::from(n);
    }
    if let Some(desc) = d.description() {
        o["description"] = Value::from(desc);
    }
    if let Some(el) = d.element() {
        o["element"] = descriptor_json(el);
    }
    if let (Some(k), Some(v)) = (d.key(), d.value()) {
        o["key"] = descriptor_json(k);
        o["value"] = descriptor_json(v);
    }
    if !d.variants().is_empty() {
        let mut m = serde_json::Map::new();
        for (tag, vd) in d.variants() {
            m.insert(tag.clone(), descriptor_json(vd));
        }
        o["oneOf"] = Value::Object(m);
    }

    o
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspect::StandardIntrospector;
    use crate::model::{Bindings, MemberDecl, RawType, TypeExpr};
    use indexmap::IndexMap;

    #[test]
    fn nested_shapes_appear_in_the_view() {
        let m = MemberDecl::new(
            "tags",
            TypeExpr::generic(
                RawType::List,
                vec![TypeExpr::generic(
                    RawType::Map,
                    vec![TypeExpr::simple(RawType::Str), TypeExpr::simple(RawType::Int32)],
                )],
            ),
        );
        let d = FieldDescriptor::for_member(
            &m,
            0,
            &Bindings::new(),
            StandardIntrospector::shared(),
        )
        .unwrap();
        let v = descriptor_json(&d);
        assert_eq!(v["name"], "tags");
        assert_eq!(v["number"], 0);
        assert_eq!(v["raw"], "List");
        assert_eq!(v["type"], "List<Map<Str, Int32>>");
        assert_eq!(v["element"]["raw"], "Map");
        assert_eq!(v["element"]["key"]["raw"], "Str");
        assert_eq!(v["element"]["value"]["raw"], "Int32");
        // scalar leaf carries no shape keys
        assert!(v["element"]["key"].get("element").is_none());
    }

    #[test]
    fn union_view_lists_variants_in_order() {
        let intro = StandardIntrospector::shared();
        let b = Bindings::new();
        let int_d = FieldDescriptor::for_member(
            &MemberDecl::new("intVal", TypeExpr::simple(RawType::Int32)),
            0,
            &b,
            intro,
        )
        .unwrap();
        let str_d = FieldDescriptor::for_member(
            &MemberDecl::new("strVal", TypeExpr::simple(RawType::Str)),
            1,
            &b,
            intro,
        )
        .unwrap();
        let mut variants = IndexMap::new();
        variants.insert("intVal".to_string(), int_d);
        variants.insert("strVal".to_string(), str_d);
        let d = FieldDescriptor::for_one_of("payload", true, variants);

        let v = descriptor_json(&d);
        assert_eq!(v["raw"], "UnionValue");
        assert_eq!(v["nullable"], true);
        let tags: Vec<&String> = v["oneOf"].as_object().unwrap().keys().collect();
        assert_eq!(tags, vec!["intVal", "strVal"]);
        assert!(v.get("number").is_none(), "absent number stays absent");
    }
}
