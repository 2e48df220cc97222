use serde_json::{Map, Value};

use crate::error::Result;
use crate::node::{Node, NodeKind};
use crate::visitor::{visit_root, Scalar, Visitor};

/// Render a tree as FHIR JSON.
///
/// Resources carry `resourceType`, repeated fields become arrays and a
/// primitive's `id`/`extension` move to the `_field` companion property.
pub fn to_json<N: Node + ?Sized>(node: &N) -> Value {
    let mut writer = JsonWriter::default();
    visit_root(node, &mut writer);
    writer.root.unwrap_or(Value::Null)
}

pub fn to_json_string<N: Node + ?Sized>(node: &N) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_json(node))?)
}

struct Frame {
    primitive: bool,
    value: Option<Value>,
    properties: Map<String, Value>,
}

#[derive(Default)]
struct JsonWriter {
    stack: Vec<Frame>,
    root: Option<Value>,
}

impl Visitor for JsonWriter {
    fn visit_start(&mut self, _name: &str, _index: Option<usize>, node: &dyn Node) {
        let mut properties = Map::new();
        if node.kind() == NodeKind::Resource {
            properties.insert("resourceType".into(), Value::String(node.type_name().into()));
        }
        self.stack.push(Frame {
            primitive: node.kind() == NodeKind::Primitive,
            value: None,
            properties,
        });
    }

    fn visit_value(&mut self, name: &str, value: Scalar<'_>) {
        let Some(frame) = self.stack.last_mut() else {
            return;
        };
        if frame.primitive && name == "value" {
            frame.value = Some(value.to_json());
        } else {
            frame.properties.insert(name.to_string(), value.to_json());
        }
    }

    fn visit_end(&mut self, name: &str, index: Option<usize>, _node: &dyn Node) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        let (main, companion) = frame.finish();
        match self.stack.last_mut() {
            Some(parent) => {
                // `null` only stands in for a missing value inside an array
                match (main, index) {
                    (Some(main), _) => insert(&mut parent.properties, name, index, main),
                    (None, Some(_)) => insert(&mut parent.properties, name, index, Value::Null),
                    (None, None) => {}
                }
                if let Some(companion) = companion {
                    insert(&mut parent.properties, &format!("_{name}"), index, companion);
                }
            }
            None => self.root = main.or(companion),
        }
    }
}

impl Frame {
    /// Main property value and, for primitives, the `_field` companion.
    fn finish(mut self) -> (Option<Value>, Option<Value>) {
        align_companions(&mut self.properties);
        if self.primitive {
            let companion = (!self.properties.is_empty()).then(|| Value::Object(self.properties));
            (self.value, companion)
        } else {
            (Some(Value::Object(self.properties)), None)
        }
    }
}

fn insert(properties: &mut Map<String, Value>, name: &str, index: Option<usize>, value: Value) {
    let Some(index) = index else {
        properties.insert(name.to_string(), value);
        return;
    };
    let slot = properties
        .entry(name.to_string())
        .or_insert_with(|| Value::Array(Vec::new()));
    if let Value::Array(items) = slot {
        if items.len() < index {
            items.resize(index, Value::Null);
        }
        items.push(value);
    }
}

/// `_field` arrays must line up with their `field` arrays.
fn align_companions(properties: &mut Map<String, Value>) {
    let lengths: Vec<(String, usize)> = properties
        .iter()
        .filter_map(|(key, value)| match value {
            Value::Array(items) if !key.starts_with('_') => Some((format!("_{key}"), items.len())),
            _ => None,
        })
        .collect();
    for (companion, len) in lengths {
        if let Some(Value::Array(items)) = properties.get_mut(&companion) {
            items.resize(len, Value::Null);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::{Coding, Extension, Meta, Period};
    use crate::primitive::{Canonical, Code, DateTime, DateTimeValue, FhirString, Uri};
    use serde_json::json;

    fn extension() -> Extension {
        Extension::builder()
            .url(Uri::new("http://example.org/ext").unwrap())
            .value(FhirString::new("note").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_complex_datatype() {
        let coding = Coding::builder()
            .system(Uri::new("http://loinc.org").unwrap())
            .code(Code::new("1234-5").unwrap())
            .build()
            .unwrap();
        assert_eq!(
            to_json(&coding),
            json!({"system": "http://loinc.org", "code": "1234-5"})
        );
    }

    #[test]
    fn test_choice_value_uses_qualified_name() {
        assert_eq!(
            to_json(&extension()),
            json!({"url": "http://example.org/ext", "valueString": "note"})
        );
    }

    #[test]
    fn test_primitive_companion() {
        let start = DateTime::builder()
            .id("s1")
            .value("2024-03-01".parse::<DateTimeValue>().unwrap())
            .build()
            .unwrap();
        let period = Period::builder().start(start).build().unwrap();
        assert_eq!(
            to_json(&period),
            json!({"start": "2024-03-01", "_start": {"id": "s1"}})
        );
    }

    #[test]
    fn test_primitive_without_value_writes_only_companion() {
        let absent = Extension::builder()
            .url(Uri::new("http://hl7.org/fhir/StructureDefinition/data-absent-reason").unwrap())
            .value(Code::new("unknown").unwrap())
            .build()
            .unwrap();
        let start = DateTime::builder().extension([absent]).build().unwrap();
        let period = Period::builder().start(start).build().unwrap();

        let value = to_json(&period);
        assert!(value.get("start").is_none());
        assert_eq!(
            value,
            json!({
                "_start": {
                    "extension": [{
                        "url": "http://hl7.org/fhir/StructureDefinition/data-absent-reason",
                        "valueCode": "unknown"
                    }]
                }
            })
        );
    }

    #[test]
    fn test_repeated_primitive_without_value_keeps_null_slot() {
        let extended = Canonical::builder().extension([extension()]).build().unwrap();
        let plain = Canonical::new("http://example.org/a").unwrap();
        let meta = Meta::builder().profile([extended, plain]).build().unwrap();

        let value = to_json(&meta);
        assert_eq!(value["profile"], json!([null, "http://example.org/a"]));
        assert_eq!(value["_profile"][1], Value::Null);
    }

    #[test]
    fn test_repeated_primitive_companion_is_padded() {
        let plain = Canonical::new("http://example.org/a").unwrap();
        let extended = Canonical::builder()
            .value("http://example.org/b".to_string())
            .extension([extension()])
            .build()
            .unwrap();
        let meta = Meta::builder().profile([extended, plain]).build().unwrap();

        let value = to_json(&meta);
        assert_eq!(value["profile"], json!(["http://example.org/b", "http://example.org/a"]));
        assert_eq!(value["_profile"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["_profile"][1], Value::Null);
        assert_eq!(
            value["_profile"][0]["extension"][0]["url"],
            json!("http://example.org/ext")
        );
    }

    #[test]
    fn test_to_json_string() {
        let text = to_json_string(&extension()).unwrap();
        assert!(text.contains("\"valueString\": \"note\""));
    }
}
