use super::*;

#[test]
fn strips_disallowed_keys_at_every_depth() {
    let schema = serde_json::json!({
        "type": "object",
        "$schema": "http://json-schema.org/draft-07/schema#",
        "$id": "root",
        "additionalProperties": false,
        "properties": {
            "nested": {
                "type": "object",
                "patternProperties": {"^x-": {"type": "string"}},
                "additionalProperties": false,
            }
        }
    });

    let cleaned = sanitize_schema(&schema);

    assert!(cleaned.get("$schema").is_none());
    assert!(cleaned.get("$id").is_none());
    assert!(cleaned.get("additionalProperties").is_none());
    let nested = &cleaned["properties"]["nested"];
    assert!(nested.get("patternProperties").is_none());
    assert!(nested.get("additionalProperties").is_none());
    assert_eq!(nested["type"], "object");
}

#[test]
fn leaves_ordinary_schemas_untouched() {
    let schema = serde_json::json!({"type": "string"});
    assert_eq!(sanitize_schema(&schema), schema);
}
