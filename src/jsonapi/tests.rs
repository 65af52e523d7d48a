//! Tests for the JSON:API codec

use super::*;
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct Attrs {
    name: String,
    #[serde(default)]
    auto_apply: bool,
}

#[test]
fn test_decode_single_resource() {
    let body = json!({
        "data": {
            "id": "ws-123",
            "type": "workspaces",
            "attributes": {"name": "prod", "auto-apply": true},
            "relationships": {
                "organization": {"data": {"id": "acme", "type": "organizations"}},
                "current-run": {"data": null},
                "remote-state-consumers": {"links": {"related": "/api/v2/x"}}
            }
        }
    });

    let doc: Document<Resource<Attrs>> = serde_json::from_value(body).unwrap();
    let ws = doc.data;
    assert_eq!(ws.id, "ws-123");
    assert_eq!(ws.kind, "workspaces");
    assert_eq!(
        ws.attributes,
        Attrs {
            name: "prod".to_string(),
            auto_apply: true
        }
    );
    assert_eq!(ws.related_id("organization"), Some("acme"));
    assert_eq!(ws.related_id("current-run"), None);
    assert_eq!(ws.related_id("remote-state-consumers"), None);
    assert_eq!(ws.related_id("missing"), None);
    assert!(doc.meta.is_none());
}

#[test]
fn test_decode_list_with_pagination() {
    let body = json!({
        "data": [
            {"id": "ws-1", "type": "workspaces", "attributes": {"name": "a"}},
            {"id": "ws-2", "type": "workspaces", "attributes": {"name": "b"}}
        ],
        "meta": {
            "pagination": {
                "current-page": 1,
                "prev-page": null,
                "next-page": 2,
                "total-pages": 2,
                "total-count": 3
            }
        }
    });

    let doc: Document<Vec<Resource<Attrs>>> = serde_json::from_value(body).unwrap();
    assert_eq!(doc.data.len(), 2);
    let pagination = doc.meta.unwrap().pagination.unwrap();
    assert_eq!(pagination.current_page, 1);
    assert_eq!(pagination.next_page, Some(2));
    assert_eq!(pagination.prev_page, None);
    assert_eq!(pagination.total_count, 3);
}

#[test]
fn test_related_ids_to_many() {
    let body = json!({
        "id": "run-1",
        "type": "runs",
        "attributes": {"name": "x"},
        "relationships": {
            "policy-checks": {"data": [
                {"id": "polchk-1", "type": "policy-checks"},
                {"id": "polchk-2", "type": "policy-checks"}
            ]},
            "plan": {"data": {"id": "plan-1", "type": "plans"}}
        }
    });

    let run: Resource<Attrs> = serde_json::from_value(body).unwrap();
    assert_eq!(run.related_ids("policy-checks"), vec!["polchk-1", "polchk-2"]);
    assert_eq!(run.related_ids("plan"), vec!["plan-1"]);
    assert!(run.related_ids("nothing").is_empty());
    assert_eq!(run.related_id("policy-checks"), None);
}

#[test]
fn test_encode_new_resource() {
    let doc = NewResource::new(
        "runs",
        json!({"message": "triggered", "is-destroy": false}),
    )
    .relate("workspace", "workspaces", "ws-123")
    .into_document()
    .unwrap();

    assert_eq!(
        doc,
        json!({
            "data": {
                "type": "runs",
                "attributes": {"message": "triggered", "is-destroy": false},
                "relationships": {
                    "workspace": {"data": {"type": "workspaces", "id": "ws-123"}}
                }
            }
        })
    );
}

#[test]
fn test_encode_with_id_and_no_relationships() {
    let doc = NewResource::new("vars", json!({"key": "region"}))
        .with_id("var-1")
        .into_document()
        .unwrap();

    assert_eq!(
        doc,
        json!({"data": {"type": "vars", "id": "var-1", "attributes": {"key": "region"}}})
    );
}

#[test]
fn test_error_message_from_jsonapi_errors() {
    let body = r#"{"errors":[
        {"status":"422","title":"invalid attribute","detail":"Name has already been taken"},
        {"status":"422","title":"invalid attribute"}
    ]}"#;

    assert_eq!(
        error_message(body),
        "invalid attribute\n\nName has already been taken\ninvalid attribute"
    );
}

#[test]
fn test_error_message_falls_back_to_body() {
    assert_eq!(error_message("  Bad Gateway \n"), "Bad Gateway");
    assert_eq!(error_message(r#"{"errors":[]}"#), r#"{"errors":[]}"#);
    assert_eq!(error_message(""), "");
}
