//! Tests for the resource facades

use super::*;
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::http::RateLimiterConfig;
use crate::pagination::ListOptions;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, header, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_ping(server: &MockServer, headers: &[(&str, &str)]) {
    let mut response = ResponseTemplate::new(204);
    for (name, value) in headers {
        response = response.insert_header(*name, *value);
    }
    Mock::given(method("GET"))
        .and(path("/api/v2/ping"))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn connect(server: &MockServer) -> Client {
    mount_ping(server, &[("TFP-API-Version", "2.6")]).await;
    Client::connect(ClientConfig::new("test-token").with_address(server.uri()))
        .await
        .unwrap()
}

fn jsonapi(status: u16, body: Value) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .insert_header("Content-Type", "application/vnd.api+json")
        .set_body_json(body)
}

fn organization(name: &str) -> Value {
    json!({
        "id": name,
        "type": "organizations",
        "attributes": {"name": name, "email": format!("ops@{name}.test")}
    })
}

// ============================================================================
// Client
// ============================================================================

#[tokio::test]
async fn test_connect_reads_ping_metadata() {
    let server = MockServer::start().await;
    mount_ping(
        &server,
        &[
            ("TFP-API-Version", "2.6"),
            ("TFP-AppName", "Terraform Enterprise"),
            ("X-TFE-Version", "v202410-1"),
            ("X-RateLimit-Limit", "30"),
        ],
    )
    .await;

    let client = Client::connect(ClientConfig::new("test-token").with_address(server.uri()))
        .await
        .unwrap();

    assert_eq!(client.remote_api_version(), Some("2.6"));
    assert_eq!(client.app_name(), Some("Terraform Enterprise"));
    assert_eq!(client.remote_tfe_version(), Some("v202410-1"));
    assert!(!client.is_cloud());
    assert_eq!(
        client.metadata().rate_limit,
        Some(RateLimiterConfig::new(19, 9))
    );
    assert!(client.http().has_rate_limiter());
}

#[tokio::test]
async fn test_connect_without_advertised_limit_does_not_throttle() {
    let server = MockServer::start().await;
    mount_ping(&server, &[("TFP-AppName", "HCP Terraform")]).await;

    let client = Client::connect(ClientConfig::new("test-token").with_address(server.uri()))
        .await
        .unwrap();

    assert!(client.is_cloud());
    assert!(!client.http().has_rate_limiter());
}

#[tokio::test]
async fn test_connect_sends_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/ping"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    Client::connect(ClientConfig::new("test-token").with_address(server.uri()))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_connect_requires_token() {
    let result = Client::connect(ClientConfig::default()).await;
    assert!(matches!(result, Err(Error::MissingConfigField { .. })));
}

#[tokio::test]
async fn test_connect_rejects_bad_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/ping"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = Client::connect(ClientConfig::new("expired").with_address(server.uri())).await;
    assert!(matches!(result, Err(Error::Unauthorized)));
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_invalid_ids_never_reach_the_server() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(path_regex(r"^/api/v2/(applies|plans|runs|workspaces|policy-checks)"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    assert!(matches!(
        client.applies().read("../apply").await,
        Err(Error::InvalidId { resource: "apply" })
    ));
    assert!(matches!(
        client.plans().read("").await,
        Err(Error::InvalidId { resource: "plan" })
    ));
    assert!(matches!(
        client.runs().cancel("run 1", None).await,
        Err(Error::InvalidId { resource: "run" })
    ));
    assert!(matches!(
        client.workspaces().lock("ws/1", None).await,
        Err(Error::InvalidId { resource: "workspace" })
    ));
    assert!(matches!(
        client
            .policy_checks()
            .logs("pc?x", CancellationToken::new())
            .await,
        Err(Error::InvalidId {
            resource: "policy check"
        })
    ));
    assert!(matches!(
        client.organizations().read("acme corp").await,
        Err(Error::InvalidOrganization)
    ));
    assert!(matches!(
        client.workspaces().read("acme", "bad name").await,
        Err(Error::InvalidName)
    ));
}

// ============================================================================
// Organizations
// ============================================================================

#[tokio::test]
async fn test_organizations_list_all_follows_pages() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/organizations"))
        .and(query_param("page[number]", "2"))
        .respond_with(jsonapi(
            200,
            json!({
                "data": [organization("gamma")],
                "meta": {"pagination": {
                    "current-page": 2, "prev-page": 1, "next-page": null,
                    "total-pages": 2, "total-count": 3
                }}
            }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/organizations"))
        .respond_with(jsonapi(
            200,
            json!({
                "data": [organization("alpha"), organization("beta")],
                "meta": {"pagination": {
                    "current-page": 1, "prev-page": null, "next-page": 2,
                    "total-pages": 2, "total-count": 3
                }}
            }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let names: Vec<String> = client
        .organizations()
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.attributes.name)
        .collect();

    assert_eq!(names, vec!["alpha", "beta", "gamma"]);
}

#[tokio::test]
async fn test_organizations_list_single_page() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/organizations"))
        .and(query_param("page[size]", "1"))
        .respond_with(jsonapi(
            200,
            json!({
                "data": [organization("alpha")],
                "meta": {"pagination": {"current-page": 1, "next-page": 2, "total-pages": 3, "total-count": 3}}
            }),
        ))
        .mount(&server)
        .await;

    let page = client
        .organizations()
        .list(&ListOptions::new().size(1))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.pagination.unwrap().total_count, 3);
}

#[tokio::test]
async fn test_organization_create_requires_name_and_email() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    let missing_email = OrganizationCreateOptions {
        name: Some("acme".into()),
        ..Default::default()
    };
    assert!(matches!(
        client.organizations().create(missing_email).await,
        Err(Error::RequiredField { field: "email" })
    ));

    let missing_name = OrganizationCreateOptions {
        email: Some("ops@acme.test".into()),
        ..Default::default()
    };
    assert!(matches!(
        client.organizations().create(missing_name).await,
        Err(Error::RequiredField { field: "name" })
    ));

    let bad_name = OrganizationCreateOptions {
        name: Some("acme corp".into()),
        email: Some("ops@acme.test".into()),
        ..Default::default()
    };
    assert!(matches!(
        client.organizations().create(bad_name).await,
        Err(Error::InvalidName)
    ));
}

#[tokio::test]
async fn test_organization_create_sends_jsonapi_document() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/v2/organizations"))
        .and(body_json(json!({
            "data": {
                "type": "organizations",
                "attributes": {"name": "acme", "email": "ops@acme.test"}
            }
        })))
        .respond_with(jsonapi(201, json!({"data": organization("acme")})))
        .expect(1)
        .mount(&server)
        .await;

    let org = client
        .organizations()
        .create(OrganizationCreateOptions {
            name: Some("acme".into()),
            email: Some("ops@acme.test".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(org.id, "acme");
    assert_eq!(org.attributes.email, "ops@acme.test");
}

#[tokio::test]
async fn test_organization_read_not_found() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(matches!(
        client.organizations().read("ghost").await,
        Err(Error::ResourceNotFound)
    ));
}

// ============================================================================
// Workspaces
// ============================================================================

fn workspace(id: &str, name: &str, locked: bool) -> Value {
    json!({
        "id": id,
        "type": "workspaces",
        "attributes": {"name": name, "locked": locked, "auto-apply": false},
        "relationships": {"current-run": {"data": {"type": "runs", "id": "run-9"}}}
    })
}

#[tokio::test]
async fn test_workspaces_list_sends_search_filters() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/acme/workspaces"))
        .and(query_param("search[name]", "prod"))
        .and(query_param("search[tags]", "app,eu"))
        .respond_with(jsonapi(
            200,
            json!({"data": [workspace("ws-1", "prod-eu", false)]}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let options = WorkspaceListOptions {
        search: Some("prod".into()),
        tags: Some("app,eu".into()),
        ..Default::default()
    };
    let page = client.workspaces().list("acme", &options).await.unwrap();

    assert_eq!(page.items[0].attributes.name, "prod-eu");
    assert_eq!(page.items[0].current_run_id(), Some("run-9"));
    assert!(page.pagination.is_none());
}

#[tokio::test]
async fn test_workspace_lock_and_conflict() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/v2/workspaces/ws-1/actions/lock"))
        .and(body_json(json!({"reason": "maintenance"})))
        .respond_with(jsonapi(200, json!({"data": workspace("ws-1", "prod", true)})))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v2/workspaces/ws-1/actions/lock"))
        .respond_with(jsonapi(
            409,
            json!({"errors": [{"status": "409", "title": "conflict", "detail": "Unable to lock workspace. The workspace is already locked."}]}),
        ))
        .mount(&server)
        .await;

    let locked = client
        .workspaces()
        .lock("ws-1", Some("maintenance"))
        .await
        .unwrap();
    assert!(locked.attributes.locked);

    match client.workspaces().lock("ws-1", Some("maintenance")).await {
        Err(Error::Conflict { message }) => assert!(message.contains("already locked")),
        other => panic!("expected Conflict, got {other:?}"),
    }
}

#[tokio::test]
async fn test_workspace_update_and_delete() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("PATCH"))
        .and(path("/api/v2/organizations/acme/workspaces/prod"))
        .and(body_json(json!({
            "data": {"type": "workspaces", "attributes": {"auto-apply": true}}
        })))
        .respond_with(jsonapi(200, json!({"data": workspace("ws-1", "prod", false)})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/organizations/acme/workspaces/prod"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let options = WorkspaceUpdateOptions {
        auto_apply: Some(true),
        ..Default::default()
    };
    client
        .workspaces()
        .update("acme", "prod", options)
        .await
        .unwrap();
    client.workspaces().delete("acme", "prod").await.unwrap();
}

// ============================================================================
// Runs
// ============================================================================

#[tokio::test]
async fn test_run_create_relates_workspace() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/v2/runs"))
        .and(body_json(json!({
            "data": {
                "type": "runs",
                "attributes": {"message": "Queued from CI"},
                "relationships": {"workspace": {"data": {"type": "workspaces", "id": "ws-1"}}}
            }
        })))
        .respond_with(jsonapi(
            201,
            json!({"data": {
                "id": "run-1",
                "type": "runs",
                "attributes": {"status": "pending", "message": "Queued from CI"},
                "relationships": {
                    "workspace": {"data": {"type": "workspaces", "id": "ws-1"}},
                    "plan": {"data": {"type": "plans", "id": "plan-1"}},
                    "apply": {"data": null},
                    "policy-checks": {"data": [
                        {"type": "policy-checks", "id": "polchk-1"},
                        {"type": "policy-checks", "id": "polchk-2"}
                    ]}
                }
            }}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let run = client
        .runs()
        .create(RunCreateOptions {
            workspace_id: Some("ws-1".into()),
            message: Some("Queued from CI".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(run.attributes.status, RunStatus::Pending);
    assert!(!run.attributes.status.is_final());
    assert_eq!(run.workspace_id(), Some("ws-1"));
    assert_eq!(run.plan_id(), Some("plan-1"));
    assert_eq!(run.apply_id(), None);
    assert_eq!(run.policy_check_ids(), vec!["polchk-1", "polchk-2"]);
}

#[tokio::test]
async fn test_run_create_requires_workspace() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    assert!(matches!(
        client.runs().create(RunCreateOptions::default()).await,
        Err(Error::RequiredField { field: "workspace" })
    ));
}

#[tokio::test]
async fn test_run_actions() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/v2/runs/run-1/actions/apply"))
        .and(body_json(json!({"comment": "ship it"})))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    for action in ["cancel", "force-cancel", "discard"] {
        Mock::given(method("POST"))
            .and(path(format!("/api/v2/runs/run-1/actions/{action}")))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;
    }

    let runs = client.runs();
    runs.apply("run-1", Some("ship it")).await.unwrap();
    runs.cancel("run-1", None).await.unwrap();
    runs.force_cancel("run-1", None).await.unwrap();
    runs.discard("run-1", Some("not today")).await.unwrap();
}

// ============================================================================
// Variables
// ============================================================================

#[tokio::test]
async fn test_variable_create_requires_key_and_category() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    assert!(matches!(
        client
            .variables()
            .create("ws-1", VariableCreateOptions::default())
            .await,
        Err(Error::RequiredField { field: "key" })
    ));

    let no_category = VariableCreateOptions {
        key: Some("region".into()),
        ..Default::default()
    };
    assert!(matches!(
        client.variables().create("ws-1", no_category).await,
        Err(Error::RequiredField { field: "category" })
    ));
}

#[tokio::test]
async fn test_variable_create_and_update() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    let var = json!({"data": {
        "id": "var-1",
        "type": "vars",
        "attributes": {"key": "region", "value": "eu-west-1", "category": "terraform", "hcl": false, "sensitive": false}
    }});

    Mock::given(method("POST"))
        .and(path("/api/v2/workspaces/ws-1/vars"))
        .and(body_json(json!({
            "data": {"type": "vars", "attributes": {"key": "region", "value": "eu-west-1", "category": "terraform"}}
        })))
        .respond_with(jsonapi(201, var.clone()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/api/v2/workspaces/ws-1/vars/var-1"))
        .and(body_json(json!({
            "data": {"type": "vars", "id": "var-1", "attributes": {"sensitive": true}}
        })))
        .respond_with(jsonapi(200, var))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .variables()
        .create(
            "ws-1",
            VariableCreateOptions {
                key: Some("region".into()),
                value: Some("eu-west-1".into()),
                category: Some(VariableCategory::Terraform),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(created.attributes.category, VariableCategory::Terraform);

    client
        .variables()
        .update(
            "ws-1",
            "var-1",
            VariableUpdateOptions {
                sensitive: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
}

// ============================================================================
// Log-bearing resources
// ============================================================================

#[tokio::test]
async fn test_apply_read_decodes_status_and_timestamps() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/applies/apply-1"))
        .respond_with(jsonapi(
            200,
            json!({"data": {
                "id": "apply-1",
                "type": "applies",
                "attributes": {
                    "status": "finished",
                    "status-timestamps": {
                        "queued-at": "2024-05-01T10:00:00Z",
                        "finished-at": "2024-05-01T10:02:30Z"
                    },
                    "log-read-url": "https://archivist.example.com/v1/object/abc",
                    "resource-additions": 2,
                    "resource-changes": 1,
                    "resource-destructions": 0
                }
            }}),
        ))
        .mount(&server)
        .await;

    let apply = client.applies().read("apply-1").await.unwrap();
    let timestamps = &apply.attributes.status_timestamps;

    assert_eq!(apply.attributes.status, ApplyStatus::Finished);
    assert!(apply.attributes.status.is_terminal());
    assert_eq!(timestamps.len(), 2);
    let elapsed = timestamps.finished_at().unwrap() - timestamps.queued_at().unwrap();
    assert_eq!(elapsed.num_seconds(), 150);
    assert_eq!(apply.attributes.resource_additions, 2);
}

#[tokio::test]
async fn test_unknown_status_is_not_terminal() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/plans/plan-1"))
        .respond_with(jsonapi(
            200,
            json!({"data": {
                "id": "plan-1",
                "type": "plans",
                "attributes": {"status": "hibernating"}
            }}),
        ))
        .mount(&server)
        .await;

    let plan = client.plans().read("plan-1").await.unwrap();
    assert_eq!(plan.attributes.status, PlanStatus::Unknown);
    assert!(!plan.attributes.status.is_terminal());
}

#[tokio::test]
async fn test_plan_logs_follow_until_terminal() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/plans/plan-1"))
        .respond_with(jsonapi(
            200,
            json!({"data": {
                "id": "plan-1",
                "type": "plans",
                "attributes": {
                    "status": "finished",
                    "log-read-url": format!("{}/v1/object/plan-1", server.uri())
                }
            }}),
        ))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/object/plan-1"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Plan: 1 to add\n"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/object/plan-1"))
        .and(query_param("offset", "15"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut logs = client
        .plans()
        .logs("plan-1", CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(logs.read_to_string().await.unwrap(), "Plan: 1 to add\n");
    assert!(logs.is_finished());
}

#[tokio::test]
async fn test_cost_estimate_without_log_url() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/cost-estimates/ce-1"))
        .respond_with(jsonapi(
            200,
            json!({"data": {
                "id": "ce-1",
                "type": "cost-estimates",
                "attributes": {"status": "skipped_due_to_targeting", "delta-monthly-cost": "0.0"}
            }}),
        ))
        .mount(&server)
        .await;

    let estimate = client.cost_estimates().read("ce-1").await.unwrap();
    assert!(estimate.attributes.status.is_terminal());
    assert_eq!(estimate.attributes.delta_monthly_cost.as_deref(), Some("0.0"));

    match client
        .cost_estimates()
        .logs("ce-1", CancellationToken::new())
        .await
    {
        Err(Error::MissingLogUrl { resource }) => assert_eq!(resource, "cost estimate ce-1"),
        other => panic!("expected MissingLogUrl, got {other:?}"),
    }
}

fn policy_check(status: &str) -> Value {
    json!({"data": {
        "id": "polchk-1",
        "type": "policy-checks",
        "attributes": {
            "status": status,
            "scope": "organization",
            "result": {"result": false, "passed": 1, "total-failed": 1, "soft-failed": 1},
            "actions": {"is-overridable": true},
            "permissions": {"can-override": true}
        }
    }})
}

#[tokio::test]
async fn test_policy_check_logs_wait_for_evaluation() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/policy-checks/polchk-1"))
        .respond_with(jsonapi(200, policy_check("queued")))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/policy-checks/polchk-1"))
        .respond_with(jsonapi(200, policy_check("soft_failed")))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/policy-checks/polchk-1/output"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Sentinel Result: false"))
        .expect(1)
        .mount(&server)
        .await;

    let started = Instant::now();
    let output = client
        .policy_checks()
        .logs("polchk-1", CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(&output[..], b"Sentinel Result: false");
    assert!(started.elapsed() >= POLICY_POLL_INTERVAL);
}

#[tokio::test]
async fn test_policy_check_logs_cancelled_while_queued() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/policy-checks/polchk-1"))
        .respond_with(jsonapi(200, policy_check("pending")))
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let started = Instant::now();
    let result = client.policy_checks().logs("polchk-1", cancel).await;

    assert!(matches!(result, Err(Error::Cancelled)));
    assert!(started.elapsed() < POLICY_POLL_INTERVAL);
}

#[tokio::test]
async fn test_policy_check_override() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/v2/policy-checks/polchk-1/actions/override"))
        .respond_with(jsonapi(200, policy_check("overridden")))
        .expect(1)
        .mount(&server)
        .await;

    let check = client
        .policy_checks()
        .override_check("polchk-1")
        .await
        .unwrap();

    assert_eq!(check.attributes.status, PolicyStatus::Overridden);
    assert_eq!(check.attributes.scope, Some(PolicyScope::Organization));
    assert_eq!(check.attributes.result.unwrap().soft_failed, 1);
    assert!(check.attributes.actions.is_overridable);
}
