//! Transport tests against a stub HTTP server.
//!
//! These cover the request/response contract shared by every endpoint:
//! headers, URL composition, decoding, and error propagation.

use std::time::Duration;

use emqx_client::{
    Ack, ApiPath, ApiResponse, BrokerInfo, ClientConfig, Emqx, EmqxClient, Error, Method,
    PublishRequest, Route, SubscribeRequest, UnsubscribeRequest,
};
use serde_json::json;
use wiremock::matchers::{any, body_string, header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

fn client_for(server: &MockServer) -> EmqxClient {
    EmqxClient::new(ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::new("a", "b")
    })
    .unwrap()
}

/// Responds with the request body, unchanged.
struct Mirror;

impl Respond for Mirror {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_bytes(request.body.clone())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Headers
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_auth_and_content_type_sent_on_every_call() {
    let server = MockServer::start().await;
    Mock::given(any())
        .and(header("authorization", "Basic YTpi"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.list_routes().await.unwrap();
    client.list_cluster().await.unwrap();
    client.start_node_plugin("n1", "emqx_web_hook").await.unwrap();
}

#[tokio::test]
async fn test_auth_header_matches_configured_credentials() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .mount(&server)
        .await;

    let client = EmqxClient::builder()
        .base_url(server.uri())
        .credentials("a9ba10e1b3774", "Mjg3NzE0ODEwMTAxMTI4Mzk4NTEzOTI5MDUxMzQ1Mzg3NTC")
        .build()
        .unwrap();
    client.list_routes().await.unwrap();
    client.list_routes().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    for request in requests {
        let auth = request.headers.get("authorization").unwrap();
        assert_eq!(
            auth.to_str().unwrap(),
            "Basic YTliYTEwZTFiMzc3NDpNamczTnpFME9ERXdNVEF4TVRJNE16azROVEV6T1RJNU1EVXhNelExTXpnM05UQw=="
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_node_info_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/brokers/node1@host"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {
                "datetime": "2024-01-01 00:00:00",
                "node": "node1@host",
                "node_status": "Running",
                "otp_release": "R23/11.1",
                "sysdescr": "EMQX Broker",
                "uptime": "3 days",
                "version": "4.4.19"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server).get_node_info("node1@host").await.unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.data.node, "node1@host");
    assert_eq!(resp.data.node_status, "Running");
}

#[tokio::test]
async fn test_create_subscription_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/mqtt/subscribe"))
        .and(header("authorization", "Basic YTpi"))
        .and(body_string(r#"{"topic":"abc","qos":0,"client_id":"asss"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let ack = client_for(&server)
        .create_subscription(&SubscribeRequest {
            topic: "abc".to_string(),
            qos: 0,
            client_id: "asss".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(ack, Ack { code: 0, message: None });
}

#[tokio::test]
async fn test_request_bodies_survive_mirror() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(Mirror)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let publish = PublishRequest {
        topic: "sensors/temp".to_string(),
        payload: "{\"celsius\":21.5}".to_string(),
        qos: 1,
        retain: true,
        client_id: "thermostat".to_string(),
    };
    let echoed: PublishRequest = client
        .execute(
            Method::POST,
            &ApiPath::v3().push("mqtt").push("publish"),
            Some(serde_json::to_vec(&publish).unwrap()),
        )
        .await
        .unwrap();
    assert_eq!(echoed, publish);

    let subscribe = SubscribeRequest {
        topic: "sensors/#".to_string(),
        qos: 2,
        client_id: "dashboard".to_string(),
    };
    let echoed: SubscribeRequest = client
        .execute(
            Method::POST,
            &ApiPath::v3().push("mqtt").push("subscribe"),
            Some(serde_json::to_vec(&subscribe).unwrap()),
        )
        .await
        .unwrap();
    assert_eq!(echoed, subscribe);

    let unsubscribe = UnsubscribeRequest {
        topic: "sensors/#".to_string(),
        client_id: "dashboard".to_string(),
    };
    let echoed: UnsubscribeRequest = client
        .execute(
            Method::POST,
            &ApiPath::v3().push("mqtt").push("unsubscribe"),
            Some(serde_json::to_vec(&unsubscribe).unwrap()),
        )
        .await
        .unwrap();
    assert_eq!(echoed, unsubscribe);
}

// ─────────────────────────────────────────────────────────────────────────────
// Decoding
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_valid_body_decodes_regardless_of_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/routes/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": 0,
            "data": [{"node": "emqx@127.0.0.1", "topic": "a/b"}]
        })))
        .mount(&server)
        .await;

    let resp = client_for(&server).list_routes().await.unwrap();
    assert_eq!(
        resp.data,
        vec![Route {
            node: "emqx@127.0.0.1".to_string(),
            topic: "a/b".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_broker_error_code_is_not_interpreted() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 112,
            "message": "Client not found"
        })))
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .get_cluster_connection("ghost")
        .await
        .unwrap();
    assert!(!resp.is_success());
    assert_eq!(resp.code, 112);
    assert!(resp.data.is_empty());
    assert_eq!(resp.message.as_deref(), Some("Client not found"));
}

#[tokio::test]
async fn test_null_data_and_null_fields_decode() {
    let server = MockServer::start().await;
    Mock::given(path("/api/v3/connections/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"code":0,"data":[{"client_id":"c1","username":null,"node":"n1"}]}"#,
        ))
        .mount(&server)
        .await;
    Mock::given(path("/api/v3/connections/ghost"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"code":112,"data":null,"message":"Client not found"}"#,
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let resp = client.list_cluster_connections().await.unwrap();
    assert_eq!(resp.data[0].client_id, "c1");
    assert_eq!(resp.data[0].username, "");

    let resp = client.get_cluster_connection("ghost").await.unwrap();
    assert_eq!(resp.code, 112);
    assert!(resp.data.is_empty());
}

#[tokio::test]
async fn test_plain_text_body_becomes_error_message() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_cluster().await.unwrap_err();
    assert!(err.is_decode_error());
    assert_eq!(err.to_string(), "unauthorized");
    assert_eq!(err.raw_body(), Some("unauthorized"));
}

#[tokio::test]
async fn test_empty_body_with_ok_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .publish_message(&PublishRequest::default())
        .await
        .unwrap_err();
    assert!(err.is_decode_error());
    assert_eq!(err.to_string(), "");
}

#[tokio::test]
async fn test_wrong_shape_is_an_error_with_raw_body() {
    let server = MockServer::start().await;
    let body = r#"{"code":0,"data":"not an object"}"#;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let err = client_for(&server).get_node_info("n1").await.unwrap_err();
    assert_eq!(err.to_string(), body);
}

#[tokio::test]
async fn test_execute_decodes_into_caller_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/brokers/n1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {"node": "n1", "version": "4.4.19"}
        })))
        .mount(&server)
        .await;

    let resp: ApiResponse<BrokerInfo> = client_for(&server)
        .execute(Method::GET, &ApiPath::v3().push("brokers").push("n1"), None)
        .await
        .unwrap();
    assert_eq!(resp.data.version, "4.4.19");

    let raw: serde_json::Value = client_for(&server)
        .execute(Method::GET, &ApiPath::v3().push("brokers").push("n1"), None)
        .await
        .unwrap();
    assert_eq!(raw["data"]["node"], "n1");
}

// ─────────────────────────────────────────────────────────────────────────────
// Transport and construction failures
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_timeout_surfaces_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"code": 0}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = EmqxClient::builder()
        .base_url(server.uri())
        .credentials("a", "b")
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.list_routes().await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_independent_clients_keep_independent_timeouts() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"code": 0}))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let impatient = EmqxClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let patient = EmqxClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    assert!(impatient.list_routes().await.unwrap_err().is_timeout());
    assert!(patient.list_routes().await.is_ok());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to get a port with nothing listening.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = EmqxClient::builder()
        .base_url(format!("http://127.0.0.1:{}", port))
        .build()
        .unwrap();

    let err = client.list_cluster().await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    assert!(!err.is_decode_error());
}

#[tokio::test]
async fn test_malformed_base_url_fails_before_io() {
    let client = EmqxClient::builder()
        .base_url("::not a url::")
        .build()
        .unwrap();

    let err = client.list_cluster().await.unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Concurrency
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_clones_share_credentials_across_tasks() {
    let server = MockServer::start().await;
    Mock::given(any())
        .and(header("authorization", "Basic YTpi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0, "data": []})))
        .expect(16)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut handles = Vec::new();
    for i in 0..16 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.list_node_sessions(&format!("emqx@10.0.0.{}", i)).await
        }));
    }
    for handle in handles {
        let resp = handle.await.unwrap().unwrap();
        assert!(resp.is_success());
    }
}
