//! End-to-end tests against a real listener.
//!
//! Each test binds the wildcard address on an ephemeral port, spawns the
//! serve loop, and talks to it over TCP with reqwest.

use std::net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket};

use bluegreen::routes::health::HealthStatus;
use bluegreen::server::{bind, serve};
use bluegreen::{create_router, ServerError};

/// Start the responder on 0.0.0.0 with an OS-assigned port, returning the port.
async fn spawn_server() -> u16 {
    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0);
    let listener = bind(addr).await.expect("bind wildcard address");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        serve(listener, create_router()).await.unwrap();
    });

    port
}

fn url(host: IpAddr, port: u16, path: &str) -> String {
    format!("http://{}{}", SocketAddr::new(host, port), path)
}

/// Client that talks to the test server directly, ignoring any proxy environment.
fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// A non-loopback address of this host, if it has one.
///
/// Connecting a UDP socket sends nothing; it only selects the outbound interface.
fn non_loopback_addr() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("192.0.2.1:9").ok()?;
    let ip = socket.local_addr().ok()?.ip();
    (!ip.is_loopback() && !ip.is_unspecified()).then_some(ip)
}

#[tokio::test]
async fn test_health_over_tcp() {
    let port = spawn_server().await;

    let response = client()
        .get(url(IpAddr::V4(Ipv4Addr::LOCALHOST), port, "/actuator/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.headers()[reqwest::header::CONTENT_TYPE],
        "application/json"
    );

    let health: HealthStatus = response.json().await.unwrap();
    assert_eq!(health, HealthStatus::up());
}

#[tokio::test]
async fn test_root_over_tcp() {
    let port = spawn_server().await;
    let client = client();

    for _ in 0..3 {
        let response = client
            .get(url(IpAddr::V4(Ipv4Addr::LOCALHOST), port, "/"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), "BlueGreen Running");
    }
}

#[tokio::test]
async fn test_unmatched_requests_over_tcp() {
    let port = spawn_server().await;
    let client = client();
    let localhost = IpAddr::V4(Ipv4Addr::LOCALHOST);

    let response = client
        .post(url(localhost, port, "/actuator/health"))
        .send()
        .await
        .unwrap();
    assert_ne!(response.status(), reqwest::StatusCode::OK);

    let response = client
        .get(url(localhost, port, "/unknown"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wildcard_bind_accepts_non_loopback() {
    let Some(ip) = non_loopback_addr() else {
        eprintln!("[test] no non-loopback interface available, skipping");
        return;
    };
    let port = spawn_server().await;

    let response = client()
        .get(url(ip, port, "/actuator/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn test_bind_conflict_on_wildcard() {
    let taken = std::net::TcpListener::bind("0.0.0.0:0").unwrap();
    let addr = taken.local_addr().unwrap();

    let err = bind(addr).await.unwrap_err();
    assert!(matches!(err, ServerError::Bind { .. }));
    assert!(err.to_string().contains(&addr.port().to_string()));
}
