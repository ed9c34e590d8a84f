//! Tests for the application bootstrap, covering server construction and
//! readiness signalling.

use std::net::SocketAddr;

use actix_web::web;
use pinboard_backend::inbound::http::health::HealthState;
use rstest::{fixture, rstest};

use super::server::{ServerConfig, create_server};

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 0))
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(health_state: web::Data<HealthState>, bind_addr: SocketAddr) {
    assert!(!health_state.is_ready(), "state should start unready");

    let config = ServerConfig::new(bind_addr);
    assert_eq!(config.bind_addr(), bind_addr);

    let _server = create_server(health_state.clone(), config).expect("server should build");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}

#[rstest]
#[actix_rt::test]
async fn create_server_reports_unbindable_address(health_state: web::Data<HealthState>) {
    let taken = std::net::TcpListener::bind("127.0.0.1:0").expect("listener should bind");
    let addr = taken.local_addr().expect("listener should expose its address");

    let result = create_server(health_state.clone(), ServerConfig::new(addr));

    assert!(result.is_err(), "binding an occupied port should fail");
    assert!(!health_state.is_ready(), "failed bind must not mark readiness");
}
