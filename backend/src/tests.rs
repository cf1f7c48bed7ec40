//! Tests for the application bootstrap, covering configuration and readiness
//! signalling.

use std::ffi::OsString;
use std::net::SocketAddr;

use actix_web::web;
use env_lock::lock_env;
use ortho_config::OrthoConfig;
use rstest::{fixture, rstest};

use contacts::inbound::http::health::HealthState;
use contacts::outbound::persistence::{DbPool, PoolConfig};

use super::server::{ContactsSettings, ServerConfig, create_server};

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 0))
}

#[rstest]
#[actix_web::test]
async fn create_server_marks_ready(
    health_state: web::Data<HealthState>,
    bind_address: SocketAddr,
) {
    let dir = tempfile::tempdir().expect("temp dir");
    let url = dir.path().join("bootstrap.db").to_string_lossy().into_owned();
    let pool = DbPool::new(PoolConfig::new(url)).await.expect("pool builds");
    let config = ServerConfig::new(bind_address, pool);
    assert_eq!(config.bind_addr(), bind_address);

    assert!(!health_state.is_ready(), "state should start unready");

    let _server = create_server(health_state.clone(), config).expect("server should build");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}

#[rstest]
#[actix_web::test]
async fn bootstrap_from_command_line(health_state: web::Data<HealthState>) {
    let _guard = lock_env([
        ("CONTACTS_HOST", None::<String>),
        ("CONTACTS_PORT", None::<String>),
        ("CONTACTS_DATABASE_URL", None::<String>),
        ("CONTACTS_MAX_CONNECTIONS", None::<String>),
    ]);
    let dir = tempfile::tempdir().expect("temp dir");
    let url = dir.path().join("cli.db").to_string_lossy().into_owned();
    let argv = ["contacts", "--host", "127.0.0.1", "--port", "0", "--database-url", &url]
        .map(OsString::from);

    let settings = ContactsSettings::load_from_iter(argv).expect("config should load");
    assert_eq!(settings.max_connections, 4);

    let pool = DbPool::new(
        PoolConfig::new(settings.database_url()).with_max_size(settings.max_connections),
    )
    .await
    .expect("pool builds");
    let bind_addr = settings.bind_addr().expect("address resolves");
    let _server =
        create_server(health_state.clone(), ServerConfig::new(bind_addr, pool)).expect("server");

    assert!(health_state.is_ready());
}
