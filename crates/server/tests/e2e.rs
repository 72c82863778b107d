use std::net::SocketAddr;

use configs::DatabaseConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::startup::{build_app, build_state, prepare_database};

struct TestApp {
    base_url: String,
}

/// Full stack on an ephemeral port: SeaORM over a throwaway SQLite file.
async fn start_server() -> anyhow::Result<TestApp> {
    let path = std::env::temp_dir().join(format!("e2e-{}.db", uuid::Uuid::new_v4()));
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", path.display()),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = prepare_database(&cfg).await?;
    let app = build_app(build_state(db));

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_employee_crud_round() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let base = format!("{}/api/employee", app.base_url);

    let res = c.post(&base)
        .json(&json!({"firstname": "Ada", "lastname": "Lovelace", "email": "ada@example.com"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<Value>().await?;
    let id = created["id"].as_i64().unwrap_or_default();
    assert!(id > 0);

    let res = c.get(format!("{base}/{id}")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, created);

    let res = c.put(format!("{base}/{id}"))
        .json(&json!({"firstname": "Ada", "lastname": "King", "email": "ada@example.com"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["lastname"], "King");

    let res = c.get(&base).send().await?;
    let all = res.json::<Vec<Value>>().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["lastname"], "King");

    let res = c.delete(format!("{base}/{id}")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.text().await?.contains("deleted"));

    let res = c.get(format!("{base}/{id}")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_cors_header_on_simple_request() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::Client::new()
        .get(format!("{}/api/employee", app.base_url))
        .header("Origin", "http://localhost:3000")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let origin = res.headers().get("access-control-allow-origin").and_then(|v| v.to_str().ok());
    assert_eq!(origin, Some("http://localhost:3000"));
    Ok(())
}
