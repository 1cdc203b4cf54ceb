#![cfg(not(target_arch = "wasm32"))]

use anyhow::Result;
use secrecy::SecretString;
use serde_json::json;
use std::net::TcpListener;
use stockroom::cli::{
    actions::{ProductsAction, Runtime, alerts, login, products},
    globals::GlobalArgs,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn signed_in(server: &MockServer) -> GlobalArgs {
    let mut globals = GlobalArgs::new(server.uri());
    globals.set_session("Admin".to_string(), SecretString::from("mock-token-12345"));
    globals
}

#[tokio::test]
async fn login_prints_exports() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "user": "Admin",
            "token": "mock-token-12345"
        })))
        .mount(&server)
        .await;

    let runtime = Runtime::new(&GlobalArgs::new(server.uri()))?;
    let output = login::execute(&runtime, "Admin".to_string(), &SecretString::from("1234")).await?;

    assert_eq!(
        output,
        "export STOCKROOM_USER='Admin'\nexport STOCKROOM_TOKEN='mock-token-12345'"
    );
    assert!(runtime.auth.is_authenticated());
    Ok(())
}

#[tokio::test]
async fn protected_commands_need_a_session() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    let runtime = Runtime::new(&GlobalArgs::new(server.uri()))?;
    let err = alerts::execute(&runtime)
        .await
        .err()
        .ok_or_else(|| anyhow::anyhow!("expected guard rejection"))?;

    assert!(err.to_string().contains("not signed in"));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
    Ok(())
}

#[tokio::test]
async fn products_list_renders_table() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/produtos"))
        .and(header("Authorization", "Bearer mock-token-12345"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "id": 1,
                "nome": "Disjuntor 20A",
                "codigo": "DIS-20",
                "valor_unitario": 32.5,
                "quantidade_estoque": 1,
                "minimo_alerta": 4
            }]
        })))
        .mount(&server)
        .await;

    let runtime = Runtime::new(&signed_in(&server))?;
    let output = products::execute(&runtime, ProductsAction::List { search: None }).await?;

    assert!(output.contains("DIS-20"));
    assert!(output.lines().last().is_some_and(|line| line.ends_with("LOW")));
    Ok(())
}

#[tokio::test]
async fn expired_token_explains_how_to_recover() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/produtos/3"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let runtime = Runtime::new(&signed_in(&server))?;
    let err = products::execute(&runtime, ProductsAction::Delete { id: 3 })
        .await
        .err()
        .ok_or_else(|| anyhow::anyhow!("expected expiry"))?;

    assert!(err.to_string().contains("session expired"));
    assert!(!runtime.auth.is_authenticated());
    Ok(())
}
