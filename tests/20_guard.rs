mod common;

use anyhow::Result;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

use common::{error_message, TestServer};

const MUTATING_ROUTES: &[(&str, &str)] = &[
    ("POST", "/inventory/product"),
    ("POST", "/inventory/item"),
    ("POST", "/inventory/vendor"),
    ("POST", "/inventory/purchaseItems"),
    ("PUT", "/inventory/purchaseItems/1"),
    ("DELETE", "/inventory/purchaseItems/1"),
    ("POST", "/inventory/purchaseProducts"),
    ("PUT", "/inventory/purchaseProducts/1"),
    ("DELETE", "/inventory/purchaseProducts/1"),
];

#[tokio::test]
async fn dashboard_without_token_is_not_authorized() -> Result<()> {
    let server = TestServer::spawn().await?;

    let res = server.get("/dashboard/").await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(res.json::<Value>().await?, json!({ "error": "Not Authorized" }));
    Ok(())
}

#[tokio::test]
async fn every_mutating_route_rejects_missing_token() -> Result<()> {
    let server = TestServer::spawn().await?;

    for (method, path) in MUTATING_ROUTES {
        let method = Method::from_bytes(method.as_bytes())?;
        let res = server
            .client
            .request(method.clone(), server.url(path))
            .json(&json!({}))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{} {}", method, path);
        assert_eq!(error_message(res).await?, "Not Authorized");
    }
    Ok(())
}

#[tokio::test]
async fn every_mutating_route_rejects_invalid_token() -> Result<()> {
    let server = TestServer::spawn().await?;

    for (method, path) in MUTATING_ROUTES {
        let method = Method::from_bytes(method.as_bytes())?;
        let res = server
            .client
            .request(method.clone(), server.url(path))
            .header("token", "not.a.jwt")
            .json(&json!({}))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{} {}", method, path);
        assert_eq!(error_message(res).await?, "Token is not valid");
    }
    Ok(())
}

#[tokio::test]
async fn guard_runs_before_body_parsing() -> Result<()> {
    let server = TestServer::spawn().await?;

    // Garbage body, no token: the guard answers, not the JSON extractor
    let res = server
        .client
        .post(server.url("/inventory/product"))
        .header("content-type", "application/json")
        .body("{oops")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn bearer_authorization_header_is_accepted() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.token().await?;

    let res = server
        .client
        .get(server.url("/dashboard"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn catalog_reads_are_public() -> Result<()> {
    let server = TestServer::spawn().await?;

    for path in ["/inventory/product", "/inventory/item", "/inventory/vendor"] {
        let res = server.get(path).await?;
        assert_eq!(res.status(), StatusCode::OK, "{}", path);
    }
    Ok(())
}
