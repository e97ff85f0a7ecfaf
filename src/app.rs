//! Application state, route table and router assembly.
//!
//! Access control is declared per route in [`route_table`]: each entry names its
//! verb, path and whether the authorization guard runs in front of it. Nothing
//! else in the crate decides which routes need a token.

use axum::{
    extract::DefaultBodyLimit,
    handler::Handler,
    http::HeaderValue,
    middleware::{from_fn, from_fn_with_state},
    routing::{on, MethodFilter, MethodRouter},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::TokenAuthority;
use crate::config::AppConfig;
use crate::database::InventoryStore;
use crate::handlers::{auth, dashboard, inventory, system};
use crate::middleware::{jwt_auth_middleware, validate_credentials_middleware};

/// Shared per-request context: the store capability and the token authority
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn InventoryStore>,
    pub tokens: Arc<TokenAuthority>,
}

impl AppState {
    pub fn new(store: Arc<dyn InventoryStore>, tokens: TokenAuthority) -> Self {
        Self {
            store,
            tokens: Arc::new(tokens),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn filter(self) -> MethodFilter {
        match self {
            Verb::Get => MethodFilter::GET,
            Verb::Post => MethodFilter::POST,
            Verb::Put => MethodFilter::PUT,
            Verb::Delete => MethodFilter::DELETE,
        }
    }

    pub fn is_mutating(self) -> bool {
        !matches!(self, Verb::Get)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Requires a valid session token
    Protected,
}

/// One row of the route table
pub struct RouteEntry {
    pub verb: Verb,
    pub path: &'static str,
    pub access: Access,
    /// Register/login payloads are checked before the handler runs
    pub checks_credentials: bool,
    handler: MethodRouter<AppState>,
}

impl RouteEntry {
    fn new<H, T>(verb: Verb, path: &'static str, access: Access, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self {
            verb,
            path,
            access,
            checks_credentials: false,
            handler: on(verb.filter(), handler),
        }
    }

    fn public<H, T>(verb: Verb, path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self::new(verb, path, Access::Public, handler)
    }

    fn protected<H, T>(verb: Verb, path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self::new(verb, path, Access::Protected, handler)
    }

    fn with_credential_check(mut self) -> Self {
        self.checks_credentials = true;
        self
    }
}

/// Every route the service exposes, with its access policy.
///
/// Policy: anything that writes requires a token; reads of the catalog and of
/// purchase records are public, as is the auth surface itself.
pub fn route_table() -> Vec<RouteEntry> {
    use Verb::{Delete, Get, Post, Put};

    vec![
        // Service
        RouteEntry::public(Get, "/", system::root),
        RouteEntry::public(Get, "/health", system::health),
        // Auth
        RouteEntry::public(Post, "/auth/register", auth::register_post).with_credential_check(),
        RouteEntry::public(Post, "/auth/login", auth::login_post).with_credential_check(),
        RouteEntry::public(Get, "/auth/verify", auth::verify_get),
        // Dashboard
        RouteEntry::protected(Get, "/dashboard", dashboard::dashboard_get),
        RouteEntry::protected(Get, "/dashboard/", dashboard::dashboard_get),
        // Catalog
        RouteEntry::protected(Post, "/inventory/product", inventory::product::create),
        RouteEntry::public(Get, "/inventory/product", inventory::product::list),
        RouteEntry::public(Get, "/inventory/product/:id", inventory::product::get),
        RouteEntry::protected(Post, "/inventory/item", inventory::item::create),
        RouteEntry::public(Get, "/inventory/item", inventory::item::list),
        RouteEntry::public(Get, "/inventory/item/:id", inventory::item::get),
        RouteEntry::protected(Post, "/inventory/vendor", inventory::vendor::create),
        RouteEntry::public(Get, "/inventory/vendor", inventory::vendor::list),
        RouteEntry::public(Get, "/inventory/vendor/:id", inventory::vendor::get),
        // Purchase records
        RouteEntry::protected(Post, "/inventory/purchaseItems", inventory::purchase_item::create),
        RouteEntry::public(Get, "/inventory/purchaseItems", inventory::purchase_item::list),
        RouteEntry::public(Get, "/inventory/purchaseItems/:id", inventory::purchase_item::get),
        RouteEntry::protected(Put, "/inventory/purchaseItems/:id", inventory::purchase_item::update),
        RouteEntry::protected(Delete, "/inventory/purchaseItems/:id", inventory::purchase_item::delete),
        RouteEntry::protected(Post, "/inventory/purchaseProducts", inventory::purchase_product::create),
        RouteEntry::public(Get, "/inventory/purchaseProducts", inventory::purchase_product::list),
        RouteEntry::public(Get, "/inventory/purchaseProducts/:id", inventory::purchase_product::get),
        RouteEntry::protected(Put, "/inventory/purchaseProducts/:id", inventory::purchase_product::update),
        RouteEntry::protected(
            Delete,
            "/inventory/purchaseProducts/:id",
            inventory::purchase_product::delete,
        ),
    ]
}

/// Assemble the router: routes from [`route_table`] plus global layers
pub fn build_router(state: AppState, config: &AppConfig) -> Router {
    let mut router: Router<AppState> = Router::new();

    for route in route_table() {
        let mut handler = route.handler;
        if route.checks_credentials {
            handler = handler.route_layer(from_fn(validate_credentials_middleware));
        }
        if route.access == Access::Protected {
            handler = handler.route_layer(from_fn_with_state(state.clone(), jwt_auth_middleware));
        }
        router = router.route(route.path, handler);
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.security.cors_origins))
                .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes)),
        )
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}
