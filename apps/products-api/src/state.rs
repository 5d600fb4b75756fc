//! Application state management

use axum_helpers::{JwtAuth, RouteAuth};
use database::JsonFileStore;
use domain_products::{ProductService, StoreProductRepository};
use domain_users::{AuthService, StoreUserRepository};

use crate::config::Config;

pub type Products = ProductService<StoreProductRepository<JsonFileStore>>;
pub type Auth = AuthService<StoreUserRepository<JsonFileStore>>;

/// Shared application state, built once at startup
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub route_auth: RouteAuth,
    pub products: Products,
    pub auth: Auth,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let jwt = JwtAuth::new(&config.jwt);
        let route_auth = RouteAuth::new(config.api_key.clone(), jwt.clone());

        let products = ProductService::new(StoreProductRepository::new(JsonFileStore::open(
            &config.store,
            domain_products::COLLECTION,
        )));
        let auth = AuthService::new(
            StoreUserRepository::new(JsonFileStore::open(
                &config.store,
                domain_users::COLLECTION,
            )),
            jwt,
        );

        Self {
            config,
            route_auth,
            products,
            auth,
        }
    }
}
