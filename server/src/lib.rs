//! HTTP boundary of the BN256 compute service.
//!
//! Routes decode their JSON body into a request record, hand the decoded
//! values to the `curve` and `schnorr` crates and wrap the result in the
//! response envelope. Handlers share no state.

mod config;
mod error;
mod handlers;
mod types;

#[cfg(test)]
mod tests;

use actix_web::{Route, web};

pub use config::{Config, DEFAULT_PORT};
pub use error::ServiceError;
pub use types::*;

/// Registers every route on an actix-web application.
///
/// Each route also answers on its path with the trailing slash toggled, so
/// `/ec/add` reaches the `/ec/add/` handler and `/ec/order/` reaches
/// `/ec/order`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    lenient(cfg, "/isalive", || web::get().to(handlers::is_alive));
    lenient(cfg, "/generate/keccak256/", || web::post().to(handlers::generate_keccak256));
    lenient(cfg, "/generate/commitment/", || web::post().to(handlers::generate_commitment));
    lenient(cfg, "/generate/schnorr/", || web::post().to(handlers::generate_schnorr));
    lenient(cfg, "/verify/schnorr/", || web::post().to(handlers::verify_schnorr));
    lenient(cfg, "/big/add/", || web::post().to(handlers::big_add));
    lenient(cfg, "/big/submod/", || web::post().to(handlers::big_sub_mod));
    lenient(cfg, "/big/invmod/", || web::post().to(handlers::big_inv_mod));
    lenient(cfg, "/big/mul/", || web::post().to(handlers::big_mul));
    lenient(cfg, "/big/mod/", || web::post().to(handlers::big_mod));
    lenient(cfg, "/big/rand", || web::get().to(handlers::big_rand));
    lenient(cfg, "/ec/order", || web::route().to(handlers::ec_order));
    lenient(cfg, "/ec/add/", || web::post().to(handlers::ec_add));
    lenient(cfg, "/ec/sub/", || web::post().to(handlers::ec_sub));
    lenient(cfg, "/ec/mul/", || web::post().to(handlers::ec_mul));
    lenient(cfg, "/ec/basemul/", || web::post().to(handlers::ec_base_mul));
    lenient(cfg, "/ec/hashtopoint/", || web::post().to(handlers::ec_hash_to_point));
}

fn lenient(cfg: &mut web::ServiceConfig, path: &str, route: impl Fn() -> Route) {
    cfg.route(path, route());
    cfg.route(&toggle_trailing_slash(path), route());
}

fn toggle_trailing_slash(path: &str) -> String {
    match path.strip_suffix('/') {
        Some(trimmed) => trimmed.to_string(),
        None => format!("{path}/"),
    }
}
