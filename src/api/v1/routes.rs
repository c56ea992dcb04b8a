/*
 * Responsibility
 * - v1 URL structure
 * - Which pipeline guards which route:
 *   - none: /health, /auth/login, /auth/sign-up
 *   - public (context only): GET on /blogs, /products
 *   - protected (gate + context): every other route
 * - Public and protected routers share paths; merge combines them per method
 */
use axum::{
    Router,
    routing::{get, post, put},
};

use crate::{middleware::auth::Pipeline, state::AppState};

use crate::api::v1::handlers::{
    auth::{login, sign_up},
    blogs::{create_blog, delete_blog, get_blog, list_blogs, update_blog},
    health::health,
    orders::{create_order, delete_order, get_order, list_orders, update_order},
    products::{create_product, delete_product, get_product, list_products, update_product},
    users::{delete_user, get_user, list_users, update_user},
};

pub fn routes(state: &AppState) -> Router<AppState> {
    let public = Pipeline::public(state.tokens.clone());
    let protected = Pipeline::protected(state.tokens.clone());
    tracing::debug!(
        public = ?public.stage_names(),
        protected = ?protected.stage_names(),
        "v1 pipelines"
    );

    let public = public.wrap(
        Router::new()
            .route("/blogs", get(list_blogs))
            .route("/blogs/{id}", get(get_blog))
            .route("/products", get(list_products))
            .route("/products/{id}", get(get_product)),
    );

    let protected = protected.wrap(
        Router::new()
            .route("/blogs", post(create_blog))
            .route("/blogs/{id}", put(update_blog).delete(delete_blog))
            .route("/products", post(create_product))
            .route("/products/{id}", put(update_product).delete(delete_product))
            .route("/order", get(list_orders).post(create_order))
            .route(
                "/order/{id}",
                get(get_order).put(update_order).delete(delete_order),
            )
            .route("/user", get(list_users))
            .route(
                "/user/{id}",
                get(get_user).put(update_user).delete(delete_user),
            ),
    );

    Router::new()
        .route("/health", get(health))
        .route("/auth/login", post(login))
        .route("/auth/sign-up", post(sign_up))
        .merge(public)
        .merge(protected)
}
