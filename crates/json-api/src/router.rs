//! App Router

use salvo::Router;

use crate::{auth, basket, brands, notifications, orders, products, profile};

/// Every `/api` route; all of them require a signed-in user.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("profile")
                .get(profile::get::handler)
                .put(profile::update::handler),
        )
        .push(
            Router::with_path("brands")
                .get(brands::index::handler)
                .push(
                    Router::with_path("{brand}")
                        .get(brands::get::handler)
                        .push(Router::with_path("products").get(brands::products::handler)),
                ),
        )
        .push(Router::with_path("products/{product}").get(products::get::handler))
        .push(
            Router::with_path("basket")
                .get(basket::get::handler)
                .push(Router::with_path("items").post(basket::add_item::handler))
                .push(Router::with_path("items/{item}").delete(basket::remove_item::handler))
                .push(Router::with_path("submit").post(basket::submit::handler)),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .push(Router::with_path("{order}").get(orders::get::handler)),
        )
        .push(
            Router::with_path("notifications")
                .get(notifications::index::handler)
                .push(Router::with_path("{notification}/read").post(notifications::read::handler)),
        )
}
