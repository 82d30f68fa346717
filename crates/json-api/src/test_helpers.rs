//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use omahub_app::{
    auth::{AuthenticatedUser, MockAuthService},
    context::AppContext,
    domain::{
        baskets::MockBasketsService,
        brands::{
            MockBrandsService,
            records::{BrandRecord, BrandUuid},
        },
        notifications::MockNotificationsService,
        orders::MockOrdersService,
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
        submissions::MockBasketSubmissionService,
        users::{MockUsersService, records::UserUuid},
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_SESSION_COOKIE: &str = "omahub_session";

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

pub(crate) fn test_user() -> AuthenticatedUser {
    AuthenticatedUser {
        uuid: TEST_USER_UUID,
        email: "ada@example.com".to_string(),
    }
}

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user(test_user());
    ctrl.call_next(req, depot, res).await;
}

/// An app context whose services reject every call.
///
/// Tests replace the one service they exercise.
pub(crate) fn mock_app() -> AppContext {
    AppContext {
        users: Arc::new(MockUsersService::new()),
        brands: Arc::new(MockBrandsService::new()),
        products: Arc::new(MockProductsService::new()),
        baskets: Arc::new(MockBasketsService::new()),
        orders: Arc::new(MockOrdersService::new()),
        notifications: Arc::new(MockNotificationsService::new()),
        submissions: Arc::new(MockBasketSubmissionService::new()),
        auth: Arc::new(MockAuthService::new()),
    }
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    let mut app = mock_app();

    app.auth = Arc::new(auth);

    State::from_app_context(app, TEST_SESSION_COOKIE)
}

/// Serve `route` as the signed-in test user.
pub(crate) fn app_service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app, TEST_SESSION_COOKIE)))
            .hoop(inject_user)
            .push(route),
    )
}

/// Serve `route` without a signed-in user.
pub(crate) fn anonymous_service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app, TEST_SESSION_COOKIE)))
            .push(route),
    )
}

pub(crate) fn make_brand(uuid: BrandUuid, name: &str) -> BrandRecord {
    BrandRecord {
        uuid,
        name: name.to_string(),
        currency: "NGN".to_string(),
        owner_uuid: None,
        image_url: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_product(uuid: ProductUuid, brand: BrandUuid, price: u64) -> ProductRecord {
    ProductRecord {
        uuid,
        brand_uuid: brand,
        title: "Adire kaftan".to_string(),
        category: Some("dresses".to_string()),
        price,
        sale_price: None,
        image_url: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}
