//! Basket submission service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::SignedDuration;
use mockall::automock;
use tracing::{error, info, warn};

use crate::{
    auth::AuthenticatedUser,
    database::Db,
    domain::{
        submissions::{
            customer::Customer,
            errors::BasketSubmissionError,
            grouping::group_by_brand,
            placement::{OrderWriter, place_orders},
            records::{BasketClaim, ClaimUuid, SubmissionReceipt},
            repository::PgSubmissionsRepository,
            writer::PgOrderWriter,
        },
        users::{records::UserUuid, repository::PgUsersRepository},
    },
};

/// How long a basket claim blocks other submissions.
pub const DEFAULT_CLAIM_TTL: SignedDuration = SignedDuration::from_secs(300);

#[derive(Clone)]
pub struct PgBasketSubmissionService {
    db: Db,
    claim_ttl: SignedDuration,
    users_repository: PgUsersRepository,
    repository: PgSubmissionsRepository,
    writer: Arc<dyn OrderWriter>,
}

impl PgBasketSubmissionService {
    #[must_use]
    pub fn new(db: Db, claim_ttl: SignedDuration) -> Self {
        let writer = Arc::new(PgOrderWriter::new(db.clone()));

        Self::with_writer(db, claim_ttl, writer)
    }

    pub(crate) fn with_writer(
        db: Db,
        claim_ttl: SignedDuration,
        writer: Arc<dyn OrderWriter>,
    ) -> Self {
        Self {
            db,
            claim_ttl,
            users_repository: PgUsersRepository::new(),
            repository: PgSubmissionsRepository::new(),
            writer,
        }
    }

    async fn load_customer(
        &self,
        user: &AuthenticatedUser,
    ) -> Result<Customer, BasketSubmissionError> {
        let mut tx = self
            .db
            .begin_user_transaction(user.uuid)
            .await
            .map_err(BasketSubmissionError::ProfileUnavailable)?;

        let profile = self
            .users_repository
            .get_profile(&mut tx, user.uuid)
            .await
            .map_err(BasketSubmissionError::ProfileUnavailable)?;

        tx.commit()
            .await
            .map_err(BasketSubmissionError::ProfileUnavailable)?;

        Ok(Customer::from_profile(profile, &user.email))
    }

    async fn claim(&self, user: UserUuid) -> Result<BasketClaim, BasketSubmissionError> {
        let uuid = ClaimUuid::new();
        let mut tx = self.db.begin_user_transaction(user).await?;

        let baskets = self
            .repository
            .claim_baskets(&mut tx, user, self.claim_ttl, uuid)
            .await?;

        if baskets.is_empty() {
            let in_progress = self.repository.has_active_claim(&mut tx, user).await?;

            tx.commit().await?;

            return Err(nothing_claimed(in_progress));
        }

        tx.commit().await?;

        Ok(BasketClaim { uuid, baskets })
    }

    /// Whether another submission holds any of the user's baskets.
    async fn in_progress(&self, user: UserUuid) -> Result<bool, sqlx::Error> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        let in_progress = self.repository.has_active_claim(&mut tx, user).await?;

        tx.commit().await.map(|()| in_progress)
    }

    async fn release(&self, user: UserUuid, claim: &BasketClaim) {
        let result = async {
            let mut tx = self.db.begin_user_transaction(user).await?;

            let released = self
                .repository
                .release_baskets(&mut tx, &claim.baskets, claim.uuid)
                .await?;

            tx.commit().await.map(|()| released)
        }
        .await;

        match result {
            Ok(released) if taken_over(released, claim) => {
                warn!(user = %user, claim = %claim.uuid, released, "basket claim was taken over");
            }
            Ok(_) => {}
            Err(error) => error!(user = %user, %error, "failed to release basket claim"),
        }
    }

    async fn clear(&self, user: UserUuid, claim: &BasketClaim) {
        let result = async {
            let mut tx = self.db.begin_user_transaction(user).await?;

            let deleted = self
                .repository
                .delete_baskets(&mut tx, &claim.baskets, claim.uuid)
                .await?;

            tx.commit().await.map(|()| deleted)
        }
        .await;

        match result {
            Ok(deleted) if taken_over(deleted, claim) => {
                warn!(
                    user = %user,
                    claim = %claim.uuid,
                    baskets = deleted,
                    "basket claim was taken over; only baskets still held were cleared"
                );
            }
            Ok(deleted) => info!(user = %user, baskets = deleted, "baskets cleared"),
            Err(error) => error!(user = %user, %error, "failed to clear submitted baskets"),
        }
    }
}

/// Fewer rows changed than the claim covers, so another submission holds the rest.
fn taken_over(affected: u64, claim: &BasketClaim) -> bool {
    u64::try_from(claim.baskets.len()).is_ok_and(|held| affected < held)
}

fn nothing_claimed(in_progress: bool) -> BasketSubmissionError {
    if in_progress {
        BasketSubmissionError::AlreadySubmitting
    } else {
        BasketSubmissionError::NothingToSubmit
    }
}

#[async_trait]
impl BasketSubmissionService for PgBasketSubmissionService {
    async fn submit_basket(
        &self,
        user: &AuthenticatedUser,
    ) -> Result<SubmissionReceipt, BasketSubmissionError> {
        let customer = self.load_customer(user).await?;

        let claim = self.claim(user.uuid).await?;

        info!(
            user = %user.uuid,
            claim = %claim.uuid,
            baskets = claim.baskets.len(),
            "baskets claimed for submission"
        );

        let lines = async {
            let mut tx = self.db.begin_user_transaction(user.uuid).await?;

            let lines = self
                .repository
                .get_submission_lines(&mut tx, &claim.baskets, claim.uuid)
                .await?;

            tx.commit().await.map(|()| lines)
        }
        .await;

        let lines = match lines {
            Ok(lines) if lines.is_empty() => {
                self.release(user.uuid, &claim).await;

                // Our claim may have held only empty baskets while another
                // submission holds the ones with items.
                return Err(nothing_claimed(self.in_progress(user.uuid).await?));
            }
            Ok(lines) => lines,
            Err(error) => {
                self.release(user.uuid, &claim).await;

                return Err(BasketSubmissionError::Sql(error));
            }
        };

        let grouping = group_by_brand(lines);

        for item in &grouping.orphans {
            warn!(user = %user.uuid, item = %item, "skipping basket item without product or brand");
        }

        let placement =
            place_orders(self.writer.as_ref(), user.uuid, &customer, &grouping.groups).await;

        if placement.orders.is_empty() {
            self.release(user.uuid, &claim).await;

            return Err(BasketSubmissionError::NoOrdersCreated);
        }

        for dropped in &placement.dropped {
            warn!(
                user = %user.uuid,
                basket = %dropped.basket_uuid,
                brand = %dropped.brand_uuid,
                brand_name = %dropped.brand_name,
                items = dropped.items,
                "brand group dropped; its items are discarded with the basket"
            );
        }

        self.clear(user.uuid, &claim).await;

        Ok(SubmissionReceipt {
            orders: placement.orders,
            notifications_sent: placement.notifications_sent,
        })
    }
}

#[automock]
#[async_trait]
pub trait BasketSubmissionService: Send + Sync {
    /// Split the user's baskets into one order per brand, notify brand owners
    /// and clear the baskets.
    async fn submit_basket(
        &self,
        user: &AuthenticatedUser,
    ) -> Result<SubmissionReceipt, BasketSubmissionError>;
}

#[cfg(test)]
mod tests {
    use sqlx::{query, query_as, query_scalar};
    use testresult::TestResult;
    use uuid::Uuid;

    use crate::{
        domain::{
            baskets::{BasketsService, BasketsServiceError, records::BasketUuid},
            notifications::NotificationsService,
            orders::{
                OrdersService,
                records::{OrderStatus, OrderUuid},
            },
            products::{ProductsService, records::ProductUuid},
            submissions::{
                placement::{MockOrderWriter, OrderWriteError, WrittenOrder},
                records::PlacedOrder,
            },
            users::{UsersService, data::ProfileUpdate},
        },
        test::TestContext,
    };

    use super::*;

    async fn count(ctx: &TestContext, table: &str) -> Result<i64, sqlx::Error> {
        query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(ctx.db.pool())
            .await
    }

    #[tokio::test]
    async fn two_brand_basket_becomes_two_orders() -> TestResult {
        let ctx = TestContext::new().await;
        let owner_x = ctx.create_user("x@brands.example").await;
        let owner_y = ctx.create_user("y@brands.example").await;
        let customer = ctx.create_customer("ada@example.com", "Ada Obi").await;
        let brand_x = ctx.create_brand("Brand X", "NGN", Some(owner_x)).await;
        let brand_y = ctx.create_brand("Brand Y", "GBP", Some(owner_y)).await;
        let item_1 = ctx.create_product(brand_x, "Item 1", 10).await;
        let item_2 = ctx.create_product(brand_y, "Item 2", 5).await;

        ctx.add_to_basket(customer, item_1, 2).await;
        ctx.add_to_basket(customer, item_2, 1).await;

        let receipt = ctx.submit_basket(customer, "ada@example.com").await?;

        assert_eq!(receipt.orders.len(), 2);
        assert_eq!(receipt.notifications_sent, 2);

        let x = &receipt.orders[0];
        let y = &receipt.orders[1];

        assert_eq!(
            (x.brand_name.as_str(), x.total, x.currency.as_str()),
            ("Brand X", 20, "NGN")
        );
        assert_eq!(
            (y.brand_name.as_str(), y.total, y.currency.as_str()),
            ("Brand Y", 5, "GBP")
        );
        assert_eq!((x.items_count, y.items_count), (1, 1));

        let orders = ctx.orders.list_orders(customer).await?;
        let items: usize = orders.iter().map(|order| order.items.len()).sum();

        assert_eq!(orders.len(), 2);
        assert_eq!(items, 2);
        for order in &orders {
            assert_eq!(order.status, OrderStatus::Pending);
            assert_eq!(order.customer_name, "Ada Obi");
        }

        let notified_x = ctx.notifications.list_notifications(owner_x).await?;
        let notified_y = ctx.notifications.list_notifications(owner_y).await?;

        assert_eq!((notified_x.len(), notified_y.len()), (1, 1));

        let basket = ctx.baskets.get_basket(customer).await;

        assert!(
            matches!(basket, Err(BasketsServiceError::NotFound)),
            "expected basket to be cleared, got {basket:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn order_total_matches_its_items() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("ada@example.com", "Ada Obi").await;
        let brand = ctx.create_brand("Adire House", "NGN", None).await;
        let kaftan = ctx.create_product(brand, "Indigo kaftan", 45_000).await;
        let wrap = ctx
            .create_product_on_sale(brand, "Aso-oke wrap", 12_000, 9_000)
            .await;

        ctx.add_to_basket(customer, kaftan, 2).await;
        ctx.add_to_basket(customer, wrap, 3).await;

        ctx.submit_basket(customer, "ada@example.com").await?;

        let order = ctx.orders.list_orders(customer).await?.remove(0);

        let items_total: u64 = order
            .items
            .iter()
            .map(|item| item.price * u64::from(item.quantity))
            .sum();

        assert_eq!(order.total_amount, 117_000);
        assert_eq!(order.total_amount, items_total);

        Ok(())
    }

    #[tokio::test]
    async fn brand_without_owner_sends_no_notification() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("ada@example.com", "Ada Obi").await;
        let brand = ctx.create_brand("Adire House", "NGN", None).await;
        let product = ctx.create_product(brand, "Indigo kaftan", 45_000).await;

        ctx.add_to_basket(customer, product, 1).await;

        let receipt = ctx.submit_basket(customer, "ada@example.com").await?;

        assert_eq!(receipt.orders.len(), 1);
        assert_eq!(receipt.notifications_sent, 0);

        Ok(())
    }

    #[tokio::test]
    async fn deleted_product_is_skipped() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("ada@example.com", "Ada Obi").await;
        let brand = ctx.create_brand("Adire House", "NGN", None).await;
        let kept = ctx.create_product(brand, "Indigo kaftan", 45_000).await;
        let removed = ctx.create_product(brand, "Aso-oke wrap", 12_000).await;

        ctx.add_to_basket(customer, kept, 1).await;
        ctx.add_to_basket(customer, removed, 1).await;

        ctx.products.delete_product(removed).await?;

        let receipt = ctx.submit_basket(customer, "ada@example.com").await?;

        assert_eq!(receipt.orders.len(), 1);
        assert_eq!(receipt.orders[0].total, 45_000);
        assert_eq!(receipt.orders[0].items_count, 1);

        let order = ctx.orders.list_orders(customer).await?.remove(0);

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].product_uuid, kept);

        Ok(())
    }

    #[tokio::test]
    async fn only_orphaned_items_create_no_orders_and_keep_basket() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("ada@example.com", "Ada Obi").await;
        let brand = ctx.create_brand("Adire House", "NGN", None).await;
        let product = ctx.create_product(brand, "Indigo kaftan", 45_000).await;

        ctx.add_to_basket(customer, product, 1).await;
        ctx.products.delete_product(product).await?;

        let result = ctx.submit_basket(customer, "ada@example.com").await;

        assert!(
            matches!(result, Err(BasketSubmissionError::NoOrdersCreated)),
            "expected NoOrdersCreated, got {result:?}"
        );

        let basket = ctx.baskets.get_basket(customer).await?;

        assert_eq!(basket.items.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn empty_basket_is_nothing_to_submit() {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("ada@example.com", "Ada Obi").await;

        let result = ctx.submit_basket(customer, "ada@example.com").await;

        assert!(
            matches!(result, Err(BasketSubmissionError::NothingToSubmit)),
            "expected NothingToSubmit, got {result:?}"
        );
    }

    #[tokio::test]
    async fn basket_without_items_is_nothing_to_submit_and_stays_open() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("ada@example.com", "Ada Obi").await;
        let brand = ctx.create_brand("Adire House", "NGN", None).await;
        let product = ctx.create_product(brand, "Indigo kaftan", 45_000).await;

        let item = ctx.add_to_basket(customer, product, 1).await;
        ctx.baskets.remove_item(customer, item.uuid).await?;

        let result = ctx.submit_basket(customer, "ada@example.com").await;

        assert!(
            matches!(result, Err(BasketSubmissionError::NothingToSubmit)),
            "expected NothingToSubmit, got {result:?}"
        );

        ctx.add_to_basket(customer, product, 1).await;

        let basket = ctx.baskets.get_basket(customer).await?;

        assert_eq!(basket.uuid, item.basket_uuid);

        Ok(())
    }

    #[tokio::test]
    async fn missing_profile_is_profile_unavailable() {
        let ctx = TestContext::new().await;
        let customer = ctx.create_user("ada@example.com").await;

        let result = ctx.submit_basket(customer, "ada@example.com").await;

        assert!(
            matches!(result, Err(BasketSubmissionError::ProfileUnavailable(_))),
            "expected ProfileUnavailable, got {result:?}"
        );
    }

    #[tokio::test]
    async fn fresh_claim_blocks_second_submission() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("ada@example.com", "Ada Obi").await;
        let brand = ctx.create_brand("Adire House", "NGN", None).await;
        let product = ctx.create_product(brand, "Indigo kaftan", 45_000).await;

        ctx.add_to_basket(customer, product, 1).await;

        query("UPDATE baskets SET status = 'submitting', claim_uuid = $1, claimed_at = now()")
            .bind(Uuid::now_v7())
            .execute(ctx.db.pool())
            .await?;

        let result = ctx.submit_basket(customer, "ada@example.com").await;

        assert!(
            matches!(result, Err(BasketSubmissionError::AlreadySubmitting)),
            "expected AlreadySubmitting, got {result:?}"
        );
        assert!(ctx.orders.list_orders(customer).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn empty_basket_beside_fresh_claim_is_already_submitting() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("ada@example.com", "Ada Obi").await;
        let brand = ctx.create_brand("Adire House", "NGN", None).await;
        let product = ctx.create_product(brand, "Indigo kaftan", 45_000).await;

        let item = ctx.add_to_basket(customer, product, 1).await;
        ctx.baskets.remove_item(customer, item.uuid).await?;

        let held = insert_second_basket(&ctx, customer, product).await?;

        query(
            "UPDATE baskets SET status = 'submitting', claim_uuid = $1, claimed_at = now() \
             WHERE uuid = $2",
        )
        .bind(Uuid::now_v7())
        .bind(held.into_uuid())
        .execute(ctx.db.pool())
        .await?;

        let result = ctx.submit_basket(customer, "ada@example.com").await;

        assert!(
            matches!(result, Err(BasketSubmissionError::AlreadySubmitting)),
            "expected AlreadySubmitting, got {result:?}"
        );
        let basket = ctx.baskets.get_basket(customer).await?;

        assert_eq!(basket.uuid, item.basket_uuid);
        assert_eq!(count(&ctx, "basket_items").await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn taken_over_claim_neither_clears_nor_reopens_baskets() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("ada@example.com", "Ada Obi").await;
        let brand = ctx.create_brand("Adire House", "NGN", None).await;
        let product = ctx.create_product(brand, "Indigo kaftan", 45_000).await;

        ctx.add_to_basket(customer, product, 1).await;

        let first = ctx.submissions.claim(customer).await?;

        query("UPDATE baskets SET claimed_at = now() - INTERVAL '1 hour'")
            .execute(ctx.db.pool())
            .await?;

        let second = ctx.submissions.claim(customer).await?;

        assert_eq!(first.baskets, second.baskets);
        assert_ne!(first.uuid, second.uuid);

        ctx.submissions.clear(customer, &first).await;
        ctx.submissions.release(customer, &first).await;

        let (status, holder): (String, Option<Uuid>) =
            query_as("SELECT status, claim_uuid FROM baskets")
                .fetch_one(ctx.db.pool())
                .await?;

        assert_eq!(status, "submitting");
        assert_eq!(holder, Some(second.uuid.into_uuid()));
        assert_eq!(count(&ctx, "basket_items").await?, 1);

        ctx.submissions.clear(customer, &second).await;

        assert_eq!(count(&ctx, "baskets").await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn failed_brand_group_is_left_out_and_basket_still_cleared() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("ada@example.com", "Ada Obi").await;
        let brand_x = ctx.create_brand("Brand X", "NGN", None).await;
        let brand_y = ctx.create_brand("Brand Y", "GBP", None).await;
        let item_1 = ctx.create_product(brand_x, "Item 1", 10).await;
        let item_2 = ctx.create_product(brand_y, "Item 2", 5).await;

        ctx.add_to_basket(customer, item_1, 2).await;
        ctx.add_to_basket(customer, item_2, 1).await;

        let mut writer = MockOrderWriter::new();

        writer
            .expect_write_order()
            .times(2)
            .returning(move |_, _, group| {
                if group.brand.uuid == brand_x {
                    return Err(OrderWriteError::Order(sqlx::Error::RowNotFound));
                }

                Ok(WrittenOrder {
                    order: PlacedOrder {
                        order_uuid: OrderUuid::new(),
                        brand_name: group.brand.name.clone(),
                        total: group.total,
                        currency: group.brand.currency.clone(),
                        items_count: group.lines.len(),
                    },
                    notified: true,
                })
            });

        let submissions = PgBasketSubmissionService::with_writer(
            ctx.app_db.clone(),
            DEFAULT_CLAIM_TTL,
            Arc::new(writer),
        );

        let receipt = submissions
            .submit_basket(&AuthenticatedUser {
                uuid: customer,
                email: "ada@example.com".to_string(),
            })
            .await?;

        let brands: Vec<_> = receipt
            .orders
            .iter()
            .map(|o| o.brand_name.as_str())
            .collect();

        assert_eq!(brands, ["Brand Y"]);
        assert_eq!(receipt.orders[0].total, 5);
        assert_eq!(receipt.notifications_sent, 1);
        assert_eq!(count(&ctx, "baskets").await?, 0);
        assert_eq!(count(&ctx, "basket_items").await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn stale_claim_is_reclaimed() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("ada@example.com", "Ada Obi").await;
        let brand = ctx.create_brand("Adire House", "NGN", None).await;
        let product = ctx.create_product(brand, "Indigo kaftan", 45_000).await;

        ctx.add_to_basket(customer, product, 1).await;

        query("UPDATE baskets SET status = 'submitting', claimed_at = now() - INTERVAL '1 hour'")
            .execute(ctx.db.pool())
            .await?;

        let receipt = ctx.submit_basket(customer, "ada@example.com").await?;

        assert_eq!(receipt.orders.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn baskets_are_not_merged() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("ada@example.com", "Ada Obi").await;
        let brand = ctx.create_brand("Adire House", "NGN", None).await;
        let product = ctx.create_product(brand, "Indigo kaftan", 45_000).await;

        ctx.add_to_basket(customer, product, 1).await;
        insert_second_basket(&ctx, customer, product).await?;

        let receipt = ctx.submit_basket(customer, "ada@example.com").await?;

        assert_eq!(receipt.orders.len(), 2);
        for order in &receipt.orders {
            assert_eq!(order.brand_name, "Adire House");
        }

        assert_eq!(count(&ctx, "baskets").await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn customer_name_falls_back_to_email() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_user("ada.obi@example.com").await;
        let brand = ctx.create_brand("Adire House", "NGN", None).await;
        let product = ctx.create_product(brand, "Indigo kaftan", 45_000).await;

        ctx.users
            .upsert_profile(customer, ProfileUpdate::default())
            .await?;
        ctx.add_to_basket(customer, product, 1).await;

        ctx.submit_basket(customer, "ada.obi@example.com").await?;

        let order = ctx.orders.list_orders(customer).await?.remove(0);

        assert_eq!(order.customer_name, "ada.obi");
        assert_eq!(order.customer_email, "ada.obi@example.com");

        Ok(())
    }

    #[tokio::test]
    async fn submission_leaves_other_users_baskets_alone() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("ada@example.com", "Ada Obi").await;
        let other = ctx.create_customer("bola@example.com", "Bola Ade").await;
        let brand = ctx.create_brand("Adire House", "NGN", None).await;
        let product = ctx.create_product(brand, "Indigo kaftan", 45_000).await;

        ctx.add_to_basket(customer, product, 1).await;
        ctx.add_to_basket(other, product, 1).await;

        ctx.submit_basket(customer, "ada@example.com").await?;

        assert_eq!(ctx.baskets.get_basket(other).await?.items.len(), 1);

        Ok(())
    }

    async fn insert_second_basket(
        ctx: &TestContext,
        user: UserUuid,
        product: ProductUuid,
    ) -> TestResult<BasketUuid> {
        let basket = BasketUuid::new();

        query("INSERT INTO baskets (uuid, user_uuid) VALUES ($1, $2)")
            .bind(basket.into_uuid())
            .bind(user.into_uuid())
            .execute(ctx.db.pool())
            .await?;

        query(
            "INSERT INTO basket_items (uuid, basket_uuid, product_uuid, quantity, price) \
             VALUES ($1, $2, $3, 1, 45000)",
        )
        .bind(Uuid::now_v7())
        .bind(basket.into_uuid())
        .bind(product.into_uuid())
        .execute(ctx.db.pool())
        .await?;

        Ok(basket)
    }

    #[test]
    fn default_claim_ttl_is_five_minutes() {
        assert_eq!(DEFAULT_CLAIM_TTL, SignedDuration::from_mins(5));
    }
}
