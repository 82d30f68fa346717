//! Test Helpers

use crate::{
    auth::AuthenticatedUser,
    domain::{
        baskets::{
            BasketsService,
            data::NewBasketItem,
            records::{BasketItemRecord, BasketItemUuid},
        },
        brands::{BrandsService, data::NewBrand, records::BrandUuid},
        products::{ProductsService, data::NewProduct, records::ProductUuid},
        submissions::{BasketSubmissionError, BasketSubmissionService, records::SubmissionReceipt},
        users::{
            UsersService,
            data::{NewUser, ProfileUpdate},
            records::UserUuid,
        },
    },
    test::TestContext,
};

impl TestContext {
    /// Create a user without a profile.
    pub(crate) async fn create_user(&self, email: &str) -> UserUuid {
        let uuid = UserUuid::new();

        self.users
            .create_user(NewUser {
                uuid,
                email: email.to_string(),
            })
            .await
            .expect("Failed to create test user");

        uuid
    }

    /// Create a user with a named profile, ready to submit baskets.
    pub(crate) async fn create_customer(&self, email: &str, full_name: &str) -> UserUuid {
        let uuid = self.create_user(email).await;

        self.users
            .upsert_profile(
                uuid,
                ProfileUpdate {
                    full_name: Some(full_name.to_string()),
                    phone: Some("+234 800 000 0000".to_string()),
                    address: Some("12 Broad Street, Lagos".to_string()),
                },
            )
            .await
            .expect("Failed to create test profile");

        uuid
    }

    pub(crate) async fn create_brand(
        &self,
        name: &str,
        currency: &str,
        owner: Option<UserUuid>,
    ) -> BrandUuid {
        let uuid = BrandUuid::new();

        self.brands
            .create_brand(NewBrand {
                uuid,
                name: name.to_string(),
                currency: currency.to_string(),
                owner_uuid: owner,
                image_url: None,
            })
            .await
            .expect("Failed to create test brand");

        uuid
    }

    pub(crate) async fn create_product(
        &self,
        brand: BrandUuid,
        title: &str,
        price: u64,
    ) -> ProductUuid {
        self.insert_product(brand, title, price, None).await
    }

    pub(crate) async fn create_product_on_sale(
        &self,
        brand: BrandUuid,
        title: &str,
        price: u64,
        sale_price: u64,
    ) -> ProductUuid {
        self.insert_product(brand, title, price, Some(sale_price))
            .await
    }

    async fn insert_product(
        &self,
        brand: BrandUuid,
        title: &str,
        price: u64,
        sale_price: Option<u64>,
    ) -> ProductUuid {
        let uuid = ProductUuid::new();

        self.products
            .create_product(NewProduct {
                uuid,
                brand_uuid: brand,
                title: title.to_string(),
                category: Some("Clothing".to_string()),
                price,
                sale_price,
                image_url: None,
            })
            .await
            .expect("Failed to create test product");

        uuid
    }

    pub(crate) async fn add_to_basket(
        &self,
        user: UserUuid,
        product: ProductUuid,
        quantity: u32,
    ) -> BasketItemRecord {
        self.baskets
            .add_item(
                user,
                NewBasketItem {
                    uuid: BasketItemUuid::new(),
                    product_uuid: product,
                    quantity,
                    size: Some("M".to_string()),
                    colour: None,
                    notes: None,
                },
            )
            .await
            .expect("Failed to add test basket item")
    }

    pub(crate) async fn submit_basket(
        &self,
        user: UserUuid,
        email: &str,
    ) -> Result<SubmissionReceipt, BasketSubmissionError> {
        self.submissions
            .submit_basket(&AuthenticatedUser {
                uuid: user,
                email: email.to_string(),
            })
            .await
    }
}
