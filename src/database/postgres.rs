//! PostgreSQL implementation of [`InventoryStore`].
//!
//! One parameterized statement per operation. Table and column names follow
//! `sql/schema.sql`; unquoted camelCase columns fold to lower case in Postgres.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::{
    Item, NewItem, NewProduct, NewPurchaseItem, NewPurchaseProduct, NewUser, NewVendor, Product,
    PurchaseItem, PurchaseProduct, User, Vendor,
};
use super::{InventoryStore, StoreError};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl InventoryStore for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let row = sqlx::query_as::<_, User>(
            "INSERT INTO users (user_name, user_email, user_password) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, User>("SELECT * FROM users WHERE user_email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, User>("SELECT * FROM users WHERE user_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_product(&self, product: NewProduct) -> Result<Product, StoreError> {
        let row = sqlx::query_as::<_, Product>(
            "INSERT INTO product (product_name, price) VALUES ($1, $2) RETURNING *",
        )
        .bind(&product.name)
        .bind(product.price)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query_as::<_, Product>("SELECT * FROM product ORDER BY product_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_product(&self, id: i32) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query_as::<_, Product>("SELECT * FROM product WHERE product_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_item(&self, item: NewItem) -> Result<Item, StoreError> {
        let row = sqlx::query_as::<_, Item>(
            "INSERT INTO item (item_name, price) VALUES ($1, $2) RETURNING *",
        )
        .bind(&item.name)
        .bind(item.price)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        let rows = sqlx::query_as::<_, Item>("SELECT * FROM item ORDER BY item_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_item(&self, id: i32) -> Result<Option<Item>, StoreError> {
        let row = sqlx::query_as::<_, Item>("SELECT * FROM item WHERE item_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_vendor(&self, vendor: NewVendor) -> Result<Vendor, StoreError> {
        let row = sqlx::query_as::<_, Vendor>(
            "INSERT INTO vendor (vendor_name, vendor_address) VALUES ($1, $2) RETURNING *",
        )
        .bind(&vendor.name)
        .bind(&vendor.address)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_vendors(&self) -> Result<Vec<Vendor>, StoreError> {
        let rows = sqlx::query_as::<_, Vendor>("SELECT * FROM vendor ORDER BY vendor_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_vendor(&self, id: i32) -> Result<Option<Vendor>, StoreError> {
        let row = sqlx::query_as::<_, Vendor>("SELECT * FROM vendor WHERE vendor_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_purchase_item(&self, record: NewPurchaseItem) -> Result<PurchaseItem, StoreError> {
        let row = sqlx::query_as::<_, PurchaseItem>(
            "INSERT INTO purchaseItem (purchaseDate, purchaseValidDate, item_id, item_name, quantity, price, vendor_id, vendor_name) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(record.purchase_date)
        .bind(record.purchase_valid_date)
        .bind(record.item_id)
        .bind(&record.item_name)
        .bind(record.quantity)
        .bind(record.price)
        .bind(record.vendor_id)
        .bind(&record.vendor_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_purchase_items(&self) -> Result<Vec<PurchaseItem>, StoreError> {
        let rows = sqlx::query_as::<_, PurchaseItem>("SELECT * FROM purchaseItem ORDER BY purchase_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_purchase_item(&self, id: i32) -> Result<Option<PurchaseItem>, StoreError> {
        let row = sqlx::query_as::<_, PurchaseItem>("SELECT * FROM purchaseItem WHERE purchase_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_purchase_item(
        &self,
        id: i32,
        record: NewPurchaseItem,
    ) -> Result<Option<PurchaseItem>, StoreError> {
        let row = sqlx::query_as::<_, PurchaseItem>(
            "UPDATE purchaseItem SET purchaseDate = $1, purchaseValidDate = $2, item_id = $3, item_name = $4, \
             quantity = $5, price = $6, vendor_id = $7, vendor_name = $8 WHERE purchase_id = $9 RETURNING *",
        )
        .bind(record.purchase_date)
        .bind(record.purchase_valid_date)
        .bind(record.item_id)
        .bind(&record.item_name)
        .bind(record.quantity)
        .bind(record.price)
        .bind(record.vendor_id)
        .bind(&record.vendor_name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_purchase_item(&self, id: i32) -> Result<Option<PurchaseItem>, StoreError> {
        let row = sqlx::query_as::<_, PurchaseItem>(
            "DELETE FROM purchaseItem WHERE purchase_id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_purchase_product(
        &self,
        record: NewPurchaseProduct,
    ) -> Result<PurchaseProduct, StoreError> {
        let row = sqlx::query_as::<_, PurchaseProduct>(
            "INSERT INTO purchaseproduct (purchaseDate, purchaseValidDate, product_id, product_name, quantity, price, vendor_id, vendor_name) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(record.purchase_date)
        .bind(record.purchase_valid_date)
        .bind(record.product_id)
        .bind(&record.product_name)
        .bind(record.quantity)
        .bind(record.price)
        .bind(record.vendor_id)
        .bind(&record.vendor_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_purchase_products(&self) -> Result<Vec<PurchaseProduct>, StoreError> {
        let rows = sqlx::query_as::<_, PurchaseProduct>(
            "SELECT * FROM purchaseproduct ORDER BY purchase_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_purchase_product(&self, id: i32) -> Result<Option<PurchaseProduct>, StoreError> {
        let row = sqlx::query_as::<_, PurchaseProduct>(
            "SELECT * FROM purchaseproduct WHERE purchase_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_purchase_product(
        &self,
        id: i32,
        record: NewPurchaseProduct,
    ) -> Result<Option<PurchaseProduct>, StoreError> {
        let row = sqlx::query_as::<_, PurchaseProduct>(
            "UPDATE purchaseproduct SET purchaseDate = $1, purchaseValidDate = $2, product_id = $3, product_name = $4, \
             quantity = $5, price = $6, vendor_id = $7, vendor_name = $8 WHERE purchase_id = $9 RETURNING *",
        )
        .bind(record.purchase_date)
        .bind(record.purchase_valid_date)
        .bind(record.product_id)
        .bind(&record.product_name)
        .bind(record.quantity)
        .bind(record.price)
        .bind(record.vendor_id)
        .bind(&record.vendor_name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_purchase_product(&self, id: i32) -> Result<Option<PurchaseProduct>, StoreError> {
        let row = sqlx::query_as::<_, PurchaseProduct>(
            "DELETE FROM purchaseproduct WHERE purchase_id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
