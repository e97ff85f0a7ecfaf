//! In-memory [`InventoryStore`] used by tests and local demos.
//!
//! Ids are assigned sequentially per table starting at 1, mirroring `SERIAL`
//! columns. [`MemoryStore::failing`] builds a store whose every call errors, for
//! exercising the 500 path.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{
    Item, NewItem, NewProduct, NewPurchaseItem, NewPurchaseProduct, NewUser, NewVendor, Product,
    PurchaseItem, PurchaseProduct, User, Vendor,
};
use super::{InventoryStore, StoreError};

struct Table<T> {
    rows: Vec<T>,
    last_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            last_id: 0,
        }
    }
}

impl<T: Clone> Table<T> {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }

    fn find(&self, matches: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.iter().find(|row| matches(row)).cloned()
    }

    fn replace(&mut self, matches: impl Fn(&T) -> bool, row: T) -> Option<T> {
        let slot = self.rows.iter_mut().find(|r| matches(r))?;
        *slot = row;
        Some(slot.clone())
    }

    fn remove(&mut self, matches: impl Fn(&T) -> bool) -> Option<T> {
        let pos = self.rows.iter().position(|r| matches(r))?;
        Some(self.rows.remove(pos))
    }
}

#[derive(Default)]
struct Tables {
    users: Table<User>,
    products: Table<Product>,
    items: Table<Item>,
    vendors: Table<Vendor>,
    purchase_items: Table<PurchaseItem>,
    purchase_products: Table<PurchaseProduct>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that answers every call with `StoreError::Unavailable`
    pub fn failing() -> Self {
        Self {
            tables: RwLock::default(),
            failing: true,
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing {
            return Err(StoreError::Unavailable("memory store is offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        if tables.users.rows.iter().any(|u| u.user_email == user.email) {
            return Err(StoreError::UniqueViolation(
                "duplicate key value violates unique constraint \"users_user_email_key\"".to_string(),
            ));
        }

        let row = User {
            user_id: Uuid::new_v4(),
            user_name: user.name,
            user_email: user.email,
            user_password: user.password_hash,
        };
        tables.users.rows.push(row.clone());
        Ok(row)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.check()?;
        Ok(self.tables.read().await.users.find(|u| u.user_email == email))
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        self.check()?;
        Ok(self.tables.read().await.users.find(|u| u.user_id == id))
    }

    async fn insert_product(&self, product: NewProduct) -> Result<Product, StoreError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        let row = Product {
            product_id: tables.products.next_id(),
            product_name: product.name,
            price: product.price,
        };
        tables.products.rows.push(row.clone());
        Ok(row)
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        self.check()?;
        Ok(self.tables.read().await.products.rows.clone())
    }

    async fn get_product(&self, id: i32) -> Result<Option<Product>, StoreError> {
        self.check()?;
        Ok(self.tables.read().await.products.find(|p| p.product_id == id))
    }

    async fn insert_item(&self, item: NewItem) -> Result<Item, StoreError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        let row = Item {
            item_id: tables.items.next_id(),
            item_name: item.name,
            price: item.price,
        };
        tables.items.rows.push(row.clone());
        Ok(row)
    }

    async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        self.check()?;
        Ok(self.tables.read().await.items.rows.clone())
    }

    async fn get_item(&self, id: i32) -> Result<Option<Item>, StoreError> {
        self.check()?;
        Ok(self.tables.read().await.items.find(|i| i.item_id == id))
    }

    async fn insert_vendor(&self, vendor: NewVendor) -> Result<Vendor, StoreError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        let row = Vendor {
            vendor_id: tables.vendors.next_id(),
            vendor_name: vendor.name,
            vendor_address: vendor.address,
        };
        tables.vendors.rows.push(row.clone());
        Ok(row)
    }

    async fn list_vendors(&self) -> Result<Vec<Vendor>, StoreError> {
        self.check()?;
        Ok(self.tables.read().await.vendors.rows.clone())
    }

    async fn get_vendor(&self, id: i32) -> Result<Option<Vendor>, StoreError> {
        self.check()?;
        Ok(self.tables.read().await.vendors.find(|v| v.vendor_id == id))
    }

    async fn insert_purchase_item(&self, record: NewPurchaseItem) -> Result<PurchaseItem, StoreError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        let row = record.into_record(tables.purchase_items.next_id());
        tables.purchase_items.rows.push(row.clone());
        Ok(row)
    }

    async fn list_purchase_items(&self) -> Result<Vec<PurchaseItem>, StoreError> {
        self.check()?;
        Ok(self.tables.read().await.purchase_items.rows.clone())
    }

    async fn get_purchase_item(&self, id: i32) -> Result<Option<PurchaseItem>, StoreError> {
        self.check()?;
        Ok(self.tables.read().await.purchase_items.find(|p| p.purchase_id == id))
    }

    async fn update_purchase_item(
        &self,
        id: i32,
        record: NewPurchaseItem,
    ) -> Result<Option<PurchaseItem>, StoreError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        Ok(tables
            .purchase_items
            .replace(|p| p.purchase_id == id, record.into_record(id)))
    }

    async fn delete_purchase_item(&self, id: i32) -> Result<Option<PurchaseItem>, StoreError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        Ok(tables.purchase_items.remove(|p| p.purchase_id == id))
    }

    async fn insert_purchase_product(
        &self,
        record: NewPurchaseProduct,
    ) -> Result<PurchaseProduct, StoreError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        let row = record.into_record(tables.purchase_products.next_id());
        tables.purchase_products.rows.push(row.clone());
        Ok(row)
    }

    async fn list_purchase_products(&self) -> Result<Vec<PurchaseProduct>, StoreError> {
        self.check()?;
        Ok(self.tables.read().await.purchase_products.rows.clone())
    }

    async fn get_purchase_product(&self, id: i32) -> Result<Option<PurchaseProduct>, StoreError> {
        self.check()?;
        Ok(self
            .tables
            .read()
            .await
            .purchase_products
            .find(|p| p.purchase_id == id))
    }

    async fn update_purchase_product(
        &self,
        id: i32,
        record: NewPurchaseProduct,
    ) -> Result<Option<PurchaseProduct>, StoreError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        Ok(tables
            .purchase_products
            .replace(|p| p.purchase_id == id, record.into_record(id)))
    }

    async fn delete_purchase_product(&self, id: i32) -> Result<Option<PurchaseProduct>, StoreError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        Ok(tables.purchase_products.remove(|p| p.purchase_id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn purchase(quantity: i32) -> NewPurchaseItem {
        NewPurchaseItem {
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            purchase_valid_date: None,
            item_id: 1,
            item_name: "Bolt".into(),
            quantity,
            price: Decimal::new(25, 2),
            vendor_id: Some(1),
            vendor_name: Some("Acme".into()),
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_per_table() {
        let store = MemoryStore::new();
        let a = store
            .insert_product(NewProduct { name: "Pen".into(), price: Decimal::ONE })
            .await
            .unwrap();
        let b = store
            .insert_product(NewProduct { name: "Ink".into(), price: Decimal::TWO })
            .await
            .unwrap();
        let item = store
            .insert_item(NewItem { name: "Bolt".into(), price: Decimal::ONE })
            .await
            .unwrap();

        assert_eq!((a.product_id, b.product_id, item.item_id), (1, 2, 1));
    }

    #[tokio::test]
    async fn duplicate_email_is_a_unique_violation() {
        let store = MemoryStore::new();
        let user = NewUser {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password_hash: "x".into(),
        };
        store.insert_user(user.clone()).await.unwrap();

        assert!(matches!(
            store.insert_user(user).await,
            Err(StoreError::UniqueViolation(_))
        ));
    }

    #[tokio::test]
    async fn update_keeps_id_and_delete_removes() {
        let store = MemoryStore::new();
        let created = store.insert_purchase_item(purchase(5)).await.unwrap();

        let updated = store
            .update_purchase_item(created.purchase_id, purchase(9))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.purchase_id, created.purchase_id);
        assert_eq!(updated.quantity, 9);

        assert!(store.update_purchase_item(99, purchase(1)).await.unwrap().is_none());
        assert!(store.delete_purchase_item(created.purchase_id).await.unwrap().is_some());
        assert!(store.get_purchase_item(created.purchase_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn failing_store_errors_everywhere() {
        let store = MemoryStore::failing();
        assert!(store.ping().await.is_err());
        assert!(store.list_products().await.is_err());
        assert!(store.find_user_by_email("a@b.co").await.is_err());
    }
}
