pub mod catalog;
pub mod purchase;
pub mod user;

pub use catalog::{Item, NewItem, NewProduct, NewVendor, Product, Vendor};
pub use purchase::{NewPurchaseItem, NewPurchaseProduct, PurchaseItem, PurchaseProduct};
pub use user::{NewUser, User};
