// handlers/inventory/mod.rs - CRUD over catalog entities and purchase records
//
// Every handler is one store call. Catalog entities (product, item, vendor)
// support create/list/get; purchase records add update and delete and report an
// empty list as 404 rather than [].

pub mod item;
pub mod product;
pub mod purchase_item;
pub mod purchase_product;
pub mod vendor;

/// Path ids are store-assigned integers; anything else cannot match a row
pub(crate) fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}
