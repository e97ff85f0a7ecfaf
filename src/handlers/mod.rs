// handlers/mod.rs - HTTP handlers grouped by resource
//
// Which routes need a session token is decided in `app::route_table`, not here.

pub mod auth;
pub mod dashboard;
pub mod inventory;
pub mod system;
