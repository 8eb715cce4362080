//! Resource-category clients.
//!
//! Each client embeds its own [`BaseClient`](crate::BaseClient) and exposes,
//! for every resource kind it serves, the same three operations:
//! `get_<kind>_by_name`, `get_<kind>_by_id` and `list_<kinds>`.

mod berry;
mod item;

pub use berry::BerryClient;
pub use item::ItemClient;
