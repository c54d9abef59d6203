//! Data models
//!
//! Records held by the back-office state store. Every record is keyed by an
//! opaque string id and is only ever replaced as a whole. Tenant-scoped
//! records carry the id of the restaurant they belong to.

pub mod dining_table;
pub mod kot;
pub mod menu_item;
pub mod order;
pub mod reservation;
pub mod restaurant;
pub mod staff;
pub mod user;

// Re-exports
pub use dining_table::*;
pub use kot::*;
pub use menu_item::*;
pub use order::*;
pub use reservation::*;
pub use restaurant::*;
pub use staff::*;
pub use user::*;

/// A record addressable by id within its collection
pub trait Entity: Clone {
    fn id(&self) -> &str;
}

/// A record owned by exactly one restaurant
pub trait TenantScoped: Entity {
    fn restaurant_id(&self) -> &str;
}

macro_rules! impl_entity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Entity for $ty {
                #[inline]
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

macro_rules! impl_tenant_scoped {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TenantScoped for $ty {
                #[inline]
                fn restaurant_id(&self) -> &str {
                    &self.restaurant_id
                }
            }
        )*
    };
}

impl_entity!(Restaurant, User, Staff, DiningTable, MenuItem, Reservation, Order, Kot);
impl_tenant_scoped!(Staff, DiningTable, MenuItem, Reservation, Order, Kot);
