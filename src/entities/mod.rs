//! Entity module - Contains all SeaORM entity definitions for the store.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod customer;
pub mod order;
pub mod product;

// Re-export specific types to avoid conflicts
pub use customer::{Column as CustomerColumn, Entity as Customer, Model as CustomerModel};
pub use order::{Column as OrderColumn, Entity as Order, Model as OrderModel};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
