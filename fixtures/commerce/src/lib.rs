//! Commerce demo catalog for DashView.
//!
//! Hand-written sample rows mirror the admin dashboard screens (orders,
//! products, customers) and carry the record models the view pipeline
//! reads. Seeded generators scale the same shapes up for demos and
//! property tests.

pub mod customer;
pub mod order;
pub mod product;
pub mod seed;

pub use customer::{CUSTOMER_MODEL, Customer, DECLARED_CUSTOMER_TOTAL, sample_customers};
pub use order::{ORDER_MODEL, Order, OrderStatus, sample_orders};
pub use product::{PRODUCT_MODEL, Product, StockLevel, sample_products};
pub use seed::CatalogSeed;
