//! Resource routers.
//!
//! Each router is a borrowed handle over the client's [`Executor`]
//! (`client.products()`, `client.orders()`, ...). Routers map typed
//! arguments onto an [`ApiRequest`], leave out absent optionals, and decode
//! the result into domain entities. They perform no business validation;
//! the marketplace is the authority.
//!
//! [`Executor`]: crate::api::Executor
//! [`ApiRequest`]: crate::api::ApiRequest

mod categories;
mod orders;
mod products;
mod webhooks;

#[cfg(test)]
mod products_tests;

pub use categories::Categories;
pub use orders::Orders;
pub use products::Products;
pub use webhooks::Webhooks;
