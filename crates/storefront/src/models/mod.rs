//! Domain models for the storefront.

pub mod blog;
pub mod cart;
pub mod order;
pub mod product;
pub mod session;

pub use blog::{BlogDraft, BlogPost};
pub use cart::{Cart, CartItem};
pub use order::{Order, OrderCustomer};
pub use product::{Product, ProductDraft};
pub use session::CurrentUser;
