pub mod product;
pub mod review;

pub use product::Entity as Product;
pub use review::Entity as Review;
