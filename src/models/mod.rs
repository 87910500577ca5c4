pub mod import;
pub mod lenient;
pub mod product;
