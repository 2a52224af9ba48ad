pub mod product;
pub mod session;

pub use product::ProductRecord;
pub use session::SessionRecord;
