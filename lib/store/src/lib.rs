pub mod codec;
pub mod error;
pub mod store;
pub mod table;
pub mod traits;

pub use error::StoreError;
pub use store::TableStore;
pub use table::Table;
pub use traits::TableSpec;
