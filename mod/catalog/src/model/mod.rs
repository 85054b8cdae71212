mod allergen;
mod ingredient;
mod overhead;
mod price;
mod product;
mod recipe;
mod supplier;

pub use allergen::*;
pub use ingredient::*;
pub use overhead::*;
pub use price::*;
pub use product::*;
pub use recipe::*;
pub use supplier::*;
