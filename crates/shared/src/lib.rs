mod column;
mod date;
mod id;
pub mod mealplan;
mod number;
pub mod recipe;

pub use column::*;
pub use date::*;
pub use id::*;
pub use number::*;
