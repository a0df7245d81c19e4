mod error;
mod export;
mod item;
mod menu;
mod plan;
mod week;

pub use error::*;
pub use export::*;
pub use item::*;
pub use menu::*;
pub use plan::*;
pub use week::*;
