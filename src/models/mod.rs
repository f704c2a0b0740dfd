pub mod calc;
pub mod error;
pub mod health;
pub mod item;
pub mod root;
pub mod trace;

pub use calc::*;
pub use error::*;
pub use health::*;
pub use item::*;
pub use root::*;
pub use trace::*;
