pub mod calc;
pub mod health;
pub mod items;
pub mod metrics;
pub mod root;
pub mod trace;

pub use calc::*;
pub use health::*;
pub use items::*;
pub use metrics::*;
pub use root::*;
pub use trace::*;
