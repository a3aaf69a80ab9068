pub mod broker;
pub mod ipo;

pub use broker::*;
pub use ipo::*;
