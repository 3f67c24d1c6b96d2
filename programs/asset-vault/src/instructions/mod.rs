pub mod deposit;
pub mod initialize;

pub use deposit::*;
pub use initialize::*;
