pub mod change_receiver;
pub mod claim;
pub mod deposit;
pub mod initialize;
pub mod quote;

pub use change_receiver::*;
pub use claim::*;
pub use deposit::*;
pub use initialize::*;
pub use quote::*;
