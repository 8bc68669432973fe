pub mod dispenser;

pub use dispenser::*;
