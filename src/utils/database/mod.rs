mod lib;

#[cfg(test)]
pub mod memory;

pub use lib::*;
