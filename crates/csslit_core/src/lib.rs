pub mod error;
mod literal;

pub use literal::*;
