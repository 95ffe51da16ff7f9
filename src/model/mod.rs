//! Wire-level data types exchanged with the storefront gateway.

pub mod address;
pub mod book;
pub mod cart;
pub mod order;
pub mod payment;

pub use address::*;
pub use book::*;
pub use cart::*;
pub use order::*;
pub use payment::*;
