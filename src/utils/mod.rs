pub mod flight;
pub mod title;

pub use flight::{InFlight, OpKind};
pub use title::derive_title;
