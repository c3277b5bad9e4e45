pub mod baseline;
pub mod regions;
pub mod types;

pub use baseline::*;
pub use regions::*;
pub use types::*;
