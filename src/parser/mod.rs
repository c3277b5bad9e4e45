pub mod normalize;
pub mod public_data;

pub use normalize::*;
pub use public_data::*;
