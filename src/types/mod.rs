mod frequency;
mod link;
mod point;
mod tower;

pub use frequency::*;
pub use link::*;
pub use point::*;
pub use tower::*;
