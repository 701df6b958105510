pub mod predict;
pub mod serve;

pub use predict::predict;
pub use serve::serve;
