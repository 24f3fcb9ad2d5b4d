// Command implementations. The transform is the only mode.
pub mod transform;

pub use transform::run_transform;
