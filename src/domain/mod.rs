//! Domain logic - pure version rules independent of git and the filesystem

pub mod bump;
pub mod version;

pub use bump::BumpKind;
pub use version::{bump, Version};
