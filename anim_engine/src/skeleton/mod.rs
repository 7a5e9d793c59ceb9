//! 骨骼系统：骨骼层级与蒙皮矩阵合成

mod bone;
mod hierarchy;
mod manager;

pub use bone::Bone;
pub use hierarchy::{compose_into, compute_skinning_matrices, validate_hierarchy};
pub use manager::BoneManager;
