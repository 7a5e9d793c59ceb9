//! Anim Engine - 骨骼动画运行时
//!
//! 提供：
//! - 关键帧轨道采样（Vec3 线性插值、Quat 球面线性插值）
//! - 动画播放器（播放 / 暂停 / 停止 / 循环）
//! - 骨骼层级合成与蒙皮矩阵计算
//! - CPU 顶点蒙皮
//!
//! 矩阵约定与 glam 一致：列向量、列主序，`A * B` 表示先应用 B 再应用 A。

pub mod animation;
pub mod model;
pub mod skeleton;
pub mod skinning;

pub use animation::{AnimationClip, AnimationPlayer, Keyframe, NodeAnimation, Track};
pub use model::AnimatedModel;
pub use skeleton::{Bone, BoneManager};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimError {
    #[error("cannot sample an empty {channel} track")]
    EmptyTrack { channel: &'static str },

    #[error("keyframe {index} of {node}.{channel} is earlier than its predecessor")]
    UnsortedTrack {
        node: String,
        channel: &'static str,
        index: usize,
    },

    #[error("bone '{bone}' at index {index} has invalid parent index {parent}")]
    InvalidHierarchy {
        bone: String,
        index: usize,
        parent: i32,
    },

    #[error("duplicate bone name: {0}")]
    DuplicateBone(String),

    #[error("unknown animation: {0}")]
    UnknownAnimation(String),
}

pub type Result<T> = std::result::Result<T, AnimError>;
