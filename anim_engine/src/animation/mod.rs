//! 动画系统
//!
//! 提供关键帧轨道采样、动画剪辑和播放器。

pub mod config;
pub mod demo;
pub mod interpolation;
mod clip;
mod keyframe;
mod motion_track;
mod player;

pub use clip::{track_from, AnimationClip, NodeAnimation, NodeTransform};
pub use config::{get_config, reset_config, set_config, AnimationConfig, RotationMode};
pub use interpolation::{dot, lerp, normalize, slerp, yaw_angle};
pub use keyframe::{Keyframe, KeyframeQuat, KeyframeVec3, Track};
pub use motion_track::{calculate_value, sample_or, Interpolate};
pub use player::{AnimationPlayer, PlaybackState};
