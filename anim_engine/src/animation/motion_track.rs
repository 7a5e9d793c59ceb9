//! 动画轨道采样
//!
//! 给定轨道与查询时刻，找到包围该时刻的两个关键帧并插值。
//! 早于第一帧取第一帧的值，晚于最后一帧取最后一帧的值。

use glam::{Quat, Vec3};

use super::interpolation::{lerp, slerp};
use super::keyframe::Keyframe;
use crate::{AnimError, Result};

/// 可插值的通道值类型（静态分发）
pub trait Interpolate: Copy {
    /// 通道名称，用于错误信息
    const CHANNEL: &'static str;

    fn interpolate(a: &Self, b: &Self, t: f32) -> Self;
}

impl Interpolate for Vec3 {
    const CHANNEL: &'static str = "vec3";

    fn interpolate(a: &Self, b: &Self, t: f32) -> Self {
        lerp(*a, *b, t)
    }
}

impl Interpolate for Quat {
    const CHANNEL: &'static str = "quaternion";

    fn interpolate(a: &Self, b: &Self, t: f32) -> Self {
        slerp(*a, *b, t)
    }
}

/// 计算指定时刻的通道值
///
/// 按顺序扫描相邻关键帧对，第一个满足 `prev.time <= time <= next.time` 的区间生效。
/// 时刻恰好落在某关键帧上时，该帧作为前一区间的终点（t = 1）。
pub fn calculate_value<T: Interpolate>(track: &[Keyframe<T>], time: f32) -> Result<T> {
    let first = track.first().ok_or(AnimError::EmptyTrack { channel: T::CHANNEL })?;

    if track.len() == 1 || time <= first.time {
        return Ok(first.value);
    }

    for pair in track.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev.time <= time && time <= next.time {
            let interval = next.time - prev.time;
            // 重复时刻的关键帧：直接取后一帧，避免除零
            let t = if interval > 0.0 {
                (time - prev.time) / interval
            } else {
                1.0
            };
            return Ok(T::interpolate(&prev.value, &next.value, t));
        }
    }

    // 晚于最后一帧
    Ok(track[track.len() - 1].value)
}

/// 采样轨道，空轨道返回 `default`
pub fn sample_or<T: Interpolate>(track: &[Keyframe<T>], time: f32, default: T) -> T {
    calculate_value(track, time).unwrap_or(default)
}
