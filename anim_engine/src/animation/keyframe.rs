//! 动画关键帧

use glam::{Quat, Vec3};

/// 单个关键帧：某一时刻（秒）的通道值
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe<T> {
    pub value: T,
    pub time: f32,
}

impl<T> Keyframe<T> {
    pub fn new(time: f32, value: T) -> Self {
        Self { value, time }
    }
}

/// 关键帧轨道，按时间非递减排序。空轨道表示该通道没有动画。
pub type Track<T> = Vec<Keyframe<T>>;

/// 平移 / 缩放关键帧
pub type KeyframeVec3 = Keyframe<Vec3>;

/// 旋转关键帧，四元数按 (x, y, z, w) 存储
pub type KeyframeQuat = Keyframe<Quat>;

/// 检查轨道是否按时间排序，返回第一个逆序关键帧的下标
pub(crate) fn first_unsorted<T>(track: &[Keyframe<T>]) -> Option<usize> {
    track
        .windows(2)
        .position(|pair| pair[1].time < pair[0].time)
        .map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_unsorted() {
        let sorted: Track<f32> = vec![
            Keyframe::new(0.0, 0.0),
            Keyframe::new(1.0, 0.0),
            Keyframe::new(1.0, 0.0),
        ];
        assert_eq!(first_unsorted(&sorted), None);

        let unsorted: Track<f32> = vec![
            Keyframe::new(0.0, 0.0),
            Keyframe::new(2.0, 0.0),
            Keyframe::new(1.0, 0.0),
        ];
        assert_eq!(first_unsorted(&unsorted), Some(2));

        let empty: Track<f32> = Vec::new();
        assert_eq!(first_unsorted(&empty), None);
    }
}
