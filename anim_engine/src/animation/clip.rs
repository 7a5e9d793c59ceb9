//! 动画剪辑数据结构
//!
//! 一个剪辑由总时长和 "节点名称 -> NodeAnimation" 映射组成。
//! 加载后只读，通过 `Arc` 在多个播放器之间共享。

use std::collections::HashMap;

use glam::{Mat4, Quat, Vec3};

use super::config::RotationMode;
use super::interpolation::yaw_angle;
use super::keyframe::{first_unsorted, Keyframe, Track};
use super::motion_track::sample_or;
use crate::{AnimError, Result};

/// 节点采样结果
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeTransform {
    pub translate: Vec3,
    pub rotate: Quat,
    pub scale: Vec3,
}

impl Default for NodeTransform {
    fn default() -> Self {
        Self {
            translate: Vec3::ZERO,
            rotate: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl NodeTransform {
    /// 按 缩放 -> 旋转 -> 平移 构建局部矩阵
    pub fn to_matrix(&self, mode: RotationMode) -> Mat4 {
        let rotation = match mode {
            RotationMode::YawOnly => Quat::from_rotation_y(yaw_angle(self.rotate)),
            RotationMode::Full => self.rotate,
        };
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.translate)
    }
}

/// 单个节点（骨骼）的动画通道
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeAnimation {
    pub translate: Track<Vec3>,
    pub rotate: Track<Quat>,
    pub scale: Track<Vec3>,
}

impl NodeAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// 采样三个通道，空通道使用默认值
    pub fn sample(&self, time: f32) -> NodeTransform {
        let defaults = NodeTransform::default();
        NodeTransform {
            translate: sample_or(&self.translate, time, defaults.translate),
            rotate: sample_or(&self.rotate, time, defaults.rotate),
            scale: sample_or(&self.scale, time, defaults.scale),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.translate.is_empty() && self.rotate.is_empty() && self.scale.is_empty()
    }

    /// 最后一个关键帧的时刻
    pub fn last_key_time(&self) -> f32 {
        let last = |times: Option<f32>| times.unwrap_or(0.0);
        last(self.translate.last().map(|k| k.time))
            .max(last(self.rotate.last().map(|k| k.time)))
            .max(last(self.scale.last().map(|k| k.time)))
    }

    fn validate(&self, node: &str) -> Result<()> {
        let unsorted = |channel: &'static str, index: Option<usize>| match index {
            Some(index) => Err(AnimError::UnsortedTrack {
                node: node.to_string(),
                channel,
                index,
            }),
            None => Ok(()),
        };
        unsorted("translate", first_unsorted(&self.translate))?;
        unsorted("rotate", first_unsorted(&self.rotate))?;
        unsorted("scale", first_unsorted(&self.scale))?;
        Ok(())
    }
}

/// 动画剪辑
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    /// 总时长（秒）
    pub duration: f32,
    pub node_animations: HashMap<String, NodeAnimation>,
}

impl AnimationClip {
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration,
            node_animations: HashMap::new(),
        }
    }

    /// 时长取所有轨道中最后一个关键帧的时刻
    pub fn from_key_span(
        name: impl Into<String>,
        node_animations: HashMap<String, NodeAnimation>,
    ) -> Self {
        let duration = node_animations
            .values()
            .map(NodeAnimation::last_key_time)
            .fold(0.0, f32::max);
        Self {
            name: name.into(),
            duration,
            node_animations,
        }
    }

    /// 插入节点动画，返回被替换的旧数据
    pub fn insert_node(
        &mut self,
        name: impl Into<String>,
        animation: NodeAnimation,
    ) -> Option<NodeAnimation> {
        self.node_animations.insert(name.into(), animation)
    }

    pub fn node(&self, name: &str) -> Option<&NodeAnimation> {
        self.node_animations.get(name)
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.node_animations.contains_key(name)
    }

    pub fn node_names(&self) -> impl Iterator<Item = &String> {
        self.node_animations.keys()
    }

    pub fn node_count(&self) -> usize {
        self.node_animations.len()
    }

    /// 加载时校验：所有轨道按时间排序
    pub fn validate(&self) -> Result<()> {
        for (name, animation) in &self.node_animations {
            animation.validate(name)?;
        }
        Ok(())
    }
}

/// 便捷构造：从 (时刻, 值) 列表创建轨道
pub fn track_from<T, I>(keys: I) -> Track<T>
where
    I: IntoIterator<Item = (f32, T)>,
{
    keys.into_iter()
        .map(|(time, value)| Keyframe::new(time, value))
        .collect()
}
