//! 内置演示内容
//!
//! 没有外部资源时使用：转台动画、多足步行动画及对应骨架。

use std::f32::consts::PI;

use glam::{Quat, Vec3};

use super::clip::{track_from, AnimationClip, NodeAnimation};
use super::keyframe::Keyframe;
use crate::skeleton::{Bone, BoneManager};
use crate::Result;

/// 转台动画（2 秒）
///
/// 同时提供 `root` 和 `AnimatedCube` 两个节点，覆盖 OBJ 与 glTF 两种根节点命名。
pub fn turntable_clip() -> AnimationClip {
    let node = NodeAnimation {
        rotate: track_from([
            (0.0, Quat::IDENTITY),
            (1.0, Quat::from_xyzw(0.0, 0.707, 0.0, 0.707)),
            (2.0, Quat::from_xyzw(0.0, 1.0, 0.0, 0.0)),
        ]),
        scale: track_from([(0.0, Vec3::ONE)]),
        translate: track_from([(0.0, Vec3::ZERO)]),
    };

    let mut clip = AnimationClip::new("Turntable", 2.0);
    clip.insert_node("root", node.clone());
    clip.insert_node("AnimatedCube", node);
    clip
}

/// 腿骨名称
pub fn leg_name(leg: usize) -> String {
    format!("Leg{leg}")
}

/// 多足步行动画（4 秒，每条腿 9 个关键帧）
///
/// 左右腿相位差 π，前后组相位差 0.5，腿绕 Y 轴摆动 `sin(相位) * 0.3` 弧度并上下起伏。
pub fn walk_clip(leg_count: usize) -> AnimationClip {
    let mut clip = AnimationClip::new("Walk", 4.0);

    for leg in 0..leg_count {
        let phase = (leg % 2) as f32 * PI + (leg / 4) as f32 * 0.5;
        let mut node = NodeAnimation::new();

        for key in 0..9 {
            let time = key as f32 * 0.5;
            let time_phase = time * PI * 0.5 + phase;
            let swing = time_phase.sin();

            node.translate
                .push(Keyframe::new(time, Vec3::new(0.0, swing * 0.1, 0.0)));
            node.rotate
                .push(Keyframe::new(time, Quat::from_rotation_y(swing * 0.3)));
            node.scale.push(Keyframe::new(time, Vec3::ONE));
        }

        clip.insert_node(leg_name(leg), node);
    }

    clip
}

/// `Root` 加上 `leg_count` 条直接挂在根上的腿
pub fn spider_skeleton(leg_count: usize) -> Result<BoneManager> {
    let mut manager = BoneManager::new();
    manager.add_bone(Bone::new("Root", -1));
    for leg in 0..leg_count {
        manager.add_bone(Bone::new(leg_name(leg), 0));
    }
    manager.build()?;
    Ok(manager)
}
