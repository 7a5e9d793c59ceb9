//! 骨骼层级合成
//!
//! 单次前向遍历：要求父骨骼排在子骨骼之前（`parent_index < index`）。
//! 该约束在构建骨骼列表时校验一次，逐帧合成不再重复检查。

use glam::Mat4;

use super::Bone;
use crate::{AnimError, Result};

/// 校验骨骼层级：每个父下标必须为 -1 或小于自身下标
pub fn validate_hierarchy(bones: &[Bone]) -> Result<()> {
    for (index, bone) in bones.iter().enumerate() {
        let parent = bone.parent_index;
        let valid = parent < 0 || (parent as usize) < index;
        // 只接受 -1 作为根标记
        if !valid || parent < -1 {
            return Err(AnimError::InvalidHierarchy {
                bone: bone.name.clone(),
                index,
                parent,
            });
        }
    }
    Ok(())
}

/// 计算全局变换和蒙皮矩阵，写入调用方提供的缓冲区（不分配内存）
///
/// - `global[i] = global[parent] * local[i]`（根骨骼的父变换为单位矩阵）
/// - `skinning[i] = global[i] * offset[i]`
///
/// 只处理三者中最短的长度，多出的骨骼或缓冲区保持不变。
/// 未通过 `validate_hierarchy` 的父下标（指向自身或之后的骨骼）按根骨骼处理。
pub fn compose_into(bones: &[Bone], globals: &mut [Mat4], skinning: &mut [Mat4]) {
    let count = bones.len().min(globals.len()).min(skinning.len());

    for (i, bone) in bones[..count].iter().enumerate() {
        let parent_global = match bone.parent() {
            Some(parent) if parent < i => globals[parent],
            _ => Mat4::IDENTITY,
        };

        globals[i] = parent_global * bone.current_transform;
        skinning[i] = globals[i] * bone.offset_matrix;
    }
}

/// 计算蒙皮矩阵数组
pub fn compute_skinning_matrices(bones: &[Bone]) -> Vec<Mat4> {
    let mut globals = vec![Mat4::IDENTITY; bones.len()];
    let mut skinning = vec![Mat4::IDENTITY; bones.len()];
    compose_into(bones, &mut globals, &mut skinning);
    skinning
}
