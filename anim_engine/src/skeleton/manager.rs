//! 骨骼管理器

use glam::Mat4;
use std::collections::HashMap;

use super::hierarchy::{compose_into, validate_hierarchy};
use super::Bone;
use crate::animation::AnimationPlayer;
use crate::{AnimError, Result};

/// 骨骼管理器
///
/// 持有扁平骨骼数组、名称索引以及每帧重算的全局 / 蒙皮矩阵缓冲区。
pub struct BoneManager {
    bones: Vec<Bone>,
    name_to_index: HashMap<String, usize>,
    global_transforms: Vec<Mat4>,
    skinning_matrices: Vec<Mat4>,
}

impl BoneManager {
    pub fn new() -> Self {
        Self {
            bones: Vec::new(),
            name_to_index: HashMap::new(),
            global_transforms: Vec::new(),
            skinning_matrices: Vec::new(),
        }
    }

    /// 添加骨骼，返回其下标
    pub fn add_bone(&mut self, bone: Bone) -> usize {
        let index = self.bones.len();
        self.name_to_index.entry(bone.name.clone()).or_insert(index);
        self.bones.push(bone);
        index
    }

    /// 校验层级并初始化矩阵缓冲区
    ///
    /// 加载完所有骨骼后调用一次。
    pub fn build(&mut self) -> Result<()> {
        validate_hierarchy(&self.bones)?;

        if self.name_to_index.len() != self.bones.len() {
            let duplicate = self
                .bones
                .iter()
                .enumerate()
                .find(|(i, bone)| self.name_to_index.get(&bone.name) != Some(i))
                .map(|(_, bone)| bone.name.clone())
                .unwrap_or_default();
            log::warn!("骨骼名称重复: {}", duplicate);
            return Err(AnimError::DuplicateBone(duplicate));
        }

        let bone_count = self.bones.len();
        self.global_transforms = vec![Mat4::IDENTITY; bone_count];
        self.skinning_matrices = vec![Mat4::IDENTITY; bone_count];
        self.update();

        log::info!("骨骼层级构建完成: {} 个骨骼", bone_count);
        Ok(())
    }

    /// 通过名称查找骨骼
    pub fn find_bone_by_name(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }

    /// 获取骨骼数量
    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    /// 获取骨骼
    pub fn get_bone(&self, index: usize) -> Option<&Bone> {
        self.bones.get(index)
    }

    /// 设置逆绑定矩阵
    pub fn set_bone_offset_matrix(&mut self, index: usize, matrix: Mat4) {
        if let Some(bone) = self.bones.get_mut(index) {
            bone.offset_matrix = matrix;
        }
    }

    /// 设置骨骼局部变换
    pub fn set_local_transform(&mut self, index: usize, transform: Mat4) {
        if let Some(bone) = self.bones.get_mut(index) {
            bone.current_transform = transform;
        }
    }

    /// 所有骨骼回到绑定姿势（局部变换为单位矩阵）
    pub fn reset_local_transforms(&mut self) {
        for bone in &mut self.bones {
            bone.current_transform = Mat4::IDENTITY;
        }
    }

    /// 用播放器当前时刻的采样结果更新骨骼局部变换
    ///
    /// 只写入剪辑中存在动画的骨骼，其余骨骼保持原有变换。返回写入的骨骼数。
    pub fn apply_animation(&mut self, player: &AnimationPlayer) -> usize {
        let Some(clip) = player.clip() else {
            return 0;
        };

        let mut applied = 0;
        for bone in &mut self.bones {
            if clip.contains_node(&bone.name) {
                bone.current_transform = player.get_local_matrix(&bone.name);
                applied += 1;
            }
        }
        applied
    }

    /// 重新计算全局变换和蒙皮矩阵
    pub fn update(&mut self) {
        // 未 build 时缓冲区长度不一致，按骨骼数补齐
        if self.skinning_matrices.len() != self.bones.len() {
            self.global_transforms.resize(self.bones.len(), Mat4::IDENTITY);
            self.skinning_matrices.resize(self.bones.len(), Mat4::IDENTITY);
        }
        compose_into(
            &self.bones,
            &mut self.global_transforms,
            &mut self.skinning_matrices,
        );
    }

    /// 获取全局变换
    pub fn get_global_transform(&self, index: usize) -> Mat4 {
        self.global_transforms
            .get(index)
            .copied()
            .unwrap_or(Mat4::IDENTITY)
    }

    /// 获取蒙皮矩阵数组
    pub fn get_skinning_matrices(&self) -> &[Mat4] {
        &self.skinning_matrices
    }
}

impl Default for BoneManager {
    fn default() -> Self {
        Self::new()
    }
}
