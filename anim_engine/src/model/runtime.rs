//! 动画模型运行时

use std::collections::HashMap;
use std::sync::Arc;

use glam::Mat4;

use crate::animation::{get_config, AnimationClip, AnimationConfig, AnimationPlayer};
use crate::skeleton::BoneManager;
use crate::{AnimError, Result};

/// 带骨架和动画库的模型
///
/// 每帧调用 `update(dt)`：推进播放器 -> 写入骨骼局部变换 -> 重算蒙皮矩阵。
pub struct AnimatedModel {
    pub name: String,

    // 子系统
    pub bone_manager: BoneManager,
    player: AnimationPlayer,

    // 动画库（名称 -> 剪辑）
    animations: HashMap<String, Arc<AnimationClip>>,
    current_animation: Option<String>,

    /// 根节点名称，用于无骨骼模型的整体变换
    root_node_name: String,
    /// 播放速度倍率
    playback_speed: f32,
}

impl AnimatedModel {
    /// 使用全局配置创建空模型
    pub fn new(name: impl Into<String>, bone_manager: BoneManager) -> Self {
        Self::with_config(name, bone_manager, &get_config())
    }

    pub fn with_config(
        name: impl Into<String>,
        bone_manager: BoneManager,
        config: &AnimationConfig,
    ) -> Self {
        Self {
            name: name.into(),
            bone_manager,
            player: AnimationPlayer::with_config(config),
            animations: HashMap::new(),
            current_animation: None,
            root_node_name: "root".to_string(),
            playback_speed: config.playback_speed,
        }
    }

    /// 注册动画，第一个注册的动画成为当前动画
    ///
    /// 替换当前动画时播放器切换到新剪辑，时刻归零。
    pub fn add_animation(&mut self, name: impl Into<String>, clip: Arc<AnimationClip>) -> Result<()> {
        let name = name.into();
        clip.validate()?;

        log::info!(
            "模型 '{}' 注册动画 '{}': 时长 {} 秒, {} 个节点",
            self.name,
            name,
            clip.duration,
            clip.node_count()
        );

        let rebind = match self.current_animation.as_deref() {
            None => true,
            Some(current) => current == name,
        };
        self.animations.insert(name.clone(), clip);
        if rebind {
            self.set_animation(&name)?;
        }
        Ok(())
    }

    /// 切换当前动画，时刻归零
    pub fn set_animation(&mut self, name: &str) -> Result<()> {
        let clip = self
            .animations
            .get(name)
            .cloned()
            .ok_or_else(|| AnimError::UnknownAnimation(name.to_string()))?;

        self.player.set_animation(clip);
        self.current_animation = Some(name.to_string());
        log::debug!("模型 '{}' 切换动画: {}", self.name, name);
        Ok(())
    }

    pub fn current_animation(&self) -> Option<&str> {
        self.current_animation.as_deref()
    }

    pub fn animation_names(&self) -> impl Iterator<Item = &String> {
        self.animations.keys()
    }

    pub fn animation_player(&self) -> &AnimationPlayer {
        &self.player
    }

    pub fn animation_player_mut(&mut self) -> &mut AnimationPlayer {
        &mut self.player
    }

    // ========== 播放控制 ==========

    pub fn play_animation(&mut self, is_loop: bool) {
        self.player.set_loop(is_loop);
        self.player.play();
    }

    pub fn stop_animation(&mut self) {
        self.player.stop();
    }

    pub fn pause_animation(&mut self) {
        self.player.pause();
    }

    pub fn set_animation_loop(&mut self, is_loop: bool) {
        self.player.set_loop(is_loop);
    }

    pub fn is_animation_playing(&self) -> bool {
        self.player.is_playing()
    }

    pub fn get_animation_time(&self) -> f32 {
        self.player.get_time()
    }

    /// 设置播放速度倍率（负数按 0 处理）
    pub fn set_playback_speed(&mut self, speed: f32) {
        self.playback_speed = speed.max(0.0);
    }

    pub fn playback_speed(&self) -> f32 {
        self.playback_speed
    }

    pub fn set_root_node_name(&mut self, name: impl Into<String>) {
        self.root_node_name = name.into();
    }

    pub fn root_node_name(&self) -> &str {
        &self.root_node_name
    }

    // ========== 每帧更新 ==========

    /// 推进动画并重算蒙皮矩阵
    pub fn update(&mut self, delta_time: f32) {
        self.player.update(delta_time * self.playback_speed);
        self.bone_manager.apply_animation(&self.player);
        self.bone_manager.update();
    }

    /// 根节点的动画局部矩阵
    pub fn get_animation_local_matrix(&self) -> Mat4 {
        self.player.get_local_matrix(&self.root_node_name)
    }

    /// 蒙皮矩阵数组（上传到 GPU 的数据）
    pub fn get_bone_matrices(&self) -> &[Mat4] {
        self.bone_manager.get_skinning_matrices()
    }
}
