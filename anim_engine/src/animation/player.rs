//! 动画播放器
//!
//! 持有当前播放时刻与 播放 / 暂停 / 停止 / 循环 状态，
//! 每帧先 `update(dt)`，再通过 `get_local_matrix` 查询各节点的局部矩阵。

use std::sync::Arc;

use glam::Mat4;

use super::clip::{AnimationClip, NodeTransform};
use super::config::{get_config, AnimationConfig, RotationMode};

/// 播放状态
///
/// 非循环动画播放到末尾时进入 `Stopped`，但时刻停在末尾，与显式 `stop()` 不同。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// 停止
    Stopped,
    /// 暂停（保留时刻）
    Paused,
    /// 播放中
    Playing,
}

/// 动画播放器
#[derive(Clone, Debug)]
pub struct AnimationPlayer {
    /// 当前剪辑
    clip: Option<Arc<AnimationClip>>,
    /// 当前时刻（秒）
    time: f32,
    state: PlaybackState,
    is_loop: bool,
    rotation_mode: RotationMode,
    debug_log: bool,
}

impl AnimationPlayer {
    /// 使用全局配置创建
    pub fn new() -> Self {
        Self::with_config(&get_config())
    }

    pub fn with_config(config: &AnimationConfig) -> Self {
        Self {
            clip: None,
            time: 0.0,
            state: PlaybackState::Stopped,
            is_loop: config.default_loop,
            rotation_mode: config.rotation_mode,
            debug_log: config.debug_log,
        }
    }

    /// 设置动画，时刻归零，不改变播放 / 循环标志
    pub fn set_animation(&mut self, clip: Arc<AnimationClip>) {
        if clip.duration <= 0.0 {
            log::warn!(
                "动画 '{}' 时长为 {}，循环播放时时刻不会回绕",
                clip.name,
                clip.duration
            );
        }
        self.clip = Some(clip);
        self.time = 0.0;
    }

    pub fn clip(&self) -> Option<&Arc<AnimationClip>> {
        self.clip.as_ref()
    }

    pub fn has_animation(&self) -> bool {
        self.clip.is_some()
    }

    /// 推进时刻
    pub fn update(&mut self, delta_time: f32) {
        if self.state != PlaybackState::Playing {
            return;
        }
        let Some(duration) = self.clip.as_ref().map(|c| c.duration) else {
            return;
        };

        self.time += delta_time;

        if self.is_loop {
            // 时长 <= 0 时不回绕，时刻会持续增长
            if duration > 0.0 {
                self.time %= duration;
            }
        } else if self.time >= duration {
            // 播放到末尾自动停止，保留末尾时刻
            self.time = duration;
            self.state = PlaybackState::Stopped;
        }

        if self.debug_log {
            log::trace!("动画时刻: {} / {}", self.time, duration);
        }
    }

    /// 设置时刻，负数截断到 0，超出时长按循环标志回绕或截断
    pub fn set_time(&mut self, time: f32) {
        self.time = time.max(0.0);
        let duration = self.get_duration();
        if duration > 0.0 && self.time > duration {
            if self.is_loop {
                self.time %= duration;
            } else {
                self.time = duration;
            }
        }
    }

    pub fn get_time(&self) -> f32 {
        self.time
    }

    /// 动画时长，没有剪辑时为 0
    pub fn get_duration(&self) -> f32 {
        self.clip.as_ref().map_or(0.0, |c| c.duration)
    }

    pub fn set_loop(&mut self, is_loop: bool) {
        self.is_loop = is_loop;
    }

    pub fn is_loop(&self) -> bool {
        self.is_loop
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn play(&mut self) {
        self.state = PlaybackState::Playing;
    }

    /// 暂停，保留时刻（只从播放中进入暂停）
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// 停止，时刻归零
    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.time = 0.0;
    }

    pub fn set_rotation_mode(&mut self, mode: RotationMode) {
        self.rotation_mode = mode;
    }

    pub fn rotation_mode(&self) -> RotationMode {
        self.rotation_mode
    }

    /// 采样节点在当前时刻的变换；剪辑中没有该节点时返回 None
    pub fn sample_node(&self, node_name: &str) -> Option<NodeTransform> {
        self.clip
            .as_ref()
            .and_then(|clip| clip.node(node_name))
            .map(|node| node.sample(self.time))
    }

    /// 获取节点的局部变换矩阵
    ///
    /// 节点没有动画时返回单位矩阵，调用方应使用绑定姿势。
    pub fn get_local_matrix(&self, node_name: &str) -> Mat4 {
        match self.sample_node(node_name) {
            Some(transform) => transform.to_matrix(self.rotation_mode),
            None => Mat4::IDENTITY,
        }
    }
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::clip::{track_from, NodeAnimation};
    use glam::{Quat, Vec3};
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPS: f32 = 1e-4;

    fn clip(duration: f32) -> Arc<AnimationClip> {
        let mut clip = AnimationClip::new("test", duration);
        clip.insert_node(
            "root",
            NodeAnimation {
                rotate: track_from([
                    (0.0, Quat::IDENTITY),
                    (1.0, Quat::from_rotation_y(FRAC_PI_2)),
                    (2.0, Quat::from_rotation_y(PI)),
                ]),
                ..Default::default()
            },
        );
        Arc::new(clip)
    }

    fn player(duration: f32, is_loop: bool) -> AnimationPlayer {
        let mut player = AnimationPlayer::with_config(&AnimationConfig::default());
        player.set_animation(clip(duration));
        player.set_loop(is_loop);
        player
    }

    #[test]
    fn test_initial_state() {
        let player = AnimationPlayer::with_config(&AnimationConfig::default());
        assert!(!player.has_animation());
        assert!(!player.is_playing());
        assert!(player.is_loop());
        assert_eq!(player.get_time(), 0.0);
        assert_eq!(player.get_duration(), 0.0);
        assert_eq!(player.state(), PlaybackState::Stopped);
        assert_eq!(player.get_local_matrix("root"), Mat4::IDENTITY);
    }

    #[test]
    fn test_update_without_clip_is_noop() {
        let mut player = AnimationPlayer::with_config(&AnimationConfig::default());
        player.play();
        player.update(1.0);
        assert_eq!(player.get_time(), 0.0);
    }

    #[test]
    fn test_update_requires_playing() {
        let mut player = player(2.0, true);
        player.update(0.5);
        assert_eq!(player.get_time(), 0.0);
        player.play();
        player.update(0.5);
        assert!((player.get_time() - 0.5).abs() < EPS);
    }

    #[test]
    fn test_loop_wraparound() {
        let mut player = player(2.0, true);
        player.play();
        player.update(2.5);
        assert!((player.get_time() - 0.5).abs() < EPS);
        assert!(player.is_playing());
    }

    #[test]
    fn test_loop_exact_duration_wraps_to_zero() {
        let mut player = player(2.0, true);
        player.play();
        player.update(2.0);
        assert_eq!(player.get_time(), 0.0);
        assert!(player.is_playing());
    }

    #[test]
    fn test_non_loop_auto_stop() {
        let mut player = player(2.0, false);
        player.play();
        for _ in 0..5 {
            player.update(0.5);
        }
        assert_eq!(player.get_time(), 2.0);
        assert!(!player.is_playing());
        assert_eq!(player.state(), PlaybackState::Stopped);

        // 停止后不再推进
        player.update(1.0);
        assert_eq!(player.get_time(), 2.0);
    }

    #[test]
    fn test_degenerate_duration_is_not_wrapped() {
        let mut player = player(0.0, true);
        player.play();
        for _ in 0..4 {
            player.update(1.5);
        }
        // 时长为 0 的循环动画：时刻无界增长（已知行为）
        assert_eq!(player.get_time(), 6.0);
        assert!(player.is_playing());
    }

    #[test]
    fn test_degenerate_duration_non_loop_clamps() {
        let mut player = player(0.0, false);
        player.play();
        player.update(1.0);
        assert_eq!(player.get_time(), 0.0);
        assert!(!player.is_playing());
    }

    #[test]
    fn test_stop_vs_pause() {
        let mut player = player(2.0, true);
        player.play();
        player.update(0.75);

        player.pause();
        assert!(!player.is_playing());
        assert!((player.get_time() - 0.75).abs() < EPS);
        assert_eq!(player.state(), PlaybackState::Paused);

        // 恢复播放从暂停处继续
        player.play();
        player.update(0.25);
        assert!((player.get_time() - 1.0).abs() < EPS);

        player.stop();
        assert!(!player.is_playing());
        assert_eq!(player.get_time(), 0.0);
        assert_eq!(player.state(), PlaybackState::Stopped);
    }

    #[test]
    fn test_play_twice_keeps_time() {
        let mut player = player(2.0, true);
        player.play();
        player.update(0.4);
        player.play();
        assert!((player.get_time() - 0.4).abs() < EPS);
        assert_eq!(player.state(), PlaybackState::Playing);
    }

    #[test]
    fn test_set_animation_resets_time_only() {
        let mut player = player(2.0, false);
        player.play();
        player.update(1.0);
        player.set_animation(clip(3.0));
        assert_eq!(player.get_time(), 0.0);
        assert!(player.is_playing());
        assert!(!player.is_loop());
        assert_eq!(player.get_duration(), 3.0);
    }

    #[test]
    fn test_set_time() {
        let mut player = player(2.0, true);
        player.set_time(-1.0);
        assert_eq!(player.get_time(), 0.0);
        player.set_time(1.5);
        assert_eq!(player.get_time(), 1.5);
        player.set_time(2.5);
        assert!((player.get_time() - 0.5).abs() < EPS);
        player.set_time(2.0);
        assert_eq!(player.get_time(), 2.0);

        player.set_loop(false);
        player.set_time(7.0);
        assert_eq!(player.get_time(), 2.0);
    }

    #[test]
    fn test_set_time_without_clip_only_clamps_negative() {
        let mut player = AnimationPlayer::with_config(&AnimationConfig::default());
        player.set_time(5.0);
        assert_eq!(player.get_time(), 5.0);
        player.set_time(-5.0);
        assert_eq!(player.get_time(), 0.0);
    }

    #[test]
    fn test_missing_node_is_identity() {
        let player = player(2.0, true);
        assert_eq!(player.get_local_matrix("nonexistent_bone"), Mat4::IDENTITY);
        assert!(player.sample_node("nonexistent_bone").is_none());
    }

    #[test]
    fn test_halfway_rotation_is_slerped() {
        let mut player = player(2.0, true);
        player.set_time(0.5);
        let transform = player.sample_node("root").unwrap();
        let yaw = crate::animation::interpolation::yaw_angle(transform.rotate);
        assert!((yaw - FRAC_PI_4).abs() < EPS);

        let m = player.get_local_matrix("root");
        assert!(m.abs_diff_eq(Mat4::from_rotation_y(FRAC_PI_4), EPS));
    }

    #[test]
    fn test_full_rotation_mode() {
        let mut clip = AnimationClip::new("tilt", 1.0);
        clip.insert_node(
            "root",
            NodeAnimation {
                rotate: track_from([(0.0, Quat::from_rotation_z(FRAC_PI_2))]),
                translate: track_from([(0.0, Vec3::new(0.0, 1.0, 0.0))]),
                ..Default::default()
            },
        );
        let mut player = AnimationPlayer::with_config(&AnimationConfig::default());
        player.set_animation(Arc::new(clip));

        assert!(player
            .get_local_matrix("root")
            .abs_diff_eq(Mat4::from_translation(Vec3::Y), EPS));

        player.set_rotation_mode(RotationMode::Full);
        let expected = Mat4::from_rotation_translation(Quat::from_rotation_z(FRAC_PI_2), Vec3::Y);
        assert!(player.get_local_matrix("root").abs_diff_eq(expected, EPS));
    }

    #[test]
    fn test_pause_at_time_zero_is_paused() {
        let mut player = player(2.0, true);
        player.play();
        player.pause();
        assert_eq!(player.get_time(), 0.0);
        assert_eq!(player.state(), PlaybackState::Paused);
    }

    #[test]
    fn test_pause_when_stopped_stays_stopped() {
        let mut player = player(2.0, true);
        player.pause();
        assert_eq!(player.state(), PlaybackState::Stopped);
    }

    #[test]
    fn test_auto_stop_keeps_end_time_and_replays() {
        let mut player = player(2.0, false);
        player.play();
        player.update(3.0);
        assert_eq!(player.state(), PlaybackState::Stopped);
        assert_eq!(player.get_time(), 2.0);

        // 重新播放从末尾时刻开始，下一次更新再次截断
        player.play();
        assert_eq!(player.state(), PlaybackState::Playing);
        player.update(0.1);
        assert_eq!(player.get_time(), 2.0);
        assert_eq!(player.state(), PlaybackState::Stopped);
    }

    #[test]
    fn test_shared_clip_between_players() {
        let shared = clip(2.0);
        let config = AnimationConfig::default();
        let mut a = AnimationPlayer::with_config(&config);
        let mut b = AnimationPlayer::with_config(&config);
        a.set_animation(Arc::clone(&shared));
        b.set_animation(Arc::clone(&shared));
        a.play();
        a.update(1.0);
        assert_eq!(b.get_time(), 0.0);
        assert_eq!(Arc::strong_count(&shared), 3);
    }
}
