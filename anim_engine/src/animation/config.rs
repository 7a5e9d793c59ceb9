//! 动画配置
//!
//! 所有参数扁平化。全局实例只提供默认值，播放器和模型也可以显式传入配置。

use once_cell::sync::Lazy;
use std::sync::RwLock;

/// 四元数到局部矩阵的旋转构建方式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RotationMode {
    /// 只取 Y 轴旋转角（`2 * atan2(y, w)`），X / Z 分量丢弃。
    /// 现有转台类内容都按这种方式制作。
    #[default]
    YawOnly,
    /// 使用完整四元数
    Full,
}

/// 动画配置（扁平化，不嵌套）
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    /// 新建播放器是否默认循环，默认 true
    pub default_loop: bool,
    /// 旋转构建方式，默认 YawOnly
    pub rotation_mode: RotationMode,
    /// 模型级播放速度倍率，默认 1.0
    pub playback_speed: f32,
    /// 是否输出逐帧调试日志，默认 false
    pub debug_log: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            default_loop: true,
            rotation_mode: RotationMode::YawOnly,
            playback_speed: 1.0,
            debug_log: false,
        }
    }
}

/// 全局配置实例
static ANIMATION_CONFIG: Lazy<RwLock<AnimationConfig>> =
    Lazy::new(|| RwLock::new(AnimationConfig::default()));

/// 获取当前配置（只读）
pub fn get_config() -> AnimationConfig {
    match ANIMATION_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// 手动设置配置（用于运行时调试）
pub fn set_config(config: AnimationConfig) {
    match ANIMATION_CONFIG.write() {
        Ok(mut guard) => *guard = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// 重置为默认配置
pub fn reset_config() {
    set_config(AnimationConfig::default());
}
