//! 插值函数
//!
//! 平移 / 缩放使用线性插值，旋转使用球面线性插值。
//! 这里没有直接使用 glam 自带的 `Quat::slerp`，近似平行阈值和点积截断需要与内容管线保持一致。

use glam::{Quat, Vec3, Vec4};

/// 近似平行阈值，超过时退化为线性插值 + 归一化
pub const SLERP_LINEAR_THRESHOLD: f32 = 0.9995;

/// 线性插值：`a + t * (b - a)`，不截断 `t`
pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    Vec3::new(
        a.x + t * (b.x - a.x),
        a.y + t * (b.y - a.y),
        a.z + t * (b.z - a.z),
    )
}

/// 四元数四维点积
pub fn dot(q1: Quat, q2: Quat) -> f32 {
    Vec4::from(q1).dot(Vec4::from(q2))
}

/// 四元数归一化；长度恰好为 0 时返回单位四元数
pub fn normalize(q: Quat) -> Quat {
    let v = Vec4::from(q);
    let length = v.length();
    if length == 0.0 {
        return Quat::IDENTITY;
    }
    Quat::from_vec4(v / length)
}

/// 球面线性插值
///
/// 1. 点积为负时翻转终点，保证走最短路径
/// 2. 点积截断到 [-1, 1]，避免 `acos` 得到 NaN
/// 3. 近似平行时退化为分量线性插值后归一化
pub fn slerp(start: Quat, end: Quat, t: f32) -> Quat {
    let q1 = Vec4::from(start);
    let mut q2 = Vec4::from(end);
    let mut d = q1.dot(q2);

    if d < 0.0 {
        q2 = -q2;
        d = -d;
    }

    let d = d.clamp(-1.0, 1.0);

    if d > SLERP_LINEAR_THRESHOLD {
        let blended = q1 + (q2 - q1) * t;
        return normalize(Quat::from_vec4(blended));
    }

    let theta = d.acos();
    let sin_theta = theta.sin();
    let w1 = ((1.0 - t) * theta).sin() / sin_theta;
    let w2 = (t * theta).sin() / sin_theta;

    Quat::from_vec4(q1 * w1 + q2 * w2)
}

/// 从四元数提取 Y 轴旋转角（弧度）
///
/// 只适用于纯 Y 轴旋转的内容，X / Z 分量会被丢弃。
pub fn yaw_angle(q: Quat) -> f32 {
    if q.w != 0.0 || q.y != 0.0 {
        2.0 * q.y.atan2(q.w)
    } else {
        0.0
    }
}
