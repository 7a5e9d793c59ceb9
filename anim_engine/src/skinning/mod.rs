//! 顶点蒙皮计算

mod skinning;

pub use skinning::compute_skinning;

use glam::{Mat4, Vec3};

/// 顶点骨骼权重（最多 4 个影响骨骼）
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexWeight {
    pub bones: [u32; 4],
    pub weights: [f32; 4],
}

impl VertexWeight {
    /// 单骨骼绑定
    pub fn single(bone: u32) -> Self {
        Self {
            bones: [bone, 0, 0, 0],
            weights: [1.0, 0.0, 0.0, 0.0],
        }
    }

    /// 双骨骼绑定，第二个骨骼权重为 `1 - weight`
    pub fn pair(bones: [u32; 2], weight: f32) -> Self {
        Self {
            bones: [bones[0], bones[1], 0, 0],
            weights: [weight, 1.0 - weight, 0.0, 0.0],
        }
    }
}

impl Default for VertexWeight {
    fn default() -> Self {
        Self::single(0)
    }
}

/// 蒙皮输入数据
pub struct SkinningInput<'a> {
    /// 原始顶点位置
    pub positions: &'a [Vec3],
    /// 原始顶点法线
    pub normals: &'a [Vec3],
    /// 顶点权重
    pub weights: &'a [VertexWeight],
    /// 骨骼变换矩阵（已乘以逆绑定矩阵）
    pub bone_matrices: &'a [Mat4],
}

/// 蒙皮输出数据
pub struct SkinningOutput {
    /// 变换后的顶点位置
    pub positions: Vec<Vec3>,
    /// 变换后的顶点法线
    pub normals: Vec<Vec3>,
}
