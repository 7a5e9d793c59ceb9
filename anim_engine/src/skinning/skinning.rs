//! 顶点蒙皮计算

use glam::{Mat4, Vec3};
use rayon::prelude::*;

use super::{SkinningInput, SkinningOutput, VertexWeight};

/// 计算蒙皮（按顶点并行）
///
/// 位置、法线、权重三个数组按最短长度对齐。
pub fn compute_skinning(input: &SkinningInput) -> SkinningOutput {
    let (positions, normals): (Vec<Vec3>, Vec<Vec3>) = input
        .positions
        .par_iter()
        .zip(input.normals.par_iter())
        .zip(input.weights.par_iter())
        .map(|((position, normal), weight)| {
            compute_single_vertex(*position, *normal, weight, input.bone_matrices)
        })
        .unzip();

    SkinningOutput { positions, normals }
}

/// 计算单个顶点的蒙皮
fn compute_single_vertex(
    position: Vec3,
    normal: Vec3,
    weight: &VertexWeight,
    matrices: &[Mat4],
) -> (Vec3, Vec3) {
    let mut pos = Vec3::ZERO;
    let mut norm = Vec3::ZERO;

    for (&bone, &w) in weight.bones.iter().zip(weight.weights.iter()) {
        if w == 0.0 {
            continue;
        }
        let m = get_matrix(matrices, bone);
        pos += m.transform_point3(position) * w;
        norm += m.transform_vector3(normal) * w;
    }

    (pos, norm.normalize_or_zero())
}

fn get_matrix(matrices: &[Mat4], index: u32) -> Mat4 {
    matrices
        .get(index as usize)
        .copied()
        .unwrap_or(Mat4::IDENTITY)
}
