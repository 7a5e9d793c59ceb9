//! 骨骼节点

use glam::Mat4;

/// 骨骼节点
///
/// 骨骼存放在扁平数组中，通过父骨骼下标引用父节点（-1 表示根骨骼）。
#[derive(Clone, Debug, PartialEq)]
pub struct Bone {
    pub name: String,
    pub parent_index: i32,
    /// 逆绑定姿势矩阵（加载时确定）
    pub offset_matrix: Mat4,
    /// 本帧的局部变换（由动画采样写入）
    pub current_transform: Mat4,
}

impl Bone {
    pub fn new(name: impl Into<String>, parent_index: i32) -> Self {
        Self {
            name: name.into(),
            parent_index,
            offset_matrix: Mat4::IDENTITY,
            current_transform: Mat4::IDENTITY,
        }
    }

    pub fn with_offset(mut self, offset_matrix: Mat4) -> Self {
        self.offset_matrix = offset_matrix;
        self
    }

    pub fn with_transform(mut self, current_transform: Mat4) -> Self {
        self.current_transform = current_transform;
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_index < 0
    }

    /// 父骨骼下标，根骨骼返回 None
    pub fn parent(&self) -> Option<usize> {
        usize::try_from(self.parent_index).ok()
    }
}

impl Default for Bone {
    fn default() -> Self {
        Self::new(String::new(), -1)
    }
}
