// src/domain/grid.rs

//! 结构化计算网格描述
//!
//! 仅描述尺寸与间距，不持有任何场数据。三维网格承载体单元场，
//! `nz == 1` 的网格作为地表伴随网格承载二维场（坡度、糙率）。

use ndarray::{Array2, Array3};
use serde::{Deserialize, Serialize};

/// 结构化网格描述
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// X 方向单元数
    pub nx: usize,
    /// Y 方向单元数
    pub ny: usize,
    /// Z 方向单元数
    pub nz: usize,
    /// X 方向间距 [m]
    pub dx: f64,
    /// Y 方向间距 [m]
    pub dy: f64,
    /// Z 方向间距 [m]
    pub dz: f64,
}

impl Grid {
    /// 创建三维网格
    pub fn new(nx: usize, ny: usize, nz: usize, dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            nx,
            ny,
            nz,
            dx,
            dy,
            dz,
        }
    }

    /// 创建地表伴随网格（`nz == 1`）
    pub fn surface(nx: usize, ny: usize, dx: f64, dy: f64) -> Self {
        Self::new(nx, ny, 1, dx, dy, 0.0)
    }

    /// 单元总数
    pub fn n_cells(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// 是否为地表网格
    pub fn is_surface(&self) -> bool {
        self.nz == 1
    }

    /// ndarray 三维形状 `(nz, ny, nx)`
    pub fn shape3(&self) -> (usize, usize, usize) {
        (self.nz, self.ny, self.nx)
    }

    /// ndarray 二维形状 `(ny, nx)`
    pub fn shape2(&self) -> (usize, usize) {
        (self.ny, self.nx)
    }

    /// 分配按本网格尺寸清零的三维场
    pub fn new_field3(&self) -> Array3<f64> {
        Array3::zeros(self.shape3())
    }

    /// 分配按本网格尺寸清零的二维场
    pub fn new_field2(&self) -> Array2<f64> {
        Array2::zeros(self.shape2())
    }
}
