// src/problem/data.rs

//! 问题数据聚合
//!
//! 按网格尺寸分配的逐单元场数组与辅助数据集。每个网格对创建
//! 一个实例：三维网格承载渗透率（三个方向）、储水率与孔隙度，
//! 地表伴随网格承载坡度（两个方向）与曼宁糙率。边界条件与井
//! 数据集创建时为空，由对应的包模块在装配后填充。
//!
//! 几何体引用在几何处理组件中创建，所有权经 [`ProblemData::adopt_solids`]
//! 显式移交到本聚合，释放随本聚合的 `Drop` 发生。

use crate::domain::bc::BcPressureData;
use crate::domain::geometry::GeomSolid;
use crate::domain::grid::Grid;
use crate::domain::wells::WellData;
use log::debug;
use ndarray::{Array2, Array3};

/// 问题数据聚合
#[derive(Debug)]
pub struct ProblemData {
    permeability_x: Array3<f64>,
    permeability_y: Array3<f64>,
    permeability_z: Array3<f64>,
    specific_storage: Array3<f64>,
    porosity: Array3<f64>,

    slope_x: Array2<f64>,
    slope_y: Array2<f64>,
    mannings: Array2<f64>,

    bc_pressure_data: BcPressureData,
    well_data: WellData,

    solids: Vec<GeomSolid>,
}

impl ProblemData {
    /// 按网格对分配问题数据
    ///
    /// 全部场数组清零分配；数据集为空。不做任何分支或校验。
    pub fn new(grid: &Grid, surface_grid: &Grid) -> Self {
        debug!(
            "分配问题数据: 三维网格 {}x{}x{}, 地表网格 {}x{}",
            grid.nx, grid.ny, grid.nz, surface_grid.nx, surface_grid.ny
        );
        Self {
            permeability_x: grid.new_field3(),
            permeability_y: grid.new_field3(),
            permeability_z: grid.new_field3(),
            specific_storage: grid.new_field3(),
            porosity: grid.new_field3(),
            slope_x: surface_grid.new_field2(),
            slope_y: surface_grid.new_field2(),
            mannings: surface_grid.new_field2(),
            bc_pressure_data: BcPressureData::new(),
            well_data: WellData::new(),
            solids: Vec::new(),
        }
    }

    /// 接管几何体引用的所有权
    ///
    /// 几何处理组件创建的几何体在此之后归本聚合所有，
    /// 随本聚合一并释放。
    pub fn adopt_solids(&mut self, solids: Vec<GeomSolid>) {
        self.solids.extend(solids);
    }

    /// 持有的几何体数量
    pub fn num_solids(&self) -> usize {
        self.solids.len()
    }

    /// 持有的几何体引用
    pub fn solids(&self) -> &[GeomSolid] {
        &self.solids
    }

    /// X 向渗透率场
    pub fn permeability_x(&self) -> &Array3<f64> {
        &self.permeability_x
    }

    /// X 向渗透率场（可变，由渗透率模块填充）
    pub fn permeability_x_mut(&mut self) -> &mut Array3<f64> {
        &mut self.permeability_x
    }

    /// Y 向渗透率场
    pub fn permeability_y(&self) -> &Array3<f64> {
        &self.permeability_y
    }

    /// Y 向渗透率场（可变）
    pub fn permeability_y_mut(&mut self) -> &mut Array3<f64> {
        &mut self.permeability_y
    }

    /// Z 向渗透率场
    pub fn permeability_z(&self) -> &Array3<f64> {
        &self.permeability_z
    }

    /// Z 向渗透率场（可变）
    pub fn permeability_z_mut(&mut self) -> &mut Array3<f64> {
        &mut self.permeability_z
    }

    /// 储水率场
    pub fn specific_storage(&self) -> &Array3<f64> {
        &self.specific_storage
    }

    /// 储水率场（可变）
    pub fn specific_storage_mut(&mut self) -> &mut Array3<f64> {
        &mut self.specific_storage
    }

    /// 孔隙度场
    pub fn porosity(&self) -> &Array3<f64> {
        &self.porosity
    }

    /// 孔隙度场（可变）
    pub fn porosity_mut(&mut self) -> &mut Array3<f64> {
        &mut self.porosity
    }

    /// 地表 X 向坡度场
    pub fn slope_x(&self) -> &Array2<f64> {
        &self.slope_x
    }

    /// 地表 X 向坡度场（可变）
    pub fn slope_x_mut(&mut self) -> &mut Array2<f64> {
        &mut self.slope_x
    }

    /// 地表 Y 向坡度场
    pub fn slope_y(&self) -> &Array2<f64> {
        &self.slope_y
    }

    /// 地表 Y 向坡度场（可变）
    pub fn slope_y_mut(&mut self) -> &mut Array2<f64> {
        &mut self.slope_y
    }

    /// 曼宁糙率场
    pub fn mannings(&self) -> &Array2<f64> {
        &self.mannings
    }

    /// 曼宁糙率场（可变）
    pub fn mannings_mut(&mut self) -> &mut Array2<f64> {
        &mut self.mannings
    }

    /// 压力边界条件数据集
    pub fn bc_pressure_data(&self) -> &BcPressureData {
        &self.bc_pressure_data
    }

    /// 压力边界条件数据集（可变，由边界条件包模块填充）
    pub fn bc_pressure_data_mut(&mut self) -> &mut BcPressureData {
        &mut self.bc_pressure_data
    }

    /// 井数据集
    pub fn well_data(&self) -> &WellData {
        &self.well_data
    }

    /// 井数据集（可变，由井包模块填充）
    pub fn well_data_mut(&mut self) -> &mut WellData {
        &mut self.well_data
    }
}
