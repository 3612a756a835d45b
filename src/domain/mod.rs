// src/domain/mod.rs

//! 领域层：网格、几何体与边界/井数据集

pub mod bc;
pub mod geometry;
pub mod grid;
pub mod wells;

pub use bc::BcPressureData;
pub use geometry::GeomSolid;
pub use grid::Grid;
pub use wells::WellData;
