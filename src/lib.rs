// src/lib.rs

//! GeoFlow 地下水流模拟器核心
//!
//! 提供问题装配与生命周期管理：从分层配置库构建单个内存中的
//! 问题描述（[`problem::Problem`]），声明哪些可互换的数值模型模块
//! 处于激活状态、它们如何按流体相数与污染物数参数化，以及两种
//! 互斥求解剖面（General 多相 / Richards 单方程）中哪一种生效。
//! 配套的 [`problem::ProblemData`] 聚合按计算网格尺寸分配的
//! 逐单元场数组和辅助数据集（边界条件、井）。
//!
//! 模块自身的计算内容（离散化、求解、并行分解、几何处理）不在
//! 本 crate 范围内，仅通过模块框架接口（[`modules`]）作为外部
//! 协作者访问。
//!
//! # 模块概览
//!
//! - [`core`](crate::core): 统一错误类型与名称注册表
//! - [`infra`]: 配置库与日志
//! - [`domain`]: 网格、几何体与边界/井数据集
//! - [`modules`]: 模块框架契约（构造/销毁生命周期）
//! - [`problem`]: Problem / ProblemData 聚合与建造者
//!
//! # 设计原则
//!
//! 1. **一次构造，只读使用**: 聚合在初始化时构造一次，运行期间只读
//! 2. **所有权即生命周期**: 每个模块句柄由聚合独占持有，Drop 即销毁
//! 3. **剖面标签化**: 剖面独有的模块槽位以带标签变体建模，
//!    "释放恰好等于分配"由类型保证
//! 4. **无隐藏全局状态**: 相/污染物注册表是聚合的显式字段，
//!    以引用传入需要它们的模块

#![warn(clippy::all)]

pub mod core;
pub mod domain;
pub mod infra;
pub mod modules;
pub mod problem;

// 重导出常用类型
pub use crate::core::error::{GfError, GfResult};

/// Prelude 模块，包含常用类型
pub mod prelude {
    pub use crate::core::error::{GfError, GfResult};
    pub use crate::core::registry::NameRegistry;
    pub use crate::domain::grid::Grid;
    pub use crate::infra::config::ConfigDb;
    pub use crate::modules::framework::{
        ModuleArgs, ModuleContext, ModuleFramework, ModuleHandle, ModuleKind,
    };
    pub use crate::problem::{Problem, ProblemData, Profile};
    pub use crate::{ensure, require};
}
