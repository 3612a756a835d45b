// src/problem/time_cycle.rs

//! 时间循环数据表面
//!
//! 时间循环子系统是外部协作者，这里只读取其在配置库中的入口
//! （循环名称列表）。数据随问题聚合创建读入、随聚合销毁释放，
//! 读取/释放总是成对出现并包夹问题的生命周期。

use crate::core::error::GfResult;
use crate::core::registry::NameRegistry;
use crate::infra::config::ConfigDb;

/// 时间循环数据
#[derive(Debug, Clone)]
pub struct TimeCycleData {
    cycle_names: NameRegistry,
}

impl TimeCycleData {
    /// 从配置库读取时间循环数据
    ///
    /// 未配置 `Cycle.Names` 时默认单个 `constant` 循环。
    pub fn read(config: &ConfigDb) -> GfResult<Self> {
        let names = config.get_string_default("Cycle.Names", "constant");
        Ok(Self {
            cycle_names: NameRegistry::from_delimited(names, ' '),
        })
    }

    /// 循环数量
    pub fn num_cycles(&self) -> usize {
        self.cycle_names.len()
    }

    /// 循环名称注册表
    pub fn cycle_names(&self) -> &NameRegistry {
        &self.cycle_names
    }
}
