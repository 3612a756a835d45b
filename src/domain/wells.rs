// src/domain/wells.rs

use serde::{Deserialize, Serialize};

/// 井的作用方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WellAction {
    /// 注入
    Injection,
    /// 抽取
    Extraction,
}

/// 单井描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Well {
    pub name: String,
    pub action: WellAction,
    /// 每相一个取值
    pub phase_values: Vec<f64>,
    /// 每相每污染物一个取值
    pub contaminant_values: Vec<f64>,
}

impl Well {
    pub fn new(name: impl Into<String>, action: WellAction) -> Self {
        Self {
            name: name.into(),
            action,
            phase_values: Vec::new(),
            contaminant_values: Vec::new(),
        }
    }

    pub fn with_phase_values(mut self, values: Vec<f64>) -> Self {
        self.phase_values = values;
        self
    }

    pub fn with_contaminant_values(mut self, values: Vec<f64>) -> Self {
        self.contaminant_values = values;
        self
    }
}

/// 井数据集
///
/// 创建时为空，由井包模块在问题装配后填充。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WellData {
    wells: Vec<Well>,
}

impl WellData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_well(&mut self, well: Well) {
        self.wells.push(well);
    }

    pub fn num_wells(&self) -> usize {
        self.wells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wells.is_empty()
    }

    pub fn well(&self, index: usize) -> Option<&Well> {
        self.wells.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Well> {
        self.wells.iter()
    }
}
