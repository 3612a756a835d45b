// src/domain/bc.rs

use serde::{Deserialize, Serialize};

/// 单个边界面片在一个时间区间内的压力边界条件取值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BcPatch {
    pub patch_name: String,
    /// 所属时间循环在循环注册表中的位置
    pub cycle_index: usize,
    /// 每个区间一个取值
    pub interval_values: Vec<f64>,
}

impl BcPatch {
    pub fn new(patch_name: impl Into<String>, cycle_index: usize) -> Self {
        Self {
            patch_name: patch_name.into(),
            cycle_index,
            interval_values: Vec::new(),
        }
    }

    pub fn with_values(mut self, values: Vec<f64>) -> Self {
        self.interval_values = values;
        self
    }
}

/// 压力边界条件数据集
///
/// 创建时为空，由边界条件包模块在问题装配后填充。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BcPressureData {
    patches: Vec<BcPatch>,
}

impl BcPressureData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_patch(&mut self, patch: BcPatch) {
        self.patches.push(patch);
    }

    pub fn num_patches(&self) -> usize {
        self.patches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub fn patch(&self, index: usize) -> Option<&BcPatch> {
        self.patches.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BcPatch> {
        self.patches.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let data = BcPressureData::new();
        assert!(data.is_empty());
        assert_eq!(data.num_patches(), 0);
    }

    #[test]
    fn test_add_patch() {
        let mut data = BcPressureData::new();
        data.add_patch(BcPatch::new("left", 0).with_values(vec![1.0, 2.0]));
        assert_eq!(data.num_patches(), 1);
        assert_eq!(data.patch(0).unwrap().interval_values.len(), 2);
    }
}
