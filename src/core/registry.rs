// src/core/registry.rs

//! 名称注册表
//!
//! 有序、无重复的字符串列表，支持按名查位、按位取名。
//! 用于枚举相/污染物名称，也用作两元素注册表 `{"False","True"}`
//! 校验布尔型配置串：`index_of` 返回 `None` 即为输入校验错误。
//!
//! 名称的唯一性由输入约定保证，本类型不做二次校验。

use serde::{Deserialize, Serialize};

/// 名称注册表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRegistry {
    names: Vec<String>,
}

impl NameRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// 按分隔符拆分文本创建注册表，保持出现顺序
    ///
    /// 空白片段被忽略，因此空串产生空注册表，连续分隔符不产生空名。
    pub fn from_delimited(text: &str, delimiter: char) -> Self {
        let names = text
            .split(delimiter)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        Self { names }
    }

    /// 从名称序列创建注册表
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// 名称数量
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// 按名查位，未注册时返回 `None`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// 按位取名，越界时返回 `None`
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// 名称切片
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// 按顺序遍历名称
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl std::fmt::Display for NameRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.names.join(" "))
    }
}
