// src/infra/config.rs

//! 分层配置库
//!
//! 点分层级键到字符串值的内存数据库，带类型化的快速失败读取接口。
//! 必需键缺失返回 [`GfError::MissingConfig`]，值无法解析返回
//! [`GfError::InvalidConfig`]；带默认值的读取永不失败。
//!
//! 配置库记录每个键的读取次数，初始化结束后可通过
//! [`ConfigDb::unused_keys`] 报告从未被消费的键，帮助发现拼写错误。

use crate::core::error::{GfError, GfResult};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::Path;

/// 分层配置库
#[derive(Debug, Default)]
pub struct ConfigDb {
    entries: HashMap<String, String>,
    reads: Mutex<HashMap<String, usize>>,
}

impl ConfigDb {
    /// 创建空配置库
    pub fn new() -> Self {
        Self::default()
    }

    /// 从键值对序列创建配置库
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries,
            reads: Mutex::new(HashMap::new()),
        }
    }

    /// 从 JSON 文档创建配置库
    ///
    /// 顶层必须是对象；嵌套对象按点号展平为层级键，
    /// 标量数组以空格拼接（如相名列表），布尔值映射为
    /// `"True"` / `"False"`。
    pub fn from_json_str(doc: &str) -> GfResult<Self> {
        let value: serde_json::Value = serde_json::from_str(doc)?;
        let object = match value {
            serde_json::Value::Object(map) => map,
            _ => return Err(GfError::invalid_input("配置文档顶层必须是 JSON 对象")),
        };

        let mut db = Self::new();
        for (key, value) in object {
            flatten_json(&key, &value, &mut db.entries)?;
        }
        Ok(db)
    }

    /// 从 JSON 文件创建配置库
    pub fn from_json_file(path: impl AsRef<Path>) -> GfResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GfError::file_not_found(path));
        }
        let doc = std::fs::read_to_string(path)?;
        Self::from_json_str(&doc)
    }

    /// 写入或覆盖一个键
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// 删除一个键
    pub fn unset(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// 键是否存在
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// 键数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 读取必需的字符串值，缺失即失败
    pub fn get_string(&self, key: &str) -> GfResult<&str> {
        match self.entries.get(key) {
            Some(value) => {
                self.record_read(key);
                Ok(value.as_str())
            }
            None => Err(GfError::missing_config(key)),
        }
    }

    /// 读取字符串值，缺失时返回默认值，永不失败
    pub fn get_string_default<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.entries.get(key) {
            Some(value) => {
                self.record_read(key);
                value.as_str()
            }
            None => default,
        }
    }

    /// 读取必需的整数值
    pub fn get_int(&self, key: &str) -> GfResult<i64> {
        let raw = self.get_string(key)?;
        raw.trim()
            .parse::<i64>()
            .map_err(|_| GfError::invalid_config(key, raw, "不是合法的整数"))
    }

    /// 读取必需的浮点值
    pub fn get_double(&self, key: &str) -> GfResult<f64> {
        let raw = self.get_string(key)?;
        raw.trim()
            .parse::<f64>()
            .map_err(|_| GfError::invalid_config(key, raw, "不是合法的浮点数"))
    }

    /// 某键的累计读取次数
    pub fn read_count(&self, key: &str) -> usize {
        self.reads.lock().get(key).copied().unwrap_or(0)
    }

    /// 从未被读取过的键（按字典序）
    pub fn unused_keys(&self) -> Vec<String> {
        let reads = self.reads.lock();
        let mut unused: Vec<String> = self
            .entries
            .keys()
            .filter(|k| !reads.contains_key(*k))
            .cloned()
            .collect();
        unused.sort();
        unused
    }

    fn record_read(&self, key: &str) {
        *self.reads.lock().entry(key.to_string()).or_insert(0) += 1;
    }
}

fn flatten_json(
    prefix: &str,
    value: &serde_json::Value,
    out: &mut HashMap<String, String>,
) -> GfResult<()> {
    use serde_json::Value;

    match value {
        Value::Object(map) => {
            for (key, value) in map {
                flatten_json(&format!("{prefix}.{key}"), value, out)?;
            }
        }
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                parts.push(scalar_to_string(prefix, item)?);
            }
            out.insert(prefix.to_string(), parts.join(" "));
        }
        _ => {
            out.insert(prefix.to_string(), scalar_to_string(prefix, value)?);
        }
    }
    Ok(())
}

fn scalar_to_string(key: &str, value: &serde_json::Value) -> GfResult<String> {
    use serde_json::Value;

    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(true) => Ok("True".to_string()),
        Value::Bool(false) => Ok("False".to_string()),
        _ => Err(GfError::invalid_config(
            key,
            value.to_string(),
            "仅支持标量或标量数组",
        )),
    }
}
