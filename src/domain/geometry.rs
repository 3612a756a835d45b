// src/domain/geometry.rs

use serde::{Deserialize, Serialize};

/// 几何体引用
///
/// 由几何处理组件创建，所有权显式移交给 `ProblemData` 后由其释放。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeomSolid {
    id: usize,
    name: String,
    patch_names: Vec<String>,
}

impl GeomSolid {
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            patch_names: Vec::new(),
        }
    }

    pub fn with_patches<I, S>(mut self, patches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patch_names = patches.into_iter().map(Into::into).collect();
        self
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn patch_names(&self) -> &[String] {
        &self.patch_names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_with_patches() {
        let solid = GeomSolid::new(0, "domain").with_patches(["top", "bottom"]);
        assert_eq!(solid.id(), 0);
        assert_eq!(solid.patch_names().len(), 2);
    }
}
