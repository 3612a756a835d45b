// src/modules/mod.rs

//! 模块框架：可互换数值模块的构造/销毁生命周期契约

pub mod framework;

pub use framework::{
    Module, ModuleArgs, ModuleContext, ModuleFactory, ModuleFramework, ModuleHandle, ModuleKind,
    ModuleStats, StandardFactory,
};
