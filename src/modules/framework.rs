// src/modules/framework.rs

//! 模块框架
//!
//! 可互换数值模块的通用构造/销毁生命周期。模块按类型标签
//! （[`ModuleKind`]）实例化，在构造时通过 [`ModuleContext`] 按自身
//! 命名空间读取配置完成自配置；建造者只传结构参数（相数、污染物数），
//! 从不传原始配置值。
//!
//! 句柄（[`ModuleHandle`]）不携带共享所有权：问题聚合独占持有它的
//! 每个句柄，销毁即 `Drop`，对同一句柄的二次销毁在所有权系统下
//! 不可表达。
//!
//! 框架维护一份实例台账（[`ModuleStats`]）：逐类型的构造/销毁计数
//! 与构造顺序，供关闭时的泄漏诊断与测试中的资源核对使用。

use crate::core::error::GfResult;
use crate::core::registry::NameRegistry;
use crate::infra::config::ConfigDb;
use log::debug;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// 模块类型标签
///
/// 每个标签同时是该模块在配置库中的命名空间。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModuleKind {
    /// 几何处理
    Geometries,
    /// 时间步选择（仅 Richards 剖面）
    SelectTimeStep,
    /// 计算域
    Domain,
    /// 相密度
    PhaseDensity,
    /// 渗透率
    Permeability,
    /// 孔隙度
    Porosity,
    /// 迟滞
    Retardation,
    /// 相迁移率（仅 General 剖面）
    PhaseMobility,
    /// 相相对渗透率（仅 Richards 剖面）
    PhaseRelPerm,
    /// 相源汇项
    PhaseSource,
    /// 储水率
    SpecificStorage,
    /// 地表 X 向坡度
    XSlope,
    /// 地表 Y 向坡度
    YSlope,
    /// 曼宁糙率
    Mannings,
    /// 毛细压力（仅 General 剖面）
    CapillaryPressure,
    /// 饱和度（仅 Richards 剖面）
    Saturation,
    /// 内部边界条件（仅 General 剖面）
    BcInternal,
    /// 内部边界条件，Richards 形式（仅 Richards 剖面）
    RichardsBcInternal,
    /// 压力边界条件
    BcPressure,
    /// 压力边界条件包
    BcPressurePackage,
    /// 相饱和度边界条件（仅 General 剖面）
    BcPhaseSaturation,
    /// 相饱和度初始条件（仅 General 剖面）
    IcPhaseSaturation,
    /// 相压力初始条件（仅 Richards 剖面）
    IcPhasePressure,
    /// 相浓度初始条件
    IcPhaseConcentration,
    /// L2 误差范数诊断（仅 Richards 剖面）
    L2ErrorNorm,
    /// 饱和度本构关系（仅 General 剖面）
    SaturationConstitutive,
    /// 井包
    WellPackage,
}

impl ModuleKind {
    /// 全部模块类型标签
    pub const ALL: [ModuleKind; 27] = [
        Self::Geometries,
        Self::SelectTimeStep,
        Self::Domain,
        Self::PhaseDensity,
        Self::Permeability,
        Self::Porosity,
        Self::Retardation,
        Self::PhaseMobility,
        Self::PhaseRelPerm,
        Self::PhaseSource,
        Self::SpecificStorage,
        Self::XSlope,
        Self::YSlope,
        Self::Mannings,
        Self::CapillaryPressure,
        Self::Saturation,
        Self::BcInternal,
        Self::RichardsBcInternal,
        Self::BcPressure,
        Self::BcPressurePackage,
        Self::BcPhaseSaturation,
        Self::IcPhaseSaturation,
        Self::IcPhasePressure,
        Self::IcPhaseConcentration,
        Self::L2ErrorNorm,
        Self::SaturationConstitutive,
        Self::WellPackage,
    ];

    /// 标签名，同时是模块的配置命名空间
    pub fn name(&self) -> &'static str {
        match self {
            Self::Geometries => "Geometries",
            Self::SelectTimeStep => "SelectTimeStep",
            Self::Domain => "Domain",
            Self::PhaseDensity => "PhaseDensity",
            Self::Permeability => "Permeability",
            Self::Porosity => "Porosity",
            Self::Retardation => "Retardation",
            Self::PhaseMobility => "PhaseMobility",
            Self::PhaseRelPerm => "PhaseRelPerm",
            Self::PhaseSource => "PhaseSource",
            Self::SpecificStorage => "SpecificStorage",
            Self::XSlope => "XSlope",
            Self::YSlope => "YSlope",
            Self::Mannings => "Mannings",
            Self::CapillaryPressure => "CapillaryPressure",
            Self::Saturation => "Saturation",
            Self::BcInternal => "BCInternal",
            Self::RichardsBcInternal => "RichardsBCInternal",
            Self::BcPressure => "BCPressure",
            Self::BcPressurePackage => "BCPressurePackage",
            Self::BcPhaseSaturation => "BCPhaseSaturation",
            Self::IcPhaseSaturation => "ICPhaseSaturation",
            Self::IcPhasePressure => "ICPhasePressure",
            Self::IcPhaseConcentration => "ICPhaseConcentration",
            Self::L2ErrorNorm => "L2ErrorNorm",
            Self::SaturationConstitutive => "SaturationConstitutive",
            Self::WellPackage => "WellPackage",
        }
    }
}

impl std::fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 模块构造的结构参数
///
/// 建造者只向模块传递计数，模块自身的参数取值一律经
/// [`ModuleContext`] 从配置库自行读取。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModuleArgs {
    /// 流体相数
    pub num_phases: Option<usize>,
    /// 污染物数
    pub num_contaminants: Option<usize>,
}

impl ModuleArgs {
    /// 无结构参数
    pub fn none() -> Self {
        Self::default()
    }

    /// 仅相数
    pub fn phases(num_phases: usize) -> Self {
        Self {
            num_phases: Some(num_phases),
            num_contaminants: None,
        }
    }

    /// 仅污染物数
    pub fn contaminants(num_contaminants: usize) -> Self {
        Self {
            num_phases: None,
            num_contaminants: Some(num_contaminants),
        }
    }

    /// 相数与污染物数
    pub fn phases_and_contaminants(num_phases: usize, num_contaminants: usize) -> Self {
        Self {
            num_phases: Some(num_phases),
            num_contaminants: Some(num_contaminants),
        }
    }
}

/// 模块构造上下文
///
/// 模块自配置所需的只读视图：配置库，以及相/污染物名称注册表
/// （解析完成之后才可用，之前构造的模块拿到 `None`）。
/// 注册表以引用传入，初始化后只读，不经任何全局状态。
#[derive(Debug, Clone, Copy)]
pub struct ModuleContext<'a> {
    /// 配置库
    pub config: &'a ConfigDb,
    /// 相名称注册表
    pub phase_names: Option<&'a NameRegistry>,
    /// 污染物名称注册表
    pub contaminant_names: Option<&'a NameRegistry>,
}

impl<'a> ModuleContext<'a> {
    /// 创建仅含配置库的上下文
    pub fn new(config: &'a ConfigDb) -> Self {
        Self {
            config,
            phase_names: None,
            contaminant_names: None,
        }
    }

    /// 创建含名称注册表的上下文
    pub fn with_registries(
        config: &'a ConfigDb,
        phase_names: &'a NameRegistry,
        contaminant_names: &'a NameRegistry,
    ) -> Self {
        Self {
            config,
            phase_names: Some(phase_names),
            contaminant_names: Some(contaminant_names),
        }
    }
}

/// 模块实例接口
///
/// 模块内部的计算内容不在本 crate 范围内，这里只约定身份与描述。
pub trait Module: std::fmt::Debug + Send {
    /// 模块类型标签
    fn kind(&self) -> ModuleKind;

    /// 实例描述（自配置得到的具体类型名等）
    fn describe(&self) -> String {
        self.kind().to_string()
    }
}

/// 模块工厂接口
///
/// 按类型标签实例化模块。测试中注入计数工厂即可核对
/// 每个剖面构造了哪些模块。
pub trait ModuleFactory: Send + Sync {
    /// 构造一个模块实例
    fn construct(
        &self,
        kind: ModuleKind,
        args: ModuleArgs,
        ctx: &ModuleContext<'_>,
    ) -> GfResult<Box<dyn Module>>;
}

/// 默认工厂：构造自配置的标准模块实例
#[derive(Debug, Default)]
pub struct StandardFactory;

impl ModuleFactory for StandardFactory {
    fn construct(
        &self,
        kind: ModuleKind,
        args: ModuleArgs,
        ctx: &ModuleContext<'_>,
    ) -> GfResult<Box<dyn Module>> {
        // 模块按自身命名空间选择具体实现类型
        let type_name = ctx
            .config
            .get_string_default(&format!("{}.Type", kind.name()), "Standard")
            .to_string();
        Ok(Box::new(StandardModule {
            kind,
            type_name,
            args,
        }))
    }
}

#[derive(Debug)]
struct StandardModule {
    kind: ModuleKind,
    type_name: String,
    args: ModuleArgs,
}

impl Module for StandardModule {
    fn kind(&self) -> ModuleKind {
        self.kind
    }

    fn describe(&self) -> String {
        match (self.args.num_phases, self.args.num_contaminants) {
            (Some(np), Some(nc)) => format!("{}({}) [{}相, {}污染物]", self.kind, self.type_name, np, nc),
            (Some(np), None) => format!("{}({}) [{}相]", self.kind, self.type_name, np),
            _ => format!("{}({})", self.kind, self.type_name),
        }
    }
}

/// 模块实例台账快照
#[derive(Debug, Default, Clone)]
pub struct ModuleStats {
    constructed: HashMap<ModuleKind, usize>,
    destroyed: HashMap<ModuleKind, usize>,
    sequence: Vec<ModuleKind>,
}

impl ModuleStats {
    /// 某类型的累计构造数
    pub fn constructed_count(&self, kind: ModuleKind) -> usize {
        self.constructed.get(&kind).copied().unwrap_or(0)
    }

    /// 某类型的累计销毁数
    pub fn destroyed_count(&self, kind: ModuleKind) -> usize {
        self.destroyed.get(&kind).copied().unwrap_or(0)
    }

    /// 某类型的存活实例数
    pub fn live_count(&self, kind: ModuleKind) -> usize {
        self.constructed_count(kind)
            .saturating_sub(self.destroyed_count(kind))
    }

    /// 某类型是否构造过
    pub fn was_constructed(&self, kind: ModuleKind) -> bool {
        self.constructed_count(kind) > 0
    }

    /// 全部类型的累计构造数
    pub fn total_constructed(&self) -> usize {
        self.constructed.values().sum()
    }

    /// 全部类型的存活实例数
    pub fn total_live(&self) -> usize {
        ModuleKind::ALL.iter().map(|&k| self.live_count(k)).sum()
    }

    /// 构造顺序（按发生先后）
    pub fn construction_sequence(&self) -> &[ModuleKind] {
        &self.sequence
    }

    /// 是否每个构造都有对应的销毁
    pub fn is_balanced(&self) -> bool {
        self.total_live() == 0
    }

    fn record_construct(&mut self, kind: ModuleKind) {
        *self.constructed.entry(kind).or_insert(0) += 1;
        self.sequence.push(kind);
    }

    fn record_destroy(&mut self, kind: ModuleKind) {
        *self.destroyed.entry(kind).or_insert(0) += 1;
    }
}

/// 模块框架
///
/// 持有工厂与实例台账。一次初始化内只存在一个框架实例，
/// 问题聚合构造的每个模块都经由它登记。
pub struct ModuleFramework {
    factory: Box<dyn ModuleFactory>,
    ledger: Arc<Mutex<ModuleStats>>,
}

impl ModuleFramework {
    /// 创建使用默认工厂的框架
    pub fn new() -> Self {
        Self::with_factory(Box::new(StandardFactory))
    }

    /// 创建使用指定工厂的框架
    pub fn with_factory(factory: Box<dyn ModuleFactory>) -> Self {
        Self {
            factory,
            ledger: Arc::new(Mutex::new(ModuleStats::default())),
        }
    }

    /// 构造一个模块并登记到台账
    pub fn construct(
        &self,
        kind: ModuleKind,
        args: ModuleArgs,
        ctx: &ModuleContext<'_>,
    ) -> GfResult<ModuleHandle> {
        let module = self.factory.construct(kind, args, ctx)?;
        self.ledger.lock().record_construct(kind);
        debug!("构造模块: {}", module.describe());
        Ok(ModuleHandle {
            module,
            kind,
            ledger: Arc::clone(&self.ledger),
        })
    }

    /// 台账快照
    pub fn stats(&self) -> ModuleStats {
        self.ledger.lock().clone()
    }
}

impl Default for ModuleFramework {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ModuleFramework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleFramework")
            .field("stats", &self.ledger.lock())
            .finish()
    }
}

/// 模块句柄
///
/// 对一个已构造模块实例的独占所有权。`Drop` 即销毁并在台账
/// 登记；句柄不可克隆，二次销毁不可表达。
#[derive(Debug)]
pub struct ModuleHandle {
    module: Box<dyn Module>,
    kind: ModuleKind,
    ledger: Arc<Mutex<ModuleStats>>,
}

impl ModuleHandle {
    /// 模块类型标签
    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    /// 模块实例
    pub fn module(&self) -> &dyn Module {
        self.module.as_ref()
    }
}

impl Drop for ModuleHandle {
    fn drop(&mut self) {
        self.ledger.lock().record_destroy(self.kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GfError;

    fn empty_config() -> ConfigDb {
        ConfigDb::new()
    }

    #[test]
    fn test_construct_returns_handle_of_kind() {
        let config = empty_config();
        let framework = ModuleFramework::new();
        let ctx = ModuleContext::new(&config);
        let handle = framework
            .construct(ModuleKind::Domain, ModuleArgs::none(), &ctx)
            .unwrap();
        assert_eq!(handle.kind(), ModuleKind::Domain);
        assert_eq!(handle.module().kind(), ModuleKind::Domain);
    }

    #[test]
    fn test_ledger_counts_construct_and_drop() {
        let config = empty_config();
        let framework = ModuleFramework::new();
        let ctx = ModuleContext::new(&config);

        let handle = framework
            .construct(ModuleKind::Porosity, ModuleArgs::none(), &ctx)
            .unwrap();
        let stats = framework.stats();
        assert_eq!(stats.constructed_count(ModuleKind::Porosity), 1);
        assert_eq!(stats.live_count(ModuleKind::Porosity), 1);
        assert!(!stats.is_balanced());

        drop(handle);
        let stats = framework.stats();
        assert_eq!(stats.destroyed_count(ModuleKind::Porosity), 1);
        assert_eq!(stats.live_count(ModuleKind::Porosity), 0);
        assert!(stats.is_balanced());
    }

    #[test]
    fn test_construction_sequence_recorded() {
        let config = empty_config();
        let framework = ModuleFramework::new();
        let ctx = ModuleContext::new(&config);

        let _a = framework
            .construct(ModuleKind::Geometries, ModuleArgs::none(), &ctx)
            .unwrap();
        let _b = framework
            .construct(ModuleKind::Domain, ModuleArgs::none(), &ctx)
            .unwrap();
        assert_eq!(
            framework.stats().construction_sequence(),
            &[ModuleKind::Geometries, ModuleKind::Domain]
        );
    }

    #[test]
    fn test_module_self_configures_type() {
        let mut config = ConfigDb::new();
        config.set("PhaseDensity.Type", "Constant");
        let framework = ModuleFramework::new();
        let ctx = ModuleContext::new(&config);
        let handle = framework
            .construct(ModuleKind::PhaseDensity, ModuleArgs::phases(2), &ctx)
            .unwrap();
        assert!(handle.module().describe().contains("Constant"));
    }

    #[test]
    fn test_factory_failure_not_recorded() {
        struct FailingFactory;
        impl ModuleFactory for FailingFactory {
            fn construct(
                &self,
                kind: ModuleKind,
                _args: ModuleArgs,
                _ctx: &ModuleContext<'_>,
            ) -> GfResult<Box<dyn Module>> {
                Err(GfError::config(format!("无法构造 {kind}")))
            }
        }

        let config = empty_config();
        let framework = ModuleFramework::with_factory(Box::new(FailingFactory));
        let ctx = ModuleContext::new(&config);
        assert!(framework
            .construct(ModuleKind::Domain, ModuleArgs::none(), &ctx)
            .is_err());
        assert_eq!(framework.stats().total_constructed(), 0);
    }

    #[test]
    fn test_kind_names_unique() {
        let mut names: Vec<&str> = ModuleKind::ALL.iter().map(|k| k.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ModuleKind::ALL.len());
    }

    #[test]
    fn test_args_constructors() {
        assert_eq!(ModuleArgs::none().num_phases, None);
        assert_eq!(ModuleArgs::phases(2).num_phases, Some(2));
        assert_eq!(ModuleArgs::contaminants(3).num_contaminants, Some(3));
        let both = ModuleArgs::phases_and_contaminants(2, 1);
        assert_eq!(both.num_phases, Some(2));
        assert_eq!(both.num_contaminants, Some(1));
    }
}
