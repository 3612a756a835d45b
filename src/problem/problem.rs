// src/problem/problem.rs

//! 问题聚合与建造者
//!
//! `Problem` 是一次模拟运行的完整内存描述：哪些数值模块处于激活
//! 状态、它们如何按相数/污染物数参数化、两种互斥求解剖面中哪一种
//! 生效。聚合从配置库构造一次，此后只读；销毁即 `Drop`。
//!
//! 剖面独有的模块槽位收在带标签变体 [`ProfileModules`] 中：每个
//! 变体只持有自己剖面的槽位，不属于激活剖面的槽位在类型上就不存在，
//! "释放恰好等于分配"因此是静态性质。激活剖面本身存放在聚合上，
//! 销毁不再依赖调用方复述。

use crate::core::error::{GfError, GfResult};
use crate::core::registry::NameRegistry;
use crate::ensure;
use crate::infra::config::ConfigDb;
use crate::modules::framework::{
    ModuleArgs, ModuleContext, ModuleFramework, ModuleHandle, ModuleKind,
};
use crate::problem::time_cycle::TimeCycleData;
use crate::require;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// 期望的输入文件版本号
pub const FILE_VERSION: i64 = 4;

/// 求解剖面
///
/// 两种互斥的数值形式，决定哪些可选模块槽位被填充。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// 通用多相形式
    General,
    /// Richards 单方程形式
    Richards,
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::General => "General",
            Self::Richards => "Richards",
        };
        write!(f, "{}", s)
    }
}

/// 时间推进参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingInfo {
    /// 基准时间单位
    pub base_unit: f64,
    /// 起始步计数
    pub start_count: i64,
    /// 起始时间
    pub start_time: f64,
    /// 终止时间
    pub stop_time: f64,
    /// 输出间隔
    pub dump_interval: f64,
    /// 结束时是否输出
    pub dump_at_end: bool,
}

impl TimingInfo {
    /// 从配置库读取时间推进参数
    pub(crate) fn read(config: &ConfigDb) -> GfResult<Self> {
        Ok(Self {
            base_unit: config.get_double("TimingInfo.BaseUnit")?,
            start_count: config.get_int("TimingInfo.StartCount")?,
            start_time: config.get_double("TimingInfo.StartTime")?,
            stop_time: config.get_double("TimingInfo.StopTime")?,
            dump_interval: config.get_double("TimingInfo.DumpInterval")?,
            dump_at_end: read_switch(config, "TimingInfo.DumpAtEnd", "False")?,
        })
    }
}

/// 以两元素名称注册表 `{"False","True"}` 解析布尔型配置串
///
/// 注册表仅在解析期间存在，解析完成即释放。
fn read_switch(config: &ConfigDb, key: &str, default: &str) -> GfResult<bool> {
    let switch_registry = NameRegistry::from_delimited("False True", ' ');
    let value = config.get_string_default(key, default);
    let index = switch_registry
        .index_of(value)
        .ok_or_else(|| GfError::invalid_config(key, value, "无法识别的开关值"))?;
    Ok(index == 1)
}

/// General 剖面独有的模块槽位
#[derive(Debug)]
pub struct GeneralModules {
    /// 相迁移率
    pub phase_mobility: ModuleHandle,
    /// 毛细压力
    pub capillary_pressure: ModuleHandle,
    /// 内部边界条件
    pub bc_internal: ModuleHandle,
    /// 相饱和度边界条件
    pub bc_phase_saturation: ModuleHandle,
    /// 相饱和度初始条件
    pub ic_phase_saturation: ModuleHandle,
    /// 饱和度本构关系
    pub saturation_constitutive: ModuleHandle,
}

/// Richards 剖面独有的模块槽位
#[derive(Debug)]
pub struct RichardsModules {
    /// 时间步选择
    pub select_time_step: ModuleHandle,
    /// 相相对渗透率
    pub phase_rel_perm: ModuleHandle,
    /// 饱和度
    pub saturation: ModuleHandle,
    /// 内部边界条件（Richards 形式）
    pub bc_internal: ModuleHandle,
    /// 相压力初始条件
    pub ic_phase_pressure: ModuleHandle,
    /// L2 误差范数诊断
    pub l2_error_norm: ModuleHandle,
}

/// 剖面独有模块槽位的带标签变体
#[derive(Debug)]
pub enum ProfileModules {
    /// General 剖面的槽位
    General(GeneralModules),
    /// Richards 剖面的槽位
    Richards(RichardsModules),
}

impl ProfileModules {
    /// General 槽位（非 General 剖面时为 `None`）
    pub fn as_general(&self) -> Option<&GeneralModules> {
        match self {
            Self::General(m) => Some(m),
            Self::Richards(_) => None,
        }
    }

    /// Richards 槽位（非 Richards 剖面时为 `None`）
    pub fn as_richards(&self) -> Option<&RichardsModules> {
        match self {
            Self::General(_) => None,
            Self::Richards(m) => Some(m),
        }
    }
}

/// 问题聚合
///
/// 每次运行恰好一个实例；初始化时构造一次，运行期间只读，
/// 关闭时随所有权释放。
#[derive(Debug)]
pub struct Problem {
    profile: Profile,
    timing: TimingInfo,
    time_cycle: TimeCycleData,

    phase_names: NameRegistry,
    contaminant_names: NameRegistry,

    gravity: f64,
    phase_viscosity: Vec<f64>,
    contaminant_degradation: Vec<f64>,

    geometries: ModuleHandle,
    domain: ModuleHandle,
    phase_density: ModuleHandle,
    permeability: ModuleHandle,
    porosity: ModuleHandle,
    retardation: ModuleHandle,
    phase_source: ModuleHandle,
    specific_storage: ModuleHandle,
    x_slope: ModuleHandle,
    y_slope: ModuleHandle,
    mannings: ModuleHandle,
    bc_pressure: ModuleHandle,
    bc_pressure_package: ModuleHandle,
    ic_phase_concentration: ModuleHandle,
    well_package: ModuleHandle,

    profile_modules: ProfileModules,
}

impl Problem {
    /// 从配置库装配问题聚合
    ///
    /// 版本门禁与开关校验在任何模块构造之前完成：失败路径上
    /// 观察不到任何部分构造的聚合。后续任一步骤失败时，已构造的
    /// 模块随局部所有权回收，台账保持平衡。
    pub fn new(
        profile: Profile,
        config: &ConfigDb,
        framework: &ModuleFramework,
    ) -> GfResult<Self> {
        // 版本门禁先于一切分配
        let version = config.get_int("FileVersion")?;
        ensure!(
            version == FILE_VERSION,
            GfError::version_mismatch(version, FILE_VERSION)
        );

        info!("装配问题描述 (剖面: {})", profile);

        let timing = TimingInfo::read(config)?;
        let time_cycle = TimeCycleData::read(config)?;

        // 名称注册表解析之前构造的模块只拿到配置库
        let ctx = ModuleContext::new(config);

        let geometries = framework.construct(ModuleKind::Geometries, ModuleArgs::none(), &ctx)?;
        let select_time_step = if profile == Profile::Richards {
            Some(framework.construct(ModuleKind::SelectTimeStep, ModuleArgs::none(), &ctx)?)
        } else {
            None
        };
        let domain = framework.construct(ModuleKind::Domain, ModuleArgs::none(), &ctx)?;

        let phase_names = NameRegistry::from_delimited(config.get_string("Phase.Names")?, ' ');
        let contaminant_names =
            NameRegistry::from_delimited(config.get_string("Contaminants.Names")?, ' ');
        let num_phases = phase_names.len();
        let num_contaminants = contaminant_names.len();
        debug!(
            "相: [{}] ({}), 污染物: [{}] ({})",
            phase_names, num_phases, contaminant_names, num_contaminants
        );

        let ctx = ModuleContext::with_registries(config, &phase_names, &contaminant_names);

        let gravity = config.get_double("Gravity")?;
        let phase_density =
            framework.construct(ModuleKind::PhaseDensity, ModuleArgs::phases(num_phases), &ctx)?;

        let mut phase_viscosity = Vec::with_capacity(num_phases);
        for name in phase_names.iter() {
            let key = format!("Phase.{name}.Viscosity.Value");
            phase_viscosity.push(config.get_double(&key)?);
        }

        let mut contaminant_degradation = Vec::with_capacity(num_contaminants);
        for name in contaminant_names.iter() {
            let key = format!("Contaminants.{name}.Degradation.Value");
            contaminant_degradation.push(config.get_double(&key)?);
        }

        let permeability =
            framework.construct(ModuleKind::Permeability, ModuleArgs::none(), &ctx)?;
        let porosity = framework.construct(ModuleKind::Porosity, ModuleArgs::none(), &ctx)?;
        let retardation = framework.construct(
            ModuleKind::Retardation,
            ModuleArgs::contaminants(num_contaminants),
            &ctx,
        )?;
        let phase_source = framework.construct(ModuleKind::PhaseSource, ModuleArgs::none(), &ctx)?;
        let specific_storage =
            framework.construct(ModuleKind::SpecificStorage, ModuleArgs::none(), &ctx)?;
        let x_slope = framework.construct(ModuleKind::XSlope, ModuleArgs::none(), &ctx)?;
        let y_slope = framework.construct(ModuleKind::YSlope, ModuleArgs::none(), &ctx)?;
        let mannings = framework.construct(ModuleKind::Mannings, ModuleArgs::none(), &ctx)?;

        let profile_modules = match profile {
            Profile::General => ProfileModules::General(GeneralModules {
                phase_mobility: framework.construct(
                    ModuleKind::PhaseMobility,
                    ModuleArgs::phases(num_phases),
                    &ctx,
                )?,
                capillary_pressure: framework.construct(
                    ModuleKind::CapillaryPressure,
                    ModuleArgs::phases(num_phases),
                    &ctx,
                )?,
                bc_internal: framework.construct(
                    ModuleKind::BcInternal,
                    ModuleArgs::none(),
                    &ctx,
                )?,
                bc_phase_saturation: framework.construct(
                    ModuleKind::BcPhaseSaturation,
                    ModuleArgs::phases(num_phases),
                    &ctx,
                )?,
                ic_phase_saturation: framework.construct(
                    ModuleKind::IcPhaseSaturation,
                    ModuleArgs::phases(num_phases),
                    &ctx,
                )?,
                saturation_constitutive: framework.construct(
                    ModuleKind::SaturationConstitutive,
                    ModuleArgs::phases(num_phases),
                    &ctx,
                )?,
            }),
            Profile::Richards => ProfileModules::Richards(RichardsModules {
                select_time_step: require!(
                    select_time_step,
                    GfError::internal("SelectTimeStep 句柄缺失")
                ),
                phase_rel_perm: framework.construct(
                    ModuleKind::PhaseRelPerm,
                    ModuleArgs::none(),
                    &ctx,
                )?,
                saturation: framework.construct(ModuleKind::Saturation, ModuleArgs::none(), &ctx)?,
                bc_internal: framework.construct(
                    ModuleKind::RichardsBcInternal,
                    ModuleArgs::none(),
                    &ctx,
                )?,
                ic_phase_pressure: framework.construct(
                    ModuleKind::IcPhasePressure,
                    ModuleArgs::none(),
                    &ctx,
                )?,
                l2_error_norm: framework.construct(
                    ModuleKind::L2ErrorNorm,
                    ModuleArgs::none(),
                    &ctx,
                )?,
            }),
        };

        let bc_pressure =
            framework.construct(ModuleKind::BcPressure, ModuleArgs::phases(num_phases), &ctx)?;
        let bc_pressure_package = framework.construct(
            ModuleKind::BcPressurePackage,
            ModuleArgs::phases(num_phases),
            &ctx,
        )?;
        let ic_phase_concentration = framework.construct(
            ModuleKind::IcPhaseConcentration,
            ModuleArgs::phases_and_contaminants(num_phases, num_contaminants),
            &ctx,
        )?;
        let well_package = framework.construct(
            ModuleKind::WellPackage,
            ModuleArgs::phases_and_contaminants(num_phases, num_contaminants),
            &ctx,
        )?;

        info!(
            "问题描述装配完成: {} 个模块, {} 相, {} 污染物",
            framework.stats().total_live(),
            num_phases,
            num_contaminants
        );

        Ok(Self {
            profile,
            timing,
            time_cycle,
            phase_names,
            contaminant_names,
            gravity,
            phase_viscosity,
            contaminant_degradation,
            geometries,
            domain,
            phase_density,
            permeability,
            porosity,
            retardation,
            phase_source,
            specific_storage,
            x_slope,
            y_slope,
            mannings,
            bc_pressure,
            bc_pressure_package,
            ic_phase_concentration,
            well_package,
            profile_modules,
        })
    }

    /// 激活的求解剖面
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// 时间推进参数
    pub fn timing(&self) -> &TimingInfo {
        &self.timing
    }

    /// 时间循环数据
    pub fn time_cycle(&self) -> &TimeCycleData {
        &self.time_cycle
    }

    /// 流体相数
    pub fn num_phases(&self) -> usize {
        self.phase_names.len()
    }

    /// 污染物数
    pub fn num_contaminants(&self) -> usize {
        self.contaminant_names.len()
    }

    /// 相名称注册表
    pub fn phase_names(&self) -> &NameRegistry {
        &self.phase_names
    }

    /// 污染物名称注册表
    pub fn contaminant_names(&self) -> &NameRegistry {
        &self.contaminant_names
    }

    /// 重力加速度（规格化）
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// 逐相粘度
    pub fn phase_viscosity(&self) -> &[f64] {
        &self.phase_viscosity
    }

    /// 逐污染物降解率
    pub fn contaminant_degradation(&self) -> &[f64] {
        &self.contaminant_degradation
    }

    /// 几何处理模块
    pub fn geometries(&self) -> &ModuleHandle {
        &self.geometries
    }

    /// 计算域模块
    pub fn domain(&self) -> &ModuleHandle {
        &self.domain
    }

    /// 相密度模块
    pub fn phase_density(&self) -> &ModuleHandle {
        &self.phase_density
    }

    /// 渗透率模块
    pub fn permeability(&self) -> &ModuleHandle {
        &self.permeability
    }

    /// 孔隙度模块
    pub fn porosity(&self) -> &ModuleHandle {
        &self.porosity
    }

    /// 迟滞模块
    pub fn retardation(&self) -> &ModuleHandle {
        &self.retardation
    }

    /// 相源汇项模块
    pub fn phase_source(&self) -> &ModuleHandle {
        &self.phase_source
    }

    /// 储水率模块
    pub fn specific_storage(&self) -> &ModuleHandle {
        &self.specific_storage
    }

    /// 地表 X 向坡度模块
    pub fn x_slope(&self) -> &ModuleHandle {
        &self.x_slope
    }

    /// 地表 Y 向坡度模块
    pub fn y_slope(&self) -> &ModuleHandle {
        &self.y_slope
    }

    /// 曼宁糙率模块
    pub fn mannings(&self) -> &ModuleHandle {
        &self.mannings
    }

    /// 压力边界条件模块
    pub fn bc_pressure(&self) -> &ModuleHandle {
        &self.bc_pressure
    }

    /// 压力边界条件包模块
    pub fn bc_pressure_package(&self) -> &ModuleHandle {
        &self.bc_pressure_package
    }

    /// 相浓度初始条件模块
    pub fn ic_phase_concentration(&self) -> &ModuleHandle {
        &self.ic_phase_concentration
    }

    /// 井包模块
    pub fn well_package(&self) -> &ModuleHandle {
        &self.well_package
    }

    /// 剖面独有的模块槽位
    pub fn profile_modules(&self) -> &ProfileModules {
        &self.profile_modules
    }
}

impl Drop for Problem {
    fn drop(&mut self) {
        debug!("释放问题描述 (剖面: {})", self.profile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 两种剖面共用的完整配置
    fn base_config() -> ConfigDb {
        ConfigDb::from_pairs([
            ("FileVersion", "4"),
            ("TimingInfo.BaseUnit", "1.0"),
            ("TimingInfo.StartCount", "0"),
            ("TimingInfo.StartTime", "0.0"),
            ("TimingInfo.StopTime", "100.0"),
            ("TimingInfo.DumpInterval", "10.0"),
            ("Phase.Names", "water oil"),
            ("Contaminants.Names", "tce"),
            ("Gravity", "1.0"),
            ("Phase.water.Viscosity.Value", "1.0"),
            ("Phase.oil.Viscosity.Value", "20.0"),
            ("Contaminants.tce.Degradation.Value", "0.0"),
        ])
    }

    const GENERAL_ONLY: [ModuleKind; 5] = [
        ModuleKind::PhaseMobility,
        ModuleKind::CapillaryPressure,
        ModuleKind::BcPhaseSaturation,
        ModuleKind::IcPhaseSaturation,
        ModuleKind::SaturationConstitutive,
    ];

    const RICHARDS_ONLY: [ModuleKind; 5] = [
        ModuleKind::SelectTimeStep,
        ModuleKind::PhaseRelPerm,
        ModuleKind::Saturation,
        ModuleKind::IcPhasePressure,
        ModuleKind::L2ErrorNorm,
    ];

    const UNCONDITIONAL: [ModuleKind; 15] = [
        ModuleKind::Geometries,
        ModuleKind::Domain,
        ModuleKind::PhaseDensity,
        ModuleKind::Permeability,
        ModuleKind::Porosity,
        ModuleKind::Retardation,
        ModuleKind::PhaseSource,
        ModuleKind::SpecificStorage,
        ModuleKind::XSlope,
        ModuleKind::YSlope,
        ModuleKind::Mannings,
        ModuleKind::BcPressure,
        ModuleKind::BcPressurePackage,
        ModuleKind::IcPhaseConcentration,
        ModuleKind::WellPackage,
    ];

    #[test]
    fn test_general_profile_populates_exact_slot_set() {
        let config = base_config();
        let framework = ModuleFramework::new();
        let problem = Problem::new(Profile::General, &config, &framework).unwrap();

        let stats = framework.stats();
        for kind in UNCONDITIONAL {
            assert_eq!(stats.constructed_count(kind), 1, "缺少无条件槽位 {kind}");
        }
        for kind in GENERAL_ONLY {
            assert_eq!(stats.constructed_count(kind), 1, "缺少 General 槽位 {kind}");
        }
        assert_eq!(stats.constructed_count(ModuleKind::BcInternal), 1);
        for kind in RICHARDS_ONLY {
            assert_eq!(stats.constructed_count(kind), 0, "不应构造 {kind}");
        }
        assert_eq!(stats.constructed_count(ModuleKind::RichardsBcInternal), 0);
        assert_eq!(stats.total_constructed(), 21);

        assert!(problem.profile_modules().as_general().is_some());
        assert!(problem.profile_modules().as_richards().is_none());
    }

    #[test]
    fn test_richards_profile_populates_complement_set() {
        let config = base_config();
        let framework = ModuleFramework::new();
        let problem = Problem::new(Profile::Richards, &config, &framework).unwrap();

        let stats = framework.stats();
        for kind in RICHARDS_ONLY {
            assert_eq!(stats.constructed_count(kind), 1, "缺少 Richards 槽位 {kind}");
        }
        assert_eq!(stats.constructed_count(ModuleKind::RichardsBcInternal), 1);
        for kind in GENERAL_ONLY {
            assert_eq!(stats.constructed_count(kind), 0, "不应构造 {kind}");
        }
        assert_eq!(stats.constructed_count(ModuleKind::BcInternal), 0);
        assert_eq!(stats.total_constructed(), 21);

        assert!(problem.profile_modules().as_richards().is_some());
    }

    #[test]
    fn test_teardown_releases_every_populated_slot() {
        for profile in [Profile::General, Profile::Richards] {
            let config = base_config();
            let framework = ModuleFramework::new();
            let problem = Problem::new(profile, &config, &framework).unwrap();
            assert_eq!(framework.stats().total_live(), 21);

            drop(problem);
            let stats = framework.stats();
            assert!(stats.is_balanced(), "剖面 {profile} 存在泄漏");
            for kind in ModuleKind::ALL {
                assert_eq!(
                    stats.constructed_count(kind),
                    stats.destroyed_count(kind),
                    "槽位 {kind} 构造/销毁不对称"
                );
            }
        }
    }

    #[test]
    fn test_version_mismatch_fails_before_any_construction() {
        let mut config = base_config();
        config.set("FileVersion", "3");
        let framework = ModuleFramework::new();

        let err = Problem::new(Profile::General, &config, &framework).unwrap_err();
        match err {
            GfError::VersionMismatch { found, expected } => {
                assert_eq!(found, 3);
                assert_eq!(expected, FILE_VERSION);
            }
            other => panic!("意外的错误类型: {other:?}"),
        }
        assert_eq!(framework.stats().total_constructed(), 0);
    }

    #[test]
    fn test_missing_required_key_aborts_without_leak() {
        let mut config = base_config();
        config.unset("Gravity");
        let framework = ModuleFramework::new();

        let err = Problem::new(Profile::Richards, &config, &framework).unwrap_err();
        assert!(matches!(err, GfError::MissingConfig { .. }));
        assert!(err.is_startup_fatal());
        // 失败路径上已构造的模块随局部所有权回收
        assert!(framework.stats().is_balanced());
    }

    #[test]
    fn test_phase_and_contaminant_fan_out() {
        let config = ConfigDb::from_pairs([
            ("FileVersion", "4"),
            ("TimingInfo.BaseUnit", "1.0"),
            ("TimingInfo.StartCount", "0"),
            ("TimingInfo.StartTime", "0.0"),
            ("TimingInfo.StopTime", "1.0"),
            ("TimingInfo.DumpInterval", "1.0"),
            ("Phase.Names", "Water Oil"),
            ("Contaminants.Names", ""),
            ("Gravity", "1.0"),
            ("Phase.Water.Viscosity.Value", "1.0"),
            ("Phase.Oil.Viscosity.Value", "20.0"),
        ]);
        let framework = ModuleFramework::new();
        let problem = Problem::new(Profile::General, &config, &framework).unwrap();

        assert_eq!(problem.num_phases(), 2);
        assert_eq!(problem.num_contaminants(), 0);
        assert_eq!(problem.phase_viscosity(), &[1.0, 20.0]);
        assert!(problem.contaminant_degradation().is_empty());
        assert_eq!(config.read_count("Phase.Water.Viscosity.Value"), 1);
        assert_eq!(config.read_count("Phase.Oil.Viscosity.Value"), 1);
    }

    #[test]
    fn test_dump_at_end_defaults_to_false() {
        let config = base_config();
        let framework = ModuleFramework::new();
        let problem = Problem::new(Profile::General, &config, &framework).unwrap();
        assert!(!problem.timing().dump_at_end);
    }

    #[test]
    fn test_dump_at_end_explicit_true() {
        let mut config = base_config();
        config.set("TimingInfo.DumpAtEnd", "True");
        let framework = ModuleFramework::new();
        let problem = Problem::new(Profile::General, &config, &framework).unwrap();
        assert!(problem.timing().dump_at_end);
    }

    #[test]
    fn test_dump_at_end_invalid_value_rejected() {
        let mut config = base_config();
        config.set("TimingInfo.DumpAtEnd", "Maybe");
        let framework = ModuleFramework::new();

        let err = Problem::new(Profile::General, &config, &framework).unwrap_err();
        match err {
            GfError::InvalidConfig { key, value, .. } => {
                assert_eq!(key, "TimingInfo.DumpAtEnd");
                assert_eq!(value, "Maybe");
            }
            other => panic!("意外的错误类型: {other:?}"),
        }
        // 开关校验先于一切模块构造
        assert_eq!(framework.stats().total_constructed(), 0);
    }

    #[test]
    fn test_construction_order() {
        let config = base_config();
        let framework = ModuleFramework::new();
        let _problem = Problem::new(Profile::Richards, &config, &framework).unwrap();

        let stats = framework.stats();
        let sequence = stats.construction_sequence();
        assert_eq!(sequence[0], ModuleKind::Geometries);
        assert_eq!(sequence[1], ModuleKind::SelectTimeStep);
        assert_eq!(sequence[2], ModuleKind::Domain);
        assert_eq!(*sequence.last().unwrap(), ModuleKind::WellPackage);
    }

    #[test]
    fn test_scalar_parameters_read() {
        let config = base_config();
        let framework = ModuleFramework::new();
        let problem = Problem::new(Profile::General, &config, &framework).unwrap();

        assert_eq!(problem.profile(), Profile::General);
        assert_eq!(problem.gravity(), 1.0);
        assert_eq!(problem.timing().base_unit, 1.0);
        assert_eq!(problem.timing().start_count, 0);
        assert_eq!(problem.timing().stop_time, 100.0);
        assert_eq!(problem.timing().dump_interval, 10.0);
        assert_eq!(problem.time_cycle().num_cycles(), 1);
    }

    #[test]
    fn test_registries_exposed_read_only() {
        let config = base_config();
        let framework = ModuleFramework::new();
        let problem = Problem::new(Profile::General, &config, &framework).unwrap();

        assert_eq!(problem.phase_names().index_of("oil"), Some(1));
        assert_eq!(problem.contaminant_names().name_at(0), Some("tce"));
    }
}
