// src/problem/mod.rs

//! 问题装配层：Problem / ProblemData 聚合与建造者

pub mod data;
pub mod problem;
pub mod time_cycle;

pub use data::ProblemData;
pub use problem::{
    GeneralModules, Problem, Profile, ProfileModules, RichardsModules, TimingInfo, FILE_VERSION,
};
pub use time_cycle::TimeCycleData;
