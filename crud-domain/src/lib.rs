//! CRUD 领域层基础库（crud-domain）
//!
//! 为“增删改查”类应用提供与界面、存储实现无关的两块通用构件：
//! - 实体标识（`identity`）：区分仅存在于内存中的临时标识与由存储层分配的持久标识，
//!   并提供序列化、排序以及与 `==` 分离的标识等价关系（`id_equivalence`）；
//! - 分域校验（`validation`）：以声明式规则集对模型逐字段或整体进行校验，
//!   按作用域累积错误信息，支持只重新校验单个字段而不影响其余字段的结果。
//!
//! 另外定义了实体（`entity`）、存储投影（`storage`）与仓储（`repository`）等接口，
//! 供持久化层与应用层适配实现。
//!
//! 典型用法：
//! 1. 使用 `#[entity(key = i64)]` 与 `#[model]` 定义记录及其字段选择器；
//! 2. 通过 `FieldProxy` 组合字段规则得到 `Validate<Model>`；
//! 3. 在 `ValidationState` 上以 `ValidationScope` 调用 `validate`，根据 `all_valid` 决定是否保存；
//! 4. 通过 `Repository::save` 持久化后，以返回记录中的新标识替换原有临时标识。
//!
pub mod entity;
pub mod error;
pub mod id_equivalence;
pub mod identity;
pub mod repository;
pub mod storage;
pub mod validation;

// 允许在本 crate 内部通过 ::crud_domain 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::crud_domain 路径。
extern crate self as crud_domain;
