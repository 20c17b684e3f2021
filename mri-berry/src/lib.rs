#![warn(missing_docs)] // <= 合适时移除它.

//! 核心库. 为 BraTS2020/BraTS2021/BraTS-MEN/ISLES-2022 系列脑部 MRI
//! 数据集生成下游训练/推理框架消费的三份 JSON manifest
//! (`case_dic.json`, `dataset.json`, `test_file.json`).
//!
//! 该 crate 只做路径构造、文件名后缀解析和确定性的训练/测试划分,
//! 不读取任何图像体数据内容.
//!
//! # 注意
//!
//! 1. 各数据集的目录组织与文件名约定固定在
//!   [`dataset::DatasetDescriptor`] 注册表中, 扫描器与路径解析器
//!   共用同一张表; 新增数据集家族只需要登记一个描述符.
//! 2. case id 的提取是后缀式而非分割式的, 以正确处理自身包含
//!   下划线的 case id (如 `BraTS20_Training_001`).
//! 3. 输出完全由目录内容决定: 目录内容不变时, 重复运行产生
//!   字节一致的三份文件.
//!
//! # 典型用法
//!
//! ```no_run
//! use mri_berry::{generate, DatasetKind, PrepConfig};
//!
//! let config = PrepConfig::new("raw_data/Task001_seg_test", "inference_output.v2")
//!     .with_root(DatasetKind::Brats2020, "/data/mri/BraTS2020")
//!     .with_root(DatasetKind::Isles2022, "/data/mri/ISLES-2022");
//! let summary = generate::run(&config)?;
//! println!("训练条目 {} 条", summary.training_entries);
//! # Ok::<(), mri_berry::PrepError>(())
//! ```

pub mod consts;

pub mod case;
pub mod config;
pub mod dataset;
pub mod generate;
pub mod manifest;
pub mod resolve;
pub mod split;

mod error;

pub use config::PrepConfig;
pub use consts::Modality;
pub use dataset::DatasetKind;
pub use error::PrepError;
pub use generate::RunSummary;
pub use manifest::SchemaKind;
pub use split::SplitPolicy;
