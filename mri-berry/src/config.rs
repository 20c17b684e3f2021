//! 运行配置.
//!
//! 原型脚本里的模块级常量 (绝对路径、各数据集的后缀表副本、skip 列表)
//! 在这里收敛成一个显式的配置对象, 由调用方构造后传入各组件.

use crate::consts::{default_modalities, Modality};
use crate::dataset::DatasetKind;
use crate::manifest::{DatasetHeader, SchemaKind};
use crate::split::SplitPolicy;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// 默认剔除的 case id.
///
/// `BraTS20_Training_355` 的 T1C 体数据损坏, 上游已确认.
pub static DEFAULT_SKIP_CASES: Lazy<BTreeSet<String>> =
    Lazy::new(|| ["BraTS20_Training_355".to_owned()].into());

/// 一次 manifest 生成运行的完整配置.
#[derive(Debug, Clone)]
pub struct PrepConfig {
    /// 各数据集的根目录. 未配置的数据集不参与扫描.
    pub roots: BTreeMap<DatasetKind, PathBuf>,

    /// anatomy mask 目录 (外部推理系统的输出).
    pub mask_dir: PathBuf,

    /// 三份 JSON 的输出目录.
    pub output_dir: PathBuf,

    /// 整体剔除的 case id 集合.
    pub skip_cases: BTreeSet<String>,

    /// 启用的模态集合.
    pub modalities: BTreeSet<Modality>,

    /// 训练/测试划分策略.
    pub split: SplitPolicy,

    /// manifest 条目的字段方案.
    pub schema: SchemaKind,

    /// 是否额外输出 `brats_custom_format.json`
    /// (不带标签的平铺 `{image, modal}` 数组).
    pub custom_format: bool,

    /// `dataset.json` 的头部字段.
    pub header: DatasetHeader,
}

impl PrepConfig {
    /// 以默认策略构建配置: 80/20 划分, `DualLabel` 方案,
    /// 默认模态集合和默认 skip 列表. 数据集根目录由调用方逐个登记.
    pub fn new<P: Into<PathBuf>>(output_dir: P, mask_dir: P) -> PrepConfig {
        PrepConfig {
            roots: BTreeMap::new(),
            mask_dir: mask_dir.into(),
            output_dir: output_dir.into(),
            skip_cases: DEFAULT_SKIP_CASES.clone(),
            modalities: default_modalities(),
            split: SplitPolicy::default(),
            schema: SchemaKind::DualLabel,
            custom_format: false,
            header: DatasetHeader::default(),
        }
    }

    /// 登记一个数据集根目录.
    pub fn with_root<P: Into<PathBuf>>(mut self, kind: DatasetKind, root: P) -> PrepConfig {
        self.roots.insert(kind, root.into());
        self
    }
}
