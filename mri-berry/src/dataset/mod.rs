//! 数据集描述符与目录扫描.

use crate::consts::Modality;
use std::path::{Path, PathBuf};

mod descriptor;
pub mod scan;

pub use descriptor::DatasetDescriptor;
pub use scan::StemRecord;

/// 获取 `{用户主目录}/dataset` 目录.
pub fn home_dataset_dir() -> Option<PathBuf> {
    let mut ans = dirs::home_dir()?;
    ans.push("dataset");
    Some(ans)
}

/// 获取 `{用户主目录}/dataset` 目录下给定继续项组成的全路径.
pub fn home_dataset_dir_with<P: AsRef<Path>, I: IntoIterator<Item = P>>(it: I) -> Option<PathBuf> {
    let mut ans = home_dataset_dir()?;
    ans.extend(it);
    Some(ans)
}

/// 受支持的数据集家族.
///
/// 变体按数据集名称字典序声明 (`-` 的 ASCII 码小于数字), 因此
/// `#[derive(Ord)]` 的顺序与按名称排序的顺序一致. manifest
/// 的跨数据集拼接顺序依赖该不变式.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum DatasetKind {
    /// BraTS-MEN 脑膜瘤数据集.
    BratsMen,

    /// BraTS2020 胶质瘤数据集.
    Brats2020,

    /// BraTS2021 胶质瘤数据集.
    Brats2021,

    /// ISLES-2022 卒中数据集 (BIDS 目录组织, 带 session 层).
    Isles2022,
}

impl DatasetKind {
    /// 数据集名称.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.descriptor().name
    }

    /// 所有受支持的数据集, 按名称字典序排列.
    #[inline]
    pub const fn all() -> [DatasetKind; 4] {
        [
            DatasetKind::BratsMen,
            DatasetKind::Brats2020,
            DatasetKind::Brats2021,
            DatasetKind::Isles2022,
        ]
    }

    /// 该数据集的静态描述符.
    #[inline]
    pub const fn descriptor(&self) -> &'static DatasetDescriptor {
        descriptor::of(*self)
    }

    /// 根据 stem 前缀推断其所属的数据集家族.
    ///
    /// 前缀不属于任何已知数据集时返回 `None`.
    pub fn of_stem(stem: &str) -> Option<DatasetKind> {
        DatasetKind::all()
            .into_iter()
            .find(|k| stem.starts_with(k.descriptor().prefix))
    }

    /// 该数据集下, 给定模态的图像文件名后缀.
    ///
    /// 数据集不提供该模态时返回 `None`.
    pub fn suffix_of(&self, modality: Modality) -> Option<&'static str> {
        self.descriptor()
            .suffixes
            .iter()
            .find(|(m, _)| *m == modality)
            .map(|(_, s)| *s)
    }

    /// 该数据集下, 给定模态在文件名中的小写标记 (后缀的最后一段).
    ///
    /// 例如 BraTS2020 的 T2FLAIR 后缀 `_flair` 对应标记 `flair`,
    /// ISLES-2022 的 DWI 后缀 `_ses-0001_dwi` 对应标记 `dwi`.
    /// 数据集不提供该模态时返回 `None`.
    pub fn modal_token_of(&self, modality: Modality) -> Option<&'static str> {
        self.suffix_of(modality)?.rsplit(['_', '-']).next()
    }

    /// 从 stem 中剥离模态后缀, 得到 case id.
    ///
    /// 剥离是后缀式而非分割式的: case id 自身可以包含下划线
    /// (如 `BraTS20_Training_001`). stem 不以期望后缀结尾时返回
    /// `None`, 该 stem 应被调用方丢弃.
    pub fn case_id_of<'a>(&self, stem: &'a str, modality: Modality) -> Option<&'a str> {
        let suffix = self.suffix_of(modality)?;
        stem.strip_suffix(suffix)
    }
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
