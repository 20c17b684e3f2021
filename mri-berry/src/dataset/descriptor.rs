//! 数据集静态描述符注册表.
//!
//! 每个数据集家族的目录组织与文件名约定都固定在这里,
//! 扫描器与路径解析器共用同一张表, 以消除多处副本之间的漂移.

use super::DatasetKind;
use crate::consts::Modality;

/// 单个数据集的目录组织与文件名约定.
///
/// 所有字段均为编译期常量, 运行时只读.
#[derive(Debug)]
pub struct DatasetDescriptor {
    /// 数据集名称.
    pub name: &'static str,

    /// case 目录名 (同时也是 stem) 的固定前缀, 用于目录过滤与家族推断.
    pub prefix: &'static str,

    /// 图像文件扩展名 (`.nii` 或 `.nii.gz`).
    pub ext: &'static str,

    /// case 目录下的固定 session 子目录 (BIDS 组织的数据集才有).
    pub session: Option<&'static str>,

    /// 模态 -> 图像文件名后缀.
    pub suffixes: &'static [(Modality, &'static str)],

    /// 模态 -> session 目录下的模态子目录 (BIDS 组织的数据集才有).
    pub modality_subdirs: &'static [(Modality, &'static str)],
}

impl DatasetDescriptor {
    /// 给定模态的子目录名.
    pub fn subdir_of(&self, modality: Modality) -> Option<&'static str> {
        self.modality_subdirs
            .iter()
            .find(|(m, _)| *m == modality)
            .map(|(_, s)| *s)
    }
}

/// BraTS2020/BraTS2021 共用的模态后缀表.
const BRATS_SUFFIXES: &[(Modality, &str)] = &[
    (Modality::T1, "_t1"),
    (Modality::T1c, "_t1ce"),
    (Modality::T2, "_t2"),
    (Modality::T2Flair, "_flair"),
    (Modality::Dwi, "_dwi"),
];

const BRATS_MEN: &DatasetDescriptor = &DatasetDescriptor {
    name: "BraTS-MEN",
    prefix: "BraTS-MEN-",
    ext: ".nii",
    session: None,
    suffixes: &[
        (Modality::T1, "-t1n"),
        (Modality::T1c, "-t1c"),
        (Modality::T2, "-t2w"),
        (Modality::T2Flair, "-t2f"),
    ],
    modality_subdirs: &[],
};

const BRATS_2020: &DatasetDescriptor = &DatasetDescriptor {
    name: "BraTS2020",
    prefix: "BraTS20_Training_",
    ext: ".nii",
    session: None,
    suffixes: BRATS_SUFFIXES,
    modality_subdirs: &[],
};

const BRATS_2021: &DatasetDescriptor = &DatasetDescriptor {
    name: "BraTS2021",
    prefix: "BraTS2021_",
    ext: ".nii.gz",
    session: None,
    suffixes: BRATS_SUFFIXES,
    modality_subdirs: &[],
};

const ISLES_2022: &DatasetDescriptor = &DatasetDescriptor {
    name: "ISLES-2022",
    prefix: "sub-strokecase",
    ext: ".nii.gz",
    session: Some("ses-0001"),
    // session 段是 stem 的一部分, 因此后缀带 `_ses-0001`.
    suffixes: &[(Modality::Dwi, "_ses-0001_dwi")],
    modality_subdirs: &[(Modality::Dwi, "dwi")],
};

/// 描述符查询.
pub(super) const fn of(kind: DatasetKind) -> &'static DatasetDescriptor {
    match kind {
        DatasetKind::BratsMen => BRATS_MEN,
        DatasetKind::Brats2020 => BRATS_2020,
        DatasetKind::Brats2021 => BRATS_2021,
        DatasetKind::Isles2022 => ISLES_2022,
    }
}
