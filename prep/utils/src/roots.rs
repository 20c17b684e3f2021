//! 对 `mri_berry::dataset` 路径助手的更一层封装.
//! 提供环境变量优先、`$HOME/dataset` 兜底的目录解析.

use mri_berry::dataset::{self, DatasetKind};
use std::env;
use std::path::PathBuf;

fn env_or_home(var: &str, tail: &[&str]) -> PathBuf {
    if let Ok(d) = env::var(var) {
        PathBuf::from(d)
    } else {
        dataset::home_dataset_dir_with(tail).unwrap()
    }
}

/// 获取某数据集的根目录.
///
/// 1. 若对应环境变量非空, 则返回其值;
/// 2. 否则, 返回 `$HOME/dataset` 下的约定子目录.
///
/// 环境变量: `$BRATS2020_DIR`, `$BRATS2021_DIR`, `$BRATS_MEN_DIR`,
/// `$ISLES2022_DIR`.
pub fn dataset_dir_from_env_or_home(kind: DatasetKind) -> PathBuf {
    match kind {
        DatasetKind::Brats2020 => env_or_home(
            "BRATS2020_DIR",
            &["BraTS2020_TrainingData", "MICCAI_BraTS2020_TrainingData"],
        ),
        DatasetKind::Brats2021 => env_or_home("BRATS2021_DIR", &["BraTS2021"]),
        DatasetKind::BratsMen => env_or_home("BRATS_MEN_DIR", &["BraTS-MEN"]),
        DatasetKind::Isles2022 => env_or_home("ISLES2022_DIR", &["ISLES-2022"]),
    }
}

/// 获取 anatomy mask 目录.
///
/// 1. 若环境变量 `$MRI_MASK_DIR` 非空, 则返回其值;
/// 2. 否则, 返回 `$HOME/dataset/inference_output.v2`.
pub fn mask_dir_from_env_or_home() -> PathBuf {
    env_or_home("MRI_MASK_DIR", &["inference_output.v2"])
}

/// 获取 manifest 输出目录.
///
/// 1. 若环境变量 `$MRI_MANIFEST_OUT_DIR` 非空, 则返回其值;
/// 2. 否则, 返回 `$HOME/dataset/raw_data/nnUNet_raw_data/Task001_seg_test`.
pub fn output_dir_from_env_or_home() -> PathBuf {
    env_or_home(
        "MRI_MANIFEST_OUT_DIR",
        &["raw_data", "nnUNet_raw_data", "Task001_seg_test"],
    )
}
