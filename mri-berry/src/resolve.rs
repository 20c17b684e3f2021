//! 路径解析.
//!
//! 纯路径拼接, 不做任何存在性检查; 是否把一条记录纳入
//! manifest 由调用方在检查文件存在性之后决定.

use crate::consts::{Modality, ANATOMY_MASK_TAIL};
use crate::dataset::DatasetKind;
use std::path::{Path, PathBuf};

/// 解析一条 (stem, 模态) 记录对应的图像文件全路径.
///
/// 路径组成: 数据集根目录 / case 目录 [/ session 目录] [/ 模态子目录] /
/// `{stem}{扩展名}`. 数据集不提供该模态时返回 `None`.
pub fn image_path(
    root: &Path,
    kind: DatasetKind,
    case_id: &str,
    stem: &str,
    modality: Modality,
) -> Option<PathBuf> {
    // 模态必须在该数据集的后缀表中, 保证与扫描器/聚合器一致.
    kind.suffix_of(modality)?;

    let desc = kind.descriptor();
    let mut p = root.join(case_id);
    if let Some(session) = desc.session {
        p.push(session);
    }
    if let Some(subdir) = desc.subdir_of(modality) {
        p.push(subdir);
    }
    p.push(format!("{stem}{}", desc.ext));
    Some(p)
}

/// 解析 anatomy mask (外部推理系统的输出) 的期望路径.
///
/// 文件名为 `{case_id}{模态后缀}{_ana.nii.gz}`, 模态后缀与图像文件名
/// 共用同一张表. 数据集不提供该模态时返回 `None`.
pub fn anatomy_mask_path(
    mask_dir: &Path,
    kind: DatasetKind,
    case_id: &str,
    modality: Modality,
) -> Option<PathBuf> {
    let suffix = kind.suffix_of(modality)?;
    Some(mask_dir.join(format!("{case_id}{suffix}{ANATOMY_MASK_TAIL}")))
}

/// 解析 ground truth (anomaly mask) 的路径. 命名方式按数据集家族区分.
pub fn ground_truth_path(root: &Path, kind: DatasetKind, case_id: &str) -> PathBuf {
    match kind {
        DatasetKind::Brats2020 => root.join(case_id).join(format!("{case_id}_seg.nii")),
        DatasetKind::Brats2021 => root.join(case_id).join(format!("{case_id}_seg.nii.gz")),
        DatasetKind::BratsMen => root.join(case_id).join(format!("{case_id}-seg.nii")),
        // BIDS 组织: ground truth 在 derivatives 子树下.
        DatasetKind::Isles2022 => root
            .join("derivatives")
            .join(case_id)
            .join("ses-0001")
            .join(format!("{case_id}_ses-0001_msk.nii.gz")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn root() -> PathBuf {
        PathBuf::from("/data/mri")
    }

    #[test]
    fn test_brats2020_image_path() {
        let p = image_path(
            &root(),
            DatasetKind::Brats2020,
            "BraTS20_Training_001",
            "BraTS20_Training_001_flair",
            Modality::T2Flair,
        )
        .unwrap();
        assert_eq!(
            p,
            PathBuf::from("/data/mri/BraTS20_Training_001/BraTS20_Training_001_flair.nii")
        );
    }

    #[test]
    fn test_brats2021_image_path_gz() {
        let p = image_path(
            &root(),
            DatasetKind::Brats2021,
            "BraTS2021_00495",
            "BraTS2021_00495_t2",
            Modality::T2,
        )
        .unwrap();
        assert_eq!(
            p,
            PathBuf::from("/data/mri/BraTS2021_00495/BraTS2021_00495_t2.nii.gz")
        );
    }

    #[test]
    fn test_isles_image_path_has_session_and_subdir() {
        let p = image_path(
            &root(),
            DatasetKind::Isles2022,
            "sub-strokecase0003",
            "sub-strokecase0003_ses-0001_dwi",
            Modality::Dwi,
        )
        .unwrap();
        assert_eq!(
            p,
            PathBuf::from(
                "/data/mri/sub-strokecase0003/ses-0001/dwi/sub-strokecase0003_ses-0001_dwi.nii.gz"
            )
        );
    }

    #[test]
    fn test_unknown_modality_yields_none() {
        assert!(image_path(
            &root(),
            DatasetKind::Isles2022,
            "sub-strokecase0003",
            "sub-strokecase0003_ses-0001_flair",
            Modality::T2Flair,
        )
        .is_none());
        assert!(anatomy_mask_path(
            &root(),
            DatasetKind::Isles2022,
            "sub-strokecase0003",
            Modality::T1
        )
        .is_none());
    }

    #[test]
    fn test_anatomy_mask_path_couples_image_suffix() {
        let p = anatomy_mask_path(
            &PathBuf::from("/data/masks"),
            DatasetKind::BratsMen,
            "BraTS-MEN-00231-000",
            Modality::T2Flair,
        )
        .unwrap();
        assert_eq!(
            p,
            PathBuf::from("/data/masks/BraTS-MEN-00231-000-t2f_ana.nii.gz")
        );
    }

    #[test]
    fn test_ground_truth_paths() {
        assert_eq!(
            ground_truth_path(&root(), DatasetKind::Brats2020, "BraTS20_Training_001"),
            PathBuf::from("/data/mri/BraTS20_Training_001/BraTS20_Training_001_seg.nii")
        );
        assert_eq!(
            ground_truth_path(&root(), DatasetKind::BratsMen, "BraTS-MEN-00231-000"),
            PathBuf::from("/data/mri/BraTS-MEN-00231-000/BraTS-MEN-00231-000-seg.nii")
        );
        assert_eq!(
            ground_truth_path(&root(), DatasetKind::Isles2022, "sub-strokecase0003"),
            PathBuf::from(
                "/data/mri/derivatives/sub-strokecase0003/ses-0001/sub-strokecase0003_ses-0001_msk.nii.gz"
            )
        );
    }
}
