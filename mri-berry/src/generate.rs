//! 端到端生成流程.
//!
//! 数据流: 文件系统 -> 扫描 -> 聚合 -> 划分 -> 路径解析 -> 三份 JSON.
//! 整个流程是同步单线程的, 每次运行完整重写全部输出文件.

use crate::case::CaseTable;
use crate::config::PrepConfig;
use crate::dataset::scan;
use crate::error::PrepError;
use crate::manifest::{
    write_json, CaseDic, CustomEntry, DatasetManifest, ManifestEntry, SchemaKind, TestFile,
    Validation,
};
use crate::resolve;
use crate::split::SplitAssignment;
use std::path::Path;

/// 一次运行的统计结果, 供调用方打印报告.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// 扫描得到的 (stem, 模态) 记录总数.
    pub stems: usize,

    /// 聚合后的 case 总数 (跨数据集).
    pub cases: usize,

    /// `dataset.json` 中的训练条目数.
    pub training_entries: usize,

    /// `dataset.json` 中的测试条目数.
    pub test_entries: usize,

    /// `test_file.json` 中的训练 stem 数.
    pub training_stems: usize,

    /// `test_file.json` 中的测试 stem 数.
    pub test_stems: usize,

    /// `brats_custom_format.json` 中的条目数. 未启用时为 0.
    pub custom_entries: usize,
}

#[inline]
fn path_str(p: &Path) -> String {
    p.to_string_lossy().into_owned()
}

/// 扫描配置的全部数据集并写出三份 manifest
/// (启用 `custom_format` 时另有 `brats_custom_format.json`).
///
/// 任何数据集的根目录缺失都只产生 warning; 但所有数据集都扫描完后
/// 仍没有任何 case 时, 返回 [`PrepError::EmptyCaseTable`],
/// 且不写出任何文件.
pub fn run(config: &PrepConfig) -> Result<RunSummary, PrepError> {
    let mut records = Vec::new();
    for (&kind, root) in &config.roots {
        records.extend(scan::scan(kind, root, &config.modalities, &config.skip_cases)?);
    }

    let mut case_dic: CaseDic = config
        .modalities
        .iter()
        .map(|m| (m.name(), Vec::new()))
        .collect();
    for record in &records {
        if let Some(stems) = case_dic.get_mut(&record.modality.name()) {
            stems.push(record.stem.clone());
        }
    }

    let table = CaseTable::from_records(records.iter().cloned(), &config.skip_cases);
    if table.is_empty() {
        return Err(PrepError::EmptyCaseTable);
    }
    let split = SplitAssignment::new(&table, config.split);

    let mut training = Vec::new();
    let mut test = Vec::new();
    let mut training_stems = Vec::new();
    let mut test_stems = Vec::new();
    let mut custom = Vec::new();

    for kind in table.datasets() {
        // records 只来自已配置的数据集, 这里必然能查到根目录.
        let root = &config.roots[&kind];
        for case_id in table.cases_of(kind) {
            for record in table.stems_of(case_id) {
                if record.kind != kind {
                    continue;
                }

                if split.is_training(case_id) {
                    training_stems.push(record.stem.clone());
                } else {
                    test_stems.push(record.stem.clone());
                }

                let Some(image) =
                    resolve::image_path(root, kind, case_id, &record.stem, record.modality)
                else {
                    continue;
                };
                if !image.exists() {
                    log::debug!("图像缺失, 条目剔除: {}", image.display());
                    continue;
                }
                if config.custom_format {
                    custom.push(CustomEntry {
                        image: path_str(&image),
                        modal: record.modality.name().to_owned(),
                    });
                }

                let ground_truth = resolve::ground_truth_path(root, kind, case_id);

                match config.schema {
                    SchemaKind::DualLabel => {
                        let Some(anatomy) = resolve::anatomy_mask_path(
                            &config.mask_dir,
                            kind,
                            case_id,
                            record.modality,
                        ) else {
                            continue;
                        };
                        let entry = ManifestEntry::Dual {
                            image: path_str(&image),
                            label1: path_str(&anatomy),
                            label2: if ground_truth.exists() {
                                path_str(&ground_truth)
                            } else {
                                String::new()
                            },
                            modal: record.modality.name().to_owned(),
                        };
                        if split.is_training(case_id) {
                            // 训练条目必须有 anatomy mask 可训; 缺失不是错误,
                            // 只是该数据还没被上游推理系统处理完.
                            if anatomy.exists() {
                                training.push(entry);
                            }
                        } else {
                            test.push(entry);
                        }
                    }
                    SchemaKind::SegLabel => {
                        let has_gt = ground_truth.exists();
                        // SegLabel 方案沿用文件名中的小写模态标记
                        // (如 `flair`), 而不是注册表名称.
                        let modal = kind
                            .modal_token_of(record.modality)
                            .unwrap_or(record.modality.name());
                        let entry = ManifestEntry::Seg {
                            image: path_str(&image),
                            label: if has_gt {
                                path_str(&ground_truth)
                            } else {
                                String::new()
                            },
                            modal: modal.to_owned(),
                        };
                        if split.is_training(case_id) {
                            if has_gt {
                                training.push(entry);
                            }
                        } else {
                            test.push(entry);
                        }
                    }
                }
            }
        }
    }

    let dataset = DatasetManifest::new(config.header.clone(), training, test);
    let test_file = TestFile {
        training: training_stems,
        validation: Validation { test: test_stems },
    };

    write_json(config.output_dir.join("case_dic.json"), &case_dic)?;
    write_json(config.output_dir.join("dataset.json"), &dataset)?;
    write_json(config.output_dir.join("test_file.json"), &test_file)?;
    if config.custom_format {
        write_json(config.output_dir.join("brats_custom_format.json"), &custom)?;
    }

    Ok(RunSummary {
        stems: case_dic.values().map(Vec::len).sum(),
        cases: table.len(),
        training_entries: dataset.num_training(),
        test_entries: dataset.num_test(),
        training_stems: test_file.training.len(),
        test_stems: test_file.validation.test.len(),
        custom_entries: custom.len(),
    })
}
