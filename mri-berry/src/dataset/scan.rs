//! 数据集目录扫描器.
//!
//! 只做目录列举和文件存在性探测, 不读取任何图像内容.

use super::DatasetKind;
use crate::consts::Modality;
use crate::error::PrepError;
use crate::resolve;
use itertools::Itertools;
use std::collections::BTreeSet;
use std::path::Path;

/// 磁盘上观察到的一条 (stem, 模态) 记录.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StemRecord {
    /// 去掉扩展名的文件名.
    pub stem: String,

    /// 该文件对应的模态.
    pub modality: Modality,

    /// 所属数据集.
    pub kind: DatasetKind,
}

/// 扫描一个数据集根目录, 返回全部 (stem, 模态) 记录.
///
/// 1. 根目录不存在时记一条 warning 并返回空列表, 整次运行继续;
/// 2. case 子目录按名称排序遍历, 且必须以数据集前缀开头;
/// 3. skip 集合中的 case 在这里就被整体剔除, 不会进入任何输出;
/// 4. 对每个启用的模态做一次图像文件存在性探测, 缺失的模态被容忍
///   (部分数据集只提供模态子集);
/// 5. stem 记录为 `{case 目录名}{模态后缀}`, 与图像文件名 (去扩展名) 一致.
pub fn scan(
    kind: DatasetKind,
    root: &Path,
    modalities: &BTreeSet<Modality>,
    skip_cases: &BTreeSet<String>,
) -> Result<Vec<StemRecord>, PrepError> {
    if !root.is_dir() {
        log::warn!("数据集 {kind} 的根目录不存在, 跳过: {}", root.display());
        return Ok(Vec::new());
    }

    let desc = kind.descriptor();
    let case_dirs: Vec<String> = root
        .read_dir()?
        .filter_map_ok(|e| {
            let name = e.file_name().into_string().ok()?;
            (name.starts_with(desc.prefix)
                && !skip_cases.contains(&name)
                && e.path().is_dir())
            .then_some(name)
        })
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .sorted()
        .collect();

    let mut records = Vec::new();
    for case_id in &case_dirs {
        for &(modality, suffix) in desc.suffixes {
            if !modalities.contains(&modality) {
                continue;
            }
            let stem = format!("{case_id}{suffix}");
            // 扫描和后续的 manifest 生成共用同一个解析器, 保证
            // 同一条 (stem, 模态) 在一次运行内总是落到同一个路径.
            let exists = resolve::image_path(root, kind, case_id, &stem, modality)
                .is_some_and(|p| p.exists());
            if exists {
                records.push(StemRecord {
                    stem,
                    modality,
                    kind,
                });
            }
        }
    }

    log::info!(
        "数据集 {kind}: {} 个 case 目录, {} 条记录",
        case_dirs.len(),
        records.len()
    );
    Ok(records)
}
