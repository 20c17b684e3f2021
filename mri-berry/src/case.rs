//! case 聚合.
//!
//! 把扫描得到的 (stem, 模态, 数据集) 记录按解析出的 case id 分组,
//! 并维护每个数据集下排序去重后的 case id 集合.

use crate::dataset::{DatasetKind, StemRecord};
use std::collections::{BTreeMap, BTreeSet};

/// 聚合后的 case 索引表.
///
/// 两个内部映射都基于 BTree 容器, 因此迭代顺序即排序顺序,
/// 在目录内容不变时每次运行的结果完全一致.
#[derive(Debug, Default)]
pub struct CaseTable {
    case_to_stems: BTreeMap<String, Vec<StemRecord>>,
    dataset_cases: BTreeMap<DatasetKind, BTreeSet<String>>,
}

impl CaseTable {
    /// 从扫描记录构建聚合表.
    ///
    /// 1. 后缀不匹配 (case id 无法解析) 的记录被静默丢弃;
    /// 2. skip 集合中的 case id 被整体剔除, 无论记录来自哪个模态;
    /// 3. 每个 case 的记录列表按 (模态名, stem) 排序.
    pub fn from_records<I: IntoIterator<Item = StemRecord>>(
        records: I,
        skip_cases: &BTreeSet<String>,
    ) -> CaseTable {
        let mut table = CaseTable::default();
        for record in records {
            let Some(case_id) = record.kind.case_id_of(&record.stem, record.modality) else {
                log::debug!("stem 后缀不匹配, 丢弃: {}", record.stem);
                continue;
            };
            if skip_cases.contains(case_id) {
                continue;
            }
            let case_id = case_id.to_owned();
            table
                .dataset_cases
                .entry(record.kind)
                .or_default()
                .insert(case_id.clone());
            table.case_to_stems.entry(case_id).or_default().push(record);
        }

        for stems in table.case_to_stems.values_mut() {
            stems.sort_by(|a, b| {
                (a.modality.name(), a.stem.as_str()).cmp(&(b.modality.name(), b.stem.as_str()))
            });
        }
        table
    }

    /// 表中是否没有任何 case.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.case_to_stems.is_empty()
    }

    /// 全部 case 个数 (跨数据集).
    #[inline]
    pub fn len(&self) -> usize {
        self.case_to_stems.len()
    }

    /// 观察到记录的数据集, 按名称排序.
    pub fn datasets(&self) -> impl Iterator<Item = DatasetKind> + '_ {
        self.dataset_cases.keys().copied()
    }

    /// 某数据集下排序去重后的 case id 集合.
    pub fn cases_of(&self, kind: DatasetKind) -> impl Iterator<Item = &str> {
        self.dataset_cases
            .get(&kind)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// 某数据集的 case 个数.
    pub fn case_count_of(&self, kind: DatasetKind) -> usize {
        self.dataset_cases.get(&kind).map_or(0, BTreeSet::len)
    }

    /// 某个 case 的全部记录, 按 (模态名, stem) 排序.
    pub fn stems_of(&self, case_id: &str) -> &[StemRecord] {
        self.case_to_stems
            .get(case_id)
            .map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::Modality;

    fn rec(stem: &str, modality: Modality, kind: DatasetKind) -> StemRecord {
        StemRecord {
            stem: stem.to_owned(),
            modality,
            kind,
        }
    }

    #[test]
    fn test_group_and_dedup() {
        let table = CaseTable::from_records(
            [
                rec("BraTS20_Training_002_t2", Modality::T2, DatasetKind::Brats2020),
                rec("BraTS20_Training_001_flair", Modality::T2Flair, DatasetKind::Brats2020),
                rec("BraTS20_Training_001_t1", Modality::T1, DatasetKind::Brats2020),
                // 重复记录只计一个 case.
                rec("BraTS20_Training_001_t1", Modality::T1, DatasetKind::Brats2020),
            ],
            &BTreeSet::new(),
        );
        assert_eq!(table.len(), 2);
        let cases: Vec<&str> = table.cases_of(DatasetKind::Brats2020).collect();
        assert_eq!(cases, ["BraTS20_Training_001", "BraTS20_Training_002"]);
    }

    #[test]
    fn test_stems_sorted_by_modality_name() {
        let table = CaseTable::from_records(
            [
                rec("BraTS2021_00001_t2", Modality::T2, DatasetKind::Brats2021),
                rec("BraTS2021_00001_flair", Modality::T2Flair, DatasetKind::Brats2021),
                rec("BraTS2021_00001_t1", Modality::T1, DatasetKind::Brats2021),
            ],
            &BTreeSet::new(),
        );
        let modalities: Vec<&str> = table
            .stems_of("BraTS2021_00001")
            .iter()
            .map(|r| r.modality.name())
            .collect();
        // "T1WI" < "T2FLAIR" < "T2WI".
        assert_eq!(modalities, ["T1WI", "T2FLAIR", "T2WI"]);
    }

    #[test]
    fn test_skip_case_dropped_for_every_modality() {
        let skip: BTreeSet<String> = ["BraTS20_Training_355".to_owned()].into();
        let table = CaseTable::from_records(
            [
                rec("BraTS20_Training_355_t1", Modality::T1, DatasetKind::Brats2020),
                rec("BraTS20_Training_355_flair", Modality::T2Flair, DatasetKind::Brats2020),
                rec("BraTS20_Training_354_t1", Modality::T1, DatasetKind::Brats2020),
            ],
            &skip,
        );
        assert_eq!(table.len(), 1);
        assert!(table.stems_of("BraTS20_Training_355").is_empty());
    }

    #[test]
    fn test_unresolvable_stem_dropped_silently() {
        let table = CaseTable::from_records(
            [
                // BraTS-MEN 的 T1 后缀是 `-t1n`, 该 stem 无法解析.
                rec("BraTS-MEN-00231-000_t1", Modality::T1, DatasetKind::BratsMen),
            ],
            &BTreeSet::new(),
        );
        assert!(table.is_empty());
    }
}
