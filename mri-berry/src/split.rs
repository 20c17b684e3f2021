//! 训练/测试划分策略.

use crate::case::CaseTable;
use std::collections::BTreeSet;

/// 划分策略. 作为配置项传入, 而不是写死在生成逻辑里.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SplitPolicy {
    /// 按比例划分: 每个数据集内 case id 排序后, 前 `floor(ratio * n)`
    /// 个进训练集, 其余进测试集, 再跨数据集取并.
    Proportional(f64),

    /// 全部进训练集, 测试集为空.
    AllTraining,
}

impl SplitPolicy {
    /// 构建按比例划分的策略.
    ///
    /// `ratio` 必须落在 `[0, 1]` 内, 否则返回 `None`.
    pub fn proportional(ratio: f64) -> Option<SplitPolicy> {
        (0.0..=1.0)
            .contains(&ratio)
            .then_some(SplitPolicy::Proportional(ratio))
    }
}

impl Default for SplitPolicy {
    fn default() -> Self {
        SplitPolicy::Proportional(crate::consts::DEFAULT_SPLIT_RATIO)
    }
}

/// 一次运行内固定不变的划分结果.
#[derive(Debug, Default)]
pub struct SplitAssignment {
    training: BTreeSet<String>,
    test: BTreeSet<String>,
}

impl SplitAssignment {
    /// 对聚合表应用划分策略.
    ///
    /// 划分是逐数据集进行的, 且只依赖排序后的 case id 列表,
    /// 不含任何随机性: 目录内容相同则划分结果相同.
    pub fn new(table: &CaseTable, policy: SplitPolicy) -> SplitAssignment {
        let mut ans = SplitAssignment::default();
        for kind in table.datasets() {
            let cases: Vec<&str> = table.cases_of(kind).collect();
            let split_point = match policy {
                // 绕过 [`SplitPolicy::proportional`] 构造的越界比例也不会越过
                // 集合边界: 负值经浮点转整数饱和截到 0, 上限截到 n.
                SplitPolicy::Proportional(ratio) => {
                    ((ratio * cases.len() as f64).floor() as usize).min(cases.len())
                }
                SplitPolicy::AllTraining => cases.len(),
            };
            ans.training
                .extend(cases[..split_point].iter().map(|s| s.to_string()));
            ans.test
                .extend(cases[split_point..].iter().map(|s| s.to_string()));
        }
        ans
    }

    /// case 是否属于训练集.
    #[inline]
    pub fn is_training(&self, case_id: &str) -> bool {
        self.training.contains(case_id)
    }

    /// case 是否属于测试集.
    #[inline]
    pub fn is_test(&self, case_id: &str) -> bool {
        self.test.contains(case_id)
    }

    /// 训练集 case 个数.
    #[inline]
    pub fn training_len(&self) -> usize {
        self.training.len()
    }

    /// 测试集 case 个数.
    #[inline]
    pub fn test_len(&self) -> usize {
        self.test.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::Modality;
    use crate::dataset::{DatasetKind, StemRecord};

    fn table_of(n: u32) -> CaseTable {
        let records = (1..=n).map(|i| StemRecord {
            stem: format!("BraTS2021_{i:05}_t1"),
            modality: Modality::T1,
            kind: DatasetKind::Brats2021,
        });
        CaseTable::from_records(records, &Default::default())
    }

    #[test]
    fn test_proportional_ten_cases() {
        let table = table_of(10);
        let split = SplitAssignment::new(&table, SplitPolicy::Proportional(0.8));
        assert_eq!(split.training_len(), 8);
        assert_eq!(split.test_len(), 2);
        // 训练集恰好是字典序最小的 8 个.
        for i in 1..=8 {
            assert!(split.is_training(&format!("BraTS2021_{i:05}")));
        }
        assert!(split.is_test("BraTS2021_00009"));
        assert!(split.is_test("BraTS2021_00010"));
    }

    #[test]
    fn test_proportional_rounds_down() {
        let split = SplitAssignment::new(&table_of(7), SplitPolicy::Proportional(0.8));
        // floor(0.8 * 7) == 5.
        assert_eq!(split.training_len(), 5);
        assert_eq!(split.test_len(), 2);
    }

    #[test]
    fn test_all_training() {
        let split = SplitAssignment::new(&table_of(4), SplitPolicy::AllTraining);
        assert_eq!(split.training_len(), 4);
        assert_eq!(split.test_len(), 0);
    }

    #[test]
    fn test_out_of_range_ratio_is_clamped() {
        // 直接构造 `Proportional` 可以绕过 `proportional` 的校验,
        // 划分本身必须对越界比例保持安全.
        let table = table_of(3);
        let split = SplitAssignment::new(&table, SplitPolicy::Proportional(1.5));
        assert_eq!(split.training_len(), 3);
        assert_eq!(split.test_len(), 0);

        let split = SplitAssignment::new(&table, SplitPolicy::Proportional(-0.5));
        assert_eq!(split.training_len(), 0);
        assert_eq!(split.test_len(), 3);
    }

    #[test]
    fn test_ratio_validation() {
        assert!(SplitPolicy::proportional(0.8).is_some());
        assert!(SplitPolicy::proportional(1.0).is_some());
        assert!(SplitPolicy::proportional(-0.1).is_none());
        assert!(SplitPolicy::proportional(1.1).is_none());
    }
}
