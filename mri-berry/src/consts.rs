//! 通用常量与模态定义.

use std::collections::BTreeSet;

/// 默认训练集划分比例 (80% 训练, 20% 测试).
pub const DEFAULT_SPLIT_RATIO: f64 = 0.8;

/// anatomy mask 文件名的固定后缀.
///
/// 推理系统输出的 anatomy mask 命名为 `{case_id}{模态后缀}_ana.nii.gz`,
/// 其中模态后缀与图像文件名后缀共用同一张表. 若其中一方的命名约定发生变化,
/// 另一方必须同步修改.
pub const ANATOMY_MASK_TAIL: &str = "_ana.nii.gz";

/// MRI 采集模态.
///
/// 变体按模态名称字典序声明, 因此 `#[derive(Ord)]`
/// 的顺序与按名称排序的顺序一致. 新增变体时必须保持该不变式.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Modality {
    /// 弥散加权成像 (`"DWI"`).
    Dwi,

    /// T1 增强 (`"T1C"`).
    T1c,

    /// T1 加权成像 (`"T1WI"`).
    T1,

    /// T2 液体衰减反转恢复 (`"T2FLAIR"`).
    T2Flair,

    /// T2 加权成像 (`"T2WI"`).
    T2,
}

impl Modality {
    /// 模态在 manifest 中使用的名称.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Modality::Dwi => "DWI",
            Modality::T1c => "T1C",
            Modality::T1 => "T1WI",
            Modality::T2Flair => "T2FLAIR",
            Modality::T2 => "T2WI",
        }
    }

    /// 所有已知模态, 按名称字典序排列.
    #[inline]
    pub const fn all() -> [Modality; 5] {
        [
            Modality::Dwi,
            Modality::T1c,
            Modality::T1,
            Modality::T2Flair,
            Modality::T2,
        ]
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 默认启用的模态集合.
///
/// T1C 在各数据集的后缀表中有定义, 但默认不启用,
/// 与推理管线目前消费的四个模态保持一致.
pub fn default_modalities() -> BTreeSet<Modality> {
    [Modality::Dwi, Modality::T1, Modality::T2, Modality::T2Flair]
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::Modality;

    #[test]
    fn test_modality_order_matches_name_order() {
        let names: Vec<&str> = Modality::all().iter().map(|m| m.name()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_default_modalities_excludes_t1c() {
        let set = super::default_modalities();
        assert_eq!(set.len(), 4);
        assert!(!set.contains(&Modality::T1c));
    }
}
