//! 程序运行函数.

use crate::report::RunReport;
use mri_berry::{generate, DatasetKind, PrepConfig, PrepError, SchemaKind, SplitPolicy};
use std::env;
use utils::roots;

/// 从环境变量组装配置并执行一次完整生成.
///
/// 可选环境变量:
///
/// 1. `$MRI_SPLIT` = `all-training` 时全部 case 进训练集,
///   否则按默认比例 80/20 划分;
/// 2. `$MRI_SCHEMA` = `seg-label` 时输出 `{image, label, modal}` 方案,
///   否则输出 `{image, label1, label2, modal}` 方案;
/// 3. `$MRI_CUSTOM_FORMAT` = `1` 时额外输出 `brats_custom_format.json`;
/// 4. 各目录的环境变量见 [`utils::roots`].
pub fn run() -> Result<RunReport, PrepError> {
    let mut config = PrepConfig::new(
        roots::output_dir_from_env_or_home(),
        roots::mask_dir_from_env_or_home(),
    );
    for kind in DatasetKind::all() {
        let root = roots::dataset_dir_from_env_or_home(kind);
        log::info!("数据集 {kind}: {}", root.display());
        config = config.with_root(kind, root);
    }

    if env_flag("MRI_SPLIT", "all-training") {
        config.split = SplitPolicy::AllTraining;
    }
    if env_flag("MRI_SCHEMA", "seg-label") {
        config.schema = SchemaKind::SegLabel;
    }
    if env_flag("MRI_CUSTOM_FORMAT", "1") {
        config.custom_format = true;
    }

    generate::run(&config).map(RunReport::from)
}

fn env_flag(var: &str, value: &str) -> bool {
    env::var(var).is_ok_and(|v| v == value)
}
