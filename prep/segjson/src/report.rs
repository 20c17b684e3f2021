//! 运行结果报告.

use mri_berry::RunSummary;
use std::fmt;

/// 一次生成运行的汇总报告.
#[derive(Debug)]
pub struct RunReport {
    summary: RunSummary,
}

impl From<RunSummary> for RunReport {
    fn from(summary: RunSummary) -> Self {
        Self { summary }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;
        writeln!(f, "stem 记录总数:      {}", s.stems)?;
        writeln!(f, "case 总数:          {}", s.cases)?;
        writeln!(f, "训练条目 (dataset): {}", s.training_entries)?;
        writeln!(f, "测试条目 (dataset): {}", s.test_entries)?;
        writeln!(f, "训练 stem (split):  {}", s.training_stems)?;
        write!(f, "测试 stem (split):  {}", s.test_stems)?;
        if s.custom_entries > 0 {
            write!(f, "\ncustom 条目:        {}", s.custom_entries)?;
        }
        Ok(())
    }
}
