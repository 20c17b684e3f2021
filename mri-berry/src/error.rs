//! 运行时错误.

use thiserror::Error;

/// manifest 生成过程的运行时错误.
///
/// 单条记录级别的问题 (后缀不匹配、图像缺失、mask 缺失)
/// 不是错误, 会按过滤规则静默丢弃; 这里只建模导致整次运行终止的情况.
#[derive(Debug, Error)]
pub enum PrepError {
    /// 扫描全部数据集后没有得到任何 case.
    ///
    /// 此时不会写出任何 manifest 文件.
    #[error("扫描结束后未发现任何 case, 请检查数据集目录与文件名约定")]
    EmptyCaseTable,

    /// 底层 I/O 错误.
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 序列化错误.
    #[error("JSON 序列化错误: {0}")]
    Json(#[from] serde_json::Error),
}
