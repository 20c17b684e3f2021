//! manifest 生成工具依赖的通用组件.

pub mod roots;

const SEP: &str = "--------------------------------------------------------";

/// 简单分隔线.
#[inline]
pub fn sep() {
    println!("{SEP}");
}
