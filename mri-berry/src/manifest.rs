//! manifest 结构体与 JSON 持久化.
//!
//! 三份输出 (`case_dic.json`, `dataset.json`, `test_file.json`)
//! 的字段定义都集中在这里. 序列化统一走 [`write_json`]:
//! UTF-8, 两空格缩进, 键顺序稳定, 写前自动创建父目录.

use crate::error::PrepError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// manifest 条目的字段方案. 两种历史变体都受支持, 由配置显式选择.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SchemaKind {
    /// `{image, label1, label2, modal}`: `label1` 为 anatomy mask,
    /// `label2` 为 ground truth (缺失时为空串).
    ///
    /// 训练条目要求 anatomy mask 在磁盘上存在; 测试条目只要求图像存在.
    DualLabel,

    /// `{image, label, modal}`: `label` 为 ground truth.
    ///
    /// 训练条目要求 ground truth 在磁盘上存在; 测试条目只要求图像存在
    /// (此时 `label` 缺失记为空串). `modal` 为文件名中的小写模态标记
    /// (如 `flair`), 与 [`SchemaKind::DualLabel`] 的注册表名称不同.
    SegLabel,
}

/// `dataset.json` 中 `training`/`test` 序列的单个条目.
///
/// 两个变体分别对应 [`SchemaKind`] 的两种字段方案;
/// `#[serde(untagged)]` 使其序列化为平铺对象.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ManifestEntry {
    /// [`SchemaKind::DualLabel`] 方案.
    Dual {
        /// 图像路径.
        image: String,
        /// anatomy mask 路径.
        label1: String,
        /// ground truth 路径, 缺失时为空串.
        label2: String,
        /// 模态名.
        modal: String,
    },

    /// [`SchemaKind::SegLabel`] 方案.
    Seg {
        /// 图像路径.
        image: String,
        /// ground truth 路径, 缺失时为空串.
        label: String,
        /// 模态名.
        modal: String,
    },
}

/// `dataset.json` 的头部字段. 计数和条目序列之外的部分都来自这里.
#[derive(Debug, Clone)]
pub struct DatasetHeader {
    /// 数据集描述.
    pub description: String,

    /// 分割标签值 -> 含义.
    pub labels: BTreeMap<String, String>,

    /// 通道序号 -> 成像方式.
    pub modality: BTreeMap<String, String>,

    /// 数据集名称.
    pub name: String,

    /// 引用来源.
    pub reference: String,

    /// 版本号.
    pub release: String,

    /// 张量维度描述.
    pub tensor_image_size: String,
}

impl Default for DatasetHeader {
    fn default() -> Self {
        let labels = [("0", "background"), ("1", "1"), ("2", "2"), ("3", "3"), ("4", "4")]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        let modality = [("0".to_owned(), "MRI".to_owned())].into();
        DatasetHeader {
            description: "the training dataset".to_owned(),
            labels,
            modality,
            name: "dataset_name".to_owned(),
            reference: "no".to_owned(),
            release: "0.0".to_owned(),
            tensor_image_size: "4D".to_owned(),
        }
    }
}

/// `dataset.json` 的顶层结构.
///
/// 字段按输出文件的键顺序声明. `numTraining`/`numTest`
/// 只能从条目序列派生, 因此不提供直接构造方式.
#[derive(Debug, Serialize)]
pub struct DatasetManifest {
    description: String,
    labels: BTreeMap<String, String>,
    modality: BTreeMap<String, String>,
    name: String,
    #[serde(rename = "numTest")]
    num_test: usize,
    #[serde(rename = "numTraining")]
    num_training: usize,
    reference: String,
    release: String,
    #[serde(rename = "tensorImageSize")]
    tensor_image_size: String,
    test: Vec<ManifestEntry>,
    training: Vec<ManifestEntry>,
}

impl DatasetManifest {
    /// 从头部字段和条目序列组装. 计数在这里派生.
    pub fn new(
        header: DatasetHeader,
        training: Vec<ManifestEntry>,
        test: Vec<ManifestEntry>,
    ) -> DatasetManifest {
        DatasetManifest {
            description: header.description,
            labels: header.labels,
            modality: header.modality,
            name: header.name,
            num_test: test.len(),
            num_training: training.len(),
            reference: header.reference,
            release: header.release,
            tensor_image_size: header.tensor_image_size,
            test,
            training,
        }
    }

    /// 训练条目数.
    #[inline]
    pub fn num_training(&self) -> usize {
        self.num_training
    }

    /// 测试条目数.
    #[inline]
    pub fn num_test(&self) -> usize {
        self.num_test
    }

    /// 训练条目.
    #[inline]
    pub fn training(&self) -> &[ManifestEntry] {
        &self.training
    }

    /// 测试条目.
    #[inline]
    pub fn test(&self) -> &[ManifestEntry] {
        &self.test
    }
}

/// `case_dic.json`: 模态名 -> 该模态下观察到的全部 stem.
pub type CaseDic = BTreeMap<&'static str, Vec<String>>;

/// `brats_custom_format.json` 的单个条目.
///
/// 该文件是不带标签、不做划分的平铺数组, 每条只含图像路径和
/// 注册表模态名, 供不需要分割标签的下游流程直接消费.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CustomEntry {
    /// 图像路径.
    pub image: String,

    /// 模态名.
    pub modal: String,
}

/// `test_file.json` 的顶层结构: 不带路径的划分结果镜像.
#[derive(Debug, Serialize)]
pub struct TestFile {
    /// 训练集 stem 序列.
    pub training: Vec<String>,

    /// 验证部分.
    pub validation: Validation,
}

/// `test_file.json` 的 `validation` 字段.
#[derive(Debug, Serialize)]
pub struct Validation {
    /// 测试集 stem 序列.
    pub test: Vec<String>,
}

/// 把任意可序列化结构写成 JSON 文件.
///
/// 1. 父目录不存在时自动创建;
/// 2. 两空格缩进;
/// 3. 整文件重写, 重复运行在输入不变时字节一致.
pub fn write_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<(), PrepError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut w = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut w, value)?;
    w.flush()?;
    log::info!("已生成: {}", path.display());
    Ok(())
}
