//! # 数据文件收集器
//!
//! 收集数据目录中符合 `{base}_*_r_*` 模式的文件，用于核对命名引擎的结果。
//!
//! ## 依赖关系
//! - 被 `commands/check.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{AdpiError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 数据文件收集器
pub struct DataFileCollector {
    /// 数据目录
    dir: PathBuf,
    /// 文件名模式
    pattern: String,
    /// 是否递归
    recursive: bool,
}

impl DataFileCollector {
    /// 创建收集器，默认匹配 `{base}_*_r_*`
    pub fn new(dir: &Path, base: &str) -> Self {
        Self {
            dir: dir.to_path_buf(),
            pattern: format!("{}_*_r_*", glob::Pattern::escape(base)),
            recursive: false,
        }
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件（按路径排序）
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Err(AdpiError::DirectoryNotFound {
                path: self.dir.display().to_string(),
            });
        }

        let glob_pattern = glob::Pattern::new(&self.pattern).map_err(|e| {
            AdpiError::InvalidArgument(format!("Invalid pattern '{}': {}", self.pattern, e))
        })?;

        let walker = if self.recursive {
            WalkDir::new(&self.dir)
        } else {
            WalkDir::new(&self.dir).max_depth(1)
        };

        let mut files: Vec<PathBuf> = walker
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .map_or(false, |name| glob_pattern.matches(name))
            })
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        Ok(files)
    }
}
