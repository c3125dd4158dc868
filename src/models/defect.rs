//! # 缺陷条目数据模型
//!
//! 命名引擎的输出：每条曲线对应一个 (文件名, 标签) 对。
//!
//! ## 依赖关系
//! - 被 `naming/`, `batch/`, `commands/` 使用
//! - 使用 `serde` 导出 CSV

use serde::Serialize;

/// 缺陷类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DefectKind {
    /// 网络位点空位 `{base}_L_r_{k}`
    Vacancy,
    /// 原子 i 占据位点 k (i ≠ k)
    Substitution,
    /// 添加原子占据间隙位点（允许 i == k）
    Interstitial,
}

impl std::fmt::Display for DefectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefectKind::Vacancy => write!(f, "vacancy"),
            DefectKind::Substitution => write!(f, "substitution"),
            DefectKind::Interstitial => write!(f, "interstitial"),
        }
    }
}

/// 文件名中的编号部分：`L` 或原子编号 i，以及位点编号 k
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefectKey {
    /// None 表示空位 (`L`)
    pub atom_index: Option<usize>,
    pub site_index: usize,
}

impl DefectKey {
    pub fn vacancy(site_index: usize) -> Self {
        DefectKey {
            atom_index: None,
            site_index,
        }
    }

    pub fn placement(atom_index: usize, site_index: usize) -> Self {
        DefectKey {
            atom_index: Some(atom_index),
            site_index,
        }
    }

    /// 生成文件名 `{base}_{L|i}_r_{k}`
    pub fn file_name(&self, base: &str) -> String {
        match self.atom_index {
            None => format!("{}_L_r_{}", base, self.site_index),
            Some(i) => format!("{}_{}_r_{}", base, i, self.site_index),
        }
    }
}

/// 一条待读取的曲线
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefectEntry {
    pub file_name: String,
    /// 化学记号，如 `V_{Ti}`、`H_{8c}`
    pub label: String,
    pub kind: DefectKind,
    /// 空位时为 None
    pub atom: Option<String>,
    pub site: String,
    #[serde(skip)]
    pub key: DefectKey,
}

impl DefectEntry {
    pub fn vacancy(base: &str, site_index: usize, site: &str) -> Self {
        let key = DefectKey::vacancy(site_index);
        DefectEntry {
            file_name: key.file_name(base),
            label: format!("V_{{{}}}", site),
            kind: DefectKind::Vacancy,
            atom: None,
            site: site.to_string(),
            key,
        }
    }

    pub fn placement(
        base: &str,
        kind: DefectKind,
        atom_index: usize,
        atom: &str,
        site_index: usize,
        site: &str,
    ) -> Self {
        let key = DefectKey::placement(atom_index, site_index);
        DefectEntry {
            file_name: key.file_name(base),
            label: format!("{}_{{{}}}", atom, site),
            kind,
            atom: Some(atom.to_string()),
            site: site.to_string(),
            key,
        }
    }
}
