//! # 体系结构描述
//!
//! 描述一次曲线生成所需的化学/结构信息：网络位点、网络原子、间隙位点、
//! 添加原子，以及各类缺陷的开关。
//!
//! 每次生成时由命令行参数重新构造，交给命名引擎后不再修改。
//!
//! ## 依赖关系
//! - 被 `naming/`, `commands/` 使用
//! - 使用 `config.rs` 的数量上限

use crate::config::{MAX_ATOMS, MAX_SITES};
use crate::error::{AdpiError, Result};

/// 名称来源类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    NetworkSite,
    InterstitialSite,
    NetworkAtom,
    AddedAtom,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::NetworkSite => write!(f, "network site"),
            Origin::InterstitialSite => write!(f, "interstitial site"),
            Origin::NetworkAtom => write!(f, "network atom"),
            Origin::AddedAtom => write!(f, "added atom"),
        }
    }
}

/// 带逻辑编号的名称（编号从 1 开始，即文件名中的 i / k）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedName {
    pub index: usize,
    pub name: String,
    pub origin: Origin,
}

/// 用户对原子/位点的筛选，空列表表示不限制
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub atoms: Vec<String>,
    pub sites: Vec<String>,
}

impl Selection {
    pub fn allows_atom(&self, name: &str) -> bool {
        self.atoms.is_empty() || self.atoms.iter().any(|a| a == name)
    }

    pub fn allows_site(&self, name: &str) -> bool {
        self.sites.is_empty() || self.sites.iter().any(|s| s == name)
    }
}

/// 体系结构描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureConfig {
    /// 数据文件名前缀 `{base}`
    pub system_name: String,
    pub network_sites: Vec<String>,
    pub network_atoms: Vec<String>,
    pub interstitial_sites: Vec<String>,
    pub added_atoms: Vec<String>,

    pub include_vacancies: bool,
    pub include_substitutions: bool,
    pub include_interstitial_sites: bool,
    pub include_network_atoms: bool,
    pub include_added_atoms: bool,

    pub selection: Selection,
}

impl StructureConfig {
    /// 创建所有开关均打开的配置
    pub fn new(system_name: &str) -> Self {
        StructureConfig {
            system_name: system_name.to_string(),
            network_sites: Vec::new(),
            network_atoms: Vec::new(),
            interstitial_sites: Vec::new(),
            added_atoms: Vec::new(),
            include_vacancies: true,
            include_substitutions: true,
            include_interstitial_sites: true,
            include_network_atoms: true,
            include_added_atoms: true,
            selection: Selection::default(),
        }
    }

    /// 参与置换的原子表：网络原子（若启用）在前，添加原子（若启用）在后
    pub fn indexed_atoms(&self) -> Vec<IndexedName> {
        let mut atoms: Vec<(&String, Origin)> = Vec::new();
        if self.include_network_atoms {
            atoms.extend(self.network_atoms.iter().map(|a| (a, Origin::NetworkAtom)));
        }
        if self.include_added_atoms {
            atoms.extend(self.added_atoms.iter().map(|a| (a, Origin::AddedAtom)));
        }
        number(atoms)
    }

    /// 位点表：网络位点在前，间隙位点（若启用）在后
    pub fn indexed_sites(&self) -> Vec<IndexedName> {
        let mut sites: Vec<(&String, Origin)> = self
            .network_sites
            .iter()
            .map(|s| (s, Origin::NetworkSite))
            .collect();
        if self.include_interstitial_sites {
            sites.extend(
                self.interstitial_sites
                    .iter()
                    .map(|s| (s, Origin::InterstitialSite)),
            );
        }
        number(sites)
    }

    /// 网络位点表（空位只定义在网络位点上）
    pub fn indexed_network_sites(&self) -> Vec<IndexedName> {
        number(
            self.network_sites
                .iter()
                .map(|s| (s, Origin::NetworkSite))
                .collect(),
        )
    }

    /// 间隙位点的绝对编号：网络位点数 + 局部位置
    pub fn indexed_interstitial_sites(&self) -> Vec<IndexedName> {
        let offset = self.network_sites.len();
        self.interstitial_sites
            .iter()
            .enumerate()
            .map(|(i, s)| IndexedName {
                index: offset + i + 1,
                name: s.clone(),
                origin: Origin::InterstitialSite,
            })
            .collect()
    }

    /// 添加原子的绝对编号：网络原子数 + 局部位置（与网络原子开关无关）
    pub fn indexed_added_atoms(&self) -> Vec<IndexedName> {
        let offset = self.network_atoms.len();
        self.added_atoms
            .iter()
            .enumerate()
            .map(|(i, a)| IndexedName {
                index: offset + i + 1,
                name: a.clone(),
                origin: Origin::AddedAtom,
            })
            .collect()
    }

    /// 数据文件中化学势/分数列对应的原子名：网络原子在前，添加原子在后
    pub fn species_names(&self) -> Vec<String> {
        self.network_atoms
            .iter()
            .chain(self.added_atoms.iter())
            .cloned()
            .collect()
    }

    /// 检查配置一致性，在任何文件访问之前调用
    pub fn validate(&self) -> Result<()> {
        if self.system_name.trim().is_empty() {
            return Err(AdpiError::Config("system name must not be empty".into()));
        }

        let groups = [
            ("network sites", &self.network_sites, MAX_SITES),
            ("network atoms", &self.network_atoms, MAX_ATOMS),
            ("interstitial sites", &self.interstitial_sites, MAX_SITES),
            ("added atoms", &self.added_atoms, MAX_ATOMS),
        ];

        for (what, names, max) in groups {
            if names.len() > max {
                return Err(AdpiError::Config(format!(
                    "too many {} ({} given, at most {})",
                    what,
                    names.len(),
                    max
                )));
            }
            if let Some(pos) = names.iter().position(|n| n.trim().is_empty()) {
                return Err(AdpiError::Config(format!(
                    "{} #{} has an empty name",
                    what,
                    pos + 1
                )));
            }
            if names.iter().any(|n| n.chars().any(char::is_whitespace)) {
                return Err(AdpiError::Config(format!(
                    "{} names must not contain whitespace",
                    what
                )));
            }
        }

        Ok(())
    }

    /// 同时出现在原子类别之间或位点类别之间的重复名称
    ///
    /// 重复名称是允许的，但生成的标签会产生歧义。
    pub fn duplicate_names(&self) -> Vec<String> {
        let mut dups = Vec::new();
        for pair in [
            (&self.network_atoms, &self.added_atoms),
            (&self.network_sites, &self.interstitial_sites),
        ] {
            for name in pair.0 {
                if pair.1.contains(name) && !dups.contains(name) {
                    dups.push(name.clone());
                }
            }
        }
        dups
    }
}

fn number(names: Vec<(&String, Origin)>) -> Vec<IndexedName> {
    names
        .into_iter()
        .enumerate()
        .map(|(i, (name, origin))| IndexedName {
            index: i + 1,
            name: name.clone(),
            origin,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tin_h() -> StructureConfig {
        let mut cfg = StructureConfig::new("TiN_adpi");
        cfg.network_sites = vec!["Ti".into(), "N".into()];
        cfg.network_atoms = vec!["Ti".into(), "N".into()];
        cfg.interstitial_sites = vec!["8c".into()];
        cfg.added_atoms = vec!["H".into()];
        cfg
    }

    #[test]
    fn test_indexed_tables_concatenation_order() {
        let cfg = tin_h();

        let atoms = cfg.indexed_atoms();
        let names: Vec<_> = atoms.iter().map(|a| (a.index, a.name.as_str())).collect();
        assert_eq!(names, vec![(1, "Ti"), (2, "N"), (3, "H")]);
        assert_eq!(atoms[2].origin, Origin::AddedAtom);

        let sites = cfg.indexed_sites();
        let names: Vec<_> = sites.iter().map(|s| (s.index, s.name.as_str())).collect();
        assert_eq!(names, vec![(1, "Ti"), (2, "N"), (3, "8c")]);
    }

    #[test]
    fn test_toggles_shrink_tables() {
        let mut cfg = tin_h();
        cfg.include_network_atoms = false;
        cfg.include_interstitial_sites = false;

        let atoms = cfg.indexed_atoms();
        assert_eq!(atoms.len(), 1);
        assert_eq!(atoms[0].index, 1);
        assert_eq!(atoms[0].name, "H");

        assert_eq!(cfg.indexed_sites().len(), 2);
        // 添加原子的绝对编号不随网络原子开关变化
        assert_eq!(cfg.indexed_added_atoms()[0].index, 3);
    }

    #[test]
    fn test_species_names_ignore_toggles() {
        let mut cfg = tin_h();
        cfg.include_added_atoms = false;
        assert_eq!(cfg.species_names(), vec!["Ti", "N", "H"]);
    }

    #[test]
    fn test_validate_rejects_too_many_sites() {
        let mut cfg = tin_h();
        cfg.network_sites = (1..=11).map(|i| format!("s{}", i)).collect();
        assert!(matches!(cfg.validate(), Err(AdpiError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut cfg = tin_h();
        cfg.added_atoms = vec!["H".into(), " ".into()];
        assert!(matches!(cfg.validate(), Err(AdpiError::Config(_))));
        assert!(tin_h().validate().is_ok());
    }

    #[test]
    fn test_duplicate_names() {
        let mut cfg = tin_h();
        assert!(cfg.duplicate_names().is_empty());
        cfg.added_atoms.push("N".into());
        assert_eq!(cfg.duplicate_names(), vec!["N".to_string()]);
    }

    #[test]
    fn test_selection_empty_means_all() {
        let sel = Selection::default();
        assert!(sel.allows_atom("anything"));
        let sel = Selection {
            atoms: vec!["H".into()],
            sites: vec![],
        };
        assert!(sel.allows_atom("H"));
        assert!(!sel.allows_atom("Ti"));
        assert!(sel.allows_site("8c"));
    }
}
