//! # 体系参数定义
//!
//! `list` / `plot` / `check` 共用的体系结构参数，构造 `StructureConfig`。
//!
//! ## 依赖关系
//! - 被 `cli/list.rs`, `cli/plot.rs`, `cli/check.rs` 展开使用
//! - 使用 `models/system.rs`, `config.rs`

use crate::config::{
    DEFAULT_ADDED_ATOM_PREFIX, DEFAULT_INTER_SITE_PREFIX, DEFAULT_NETWORK_ATOM_PREFIX,
    DEFAULT_NETWORK_SITE_PREFIX, DEFAULT_SYSTEM_NAME,
};
use crate::error::{AdpiError, Result};
use crate::models::{Selection, StructureConfig};

use clap::Args;
use std::path::PathBuf;

/// 体系结构参数
#[derive(Args, Debug, Clone)]
pub struct SystemArgs {
    /// System name, used as the data file prefix
    #[arg(short = 's', long, env = "ADPI_SYSTEM_NAME", default_value = DEFAULT_SYSTEM_NAME)]
    pub system_name: String,

    /// Directory containing the ADPI data files
    #[arg(short = 'd', long, env = "ADPI_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    // ─────────────────────────────────────────────────────────────
    // 名称列表（逗号分隔）
    // ─────────────────────────────────────────────────────────────
    /// Network site names, in index order (e.g. "Ti,N")
    #[arg(long, value_delimiter = ',')]
    pub network_sites: Vec<String>,

    /// Network atom names, in index order (e.g. "Ti,N")
    #[arg(long, value_delimiter = ',')]
    pub network_atoms: Vec<String>,

    /// Interstitial site names (e.g. "8c")
    #[arg(long, value_delimiter = ',')]
    pub inter_sites: Vec<String>,

    /// Added (dopant) atom names (e.g. "H")
    #[arg(long, value_delimiter = ',')]
    pub added_atoms: Vec<String>,

    // ─────────────────────────────────────────────────────────────
    // 数量（未给名称时生成默认名称）
    // ─────────────────────────────────────────────────────────────
    /// Number of network sites (default names site_1, site_2, ...)
    #[arg(long)]
    pub n_network_sites: Option<usize>,

    /// Number of network atoms (default names Al_1, Al_2, ...)
    #[arg(long)]
    pub n_network_atoms: Option<usize>,

    /// Number of interstitial sites (default names site_inter_1, ...)
    #[arg(long)]
    pub n_inter_sites: Option<usize>,

    /// Number of added atoms (default names H_1, H_2, ...)
    #[arg(long)]
    pub n_added_atoms: Option<usize>,

    // ─────────────────────────────────────────────────────────────
    // 缺陷类别开关
    // ─────────────────────────────────────────────────────────────
    /// Do not generate vacancy curves
    #[arg(long, default_value_t = false)]
    pub no_vacancies: bool,

    /// Do not generate substitution / interstitial curves
    #[arg(long, default_value_t = false)]
    pub no_substitutions: bool,

    /// Ignore interstitial sites
    #[arg(long, default_value_t = false)]
    pub no_inter_sites: bool,

    /// Ignore network atoms
    #[arg(long, default_value_t = false)]
    pub no_network_atoms: bool,

    /// Ignore added atoms
    #[arg(long, default_value_t = false)]
    pub no_added_atoms: bool,

    // ─────────────────────────────────────────────────────────────
    // 筛选
    // ─────────────────────────────────────────────────────────────
    /// Only plot curves involving these atoms (default: all)
    #[arg(long, value_delimiter = ',')]
    pub select_atoms: Vec<String>,

    /// Only plot curves involving these sites (default: all)
    #[arg(long, value_delimiter = ',')]
    pub select_sites: Vec<String>,
}

impl SystemArgs {
    /// 构造并校验体系结构描述
    pub fn to_config(&self) -> Result<StructureConfig> {
        let mut cfg = StructureConfig::new(self.system_name.trim());

        cfg.network_sites = resolve_names(
            &self.network_sites,
            self.n_network_sites,
            DEFAULT_NETWORK_SITE_PREFIX,
            "network sites",
        )?;
        cfg.network_atoms = resolve_names(
            &self.network_atoms,
            self.n_network_atoms,
            DEFAULT_NETWORK_ATOM_PREFIX,
            "network atoms",
        )?;
        cfg.interstitial_sites = resolve_names(
            &self.inter_sites,
            self.n_inter_sites,
            DEFAULT_INTER_SITE_PREFIX,
            "interstitial sites",
        )?;
        cfg.added_atoms = resolve_names(
            &self.added_atoms,
            self.n_added_atoms,
            DEFAULT_ADDED_ATOM_PREFIX,
            "added atoms",
        )?;

        cfg.include_vacancies = !self.no_vacancies;
        cfg.include_substitutions = !self.no_substitutions;
        cfg.include_interstitial_sites = !self.no_inter_sites;
        cfg.include_network_atoms = !self.no_network_atoms;
        cfg.include_added_atoms = !self.no_added_atoms;

        cfg.selection = Selection {
            atoms: clean(&self.select_atoms),
            sites: clean(&self.select_sites),
        };

        cfg.validate()?;
        Ok(cfg)
    }
}

/// 去掉首尾空白并丢弃空项
fn clean(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}

/// 名称列表与声明数量的合并
///
/// 只给数量时生成 `{prefix}_{i}`；两者都给时数量必须与名称个数一致。
fn resolve_names(
    names: &[String],
    count: Option<usize>,
    prefix: &str,
    what: &str,
) -> Result<Vec<String>> {
    let names = clean(names);
    match count {
        None => Ok(names),
        Some(n) if names.is_empty() => Ok((1..=n).map(|i| format!("{}_{}", prefix, i)).collect()),
        Some(n) if names.len() == n => Ok(names),
        Some(n) => Err(AdpiError::Config(format!(
            "{} {} declared, but {} name(s) were given",
            n,
            what,
            names.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        system: SystemArgs,
    }

    fn parse(args: &[&str]) -> SystemArgs {
        let mut full = vec!["adpiplot"];
        full.extend_from_slice(args);
        TestCli::parse_from(full).system
    }

    #[test]
    fn test_parse_name_lists() {
        let args = parse(&[
            "--system-name",
            "TiN_adpi",
            "--network-sites",
            "Ti,N",
            "--network-atoms",
            "Ti, N",
            "--inter-sites",
            "8c",
            "--added-atoms",
            "H",
        ]);
        let cfg = args.to_config().unwrap();
        assert_eq!(cfg.system_name, "TiN_adpi");
        assert_eq!(cfg.network_sites, vec!["Ti", "N"]);
        assert_eq!(cfg.network_atoms, vec!["Ti", "N"]);
        assert_eq!(cfg.interstitial_sites, vec!["8c"]);
        assert!(cfg.include_vacancies && cfg.include_added_atoms);
        assert!(cfg.selection.atoms.is_empty());
    }

    #[test]
    fn test_counts_generate_default_names() {
        let args = parse(&["--n-network-sites", "2", "--n-added-atoms", "1"]);
        let cfg = args.to_config().unwrap();
        assert_eq!(cfg.network_sites, vec!["site_1", "site_2"]);
        assert_eq!(cfg.added_atoms, vec!["H_1"]);
        assert!(cfg.network_atoms.is_empty());
    }

    #[test]
    fn test_count_mismatch_is_config_error() {
        let args = parse(&["--network-sites", "Ti", "--n-network-sites", "2"]);
        assert!(matches!(args.to_config(), Err(AdpiError::Config(_))));
    }

    #[test]
    fn test_toggles_and_selection() {
        let args = parse(&[
            "--network-sites",
            "Ti,N",
            "--no-vacancies",
            "--no-inter-sites",
            "--select-sites",
            "N",
        ]);
        let cfg = args.to_config().unwrap();
        assert!(!cfg.include_vacancies);
        assert!(!cfg.include_interstitial_sites);
        assert!(cfg.include_substitutions);
        assert_eq!(cfg.selection.sites, vec!["N"]);
    }

    #[test]
    fn test_too_many_names_rejected() {
        let many: Vec<String> = (1..=11).map(|i| format!("A{}", i)).collect();
        let joined = many.join(",");
        let args = parse(&["--added-atoms", &joined]);
        assert!(matches!(args.to_config(), Err(AdpiError::Config(_))));
    }
}
