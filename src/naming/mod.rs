//! # 缺陷命名引擎
//!
//! 将 `StructureConfig` 转换为有序的 (文件名, 标签) 列表，
//! 即一次绘图需要尝试读取的全部曲线。
//!
//! ## 生成顺序
//! 1. 空位：网络位点 k → `{base}_L_r_{k}`
//! 2. 置换：位点 k（外层）× 原子 i（内层），i ≠ k → `{base}_{i}_r_{k}`
//! 3. 间隙自占位：间隙位点 × 添加原子，允许 i == k
//!
//! 下游按此顺序循环分配颜色和线型，顺序必须稳定。
//! 纯函数，不访问文件系统。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/system.rs`, `models/defect.rs`
//! - 使用 `regex` 解析文件名

use crate::models::{DefectEntry, DefectKey, DefectKind, StructureConfig};

use regex::Regex;

/// 生成全部缺陷条目
pub fn generate(config: &StructureConfig) -> Vec<DefectEntry> {
    let base = config.system_name.as_str();
    let selection = &config.selection;
    let mut entries = Vec::new();

    // 空位只定义在网络位点上
    if config.include_vacancies && config.include_network_atoms {
        for site in config.indexed_network_sites() {
            if selection.allows_site(&site.name) {
                entries.push(DefectEntry::vacancy(base, site.index, &site.name));
            }
        }
    }

    if !config.include_substitutions {
        return entries;
    }

    let atoms = config.indexed_atoms();
    let sites = config.indexed_sites();

    if !atoms.is_empty() && !sites.is_empty() {
        for site in &sites {
            if !selection.allows_site(&site.name) {
                continue;
            }
            for atom in &atoms {
                if atom.index != site.index && selection.allows_atom(&atom.name) {
                    entries.push(DefectEntry::placement(
                        base,
                        DefectKind::Substitution,
                        atom.index,
                        &atom.name,
                        site.index,
                        &site.name,
                    ));
                }
            }
        }
    }

    // 添加原子占据间隙位点：编号相同也保留
    if config.include_added_atoms && config.include_interstitial_sites {
        let added = config.indexed_added_atoms();
        for site in config.indexed_interstitial_sites() {
            if !selection.allows_site(&site.name) {
                continue;
            }
            for atom in &added {
                if selection.allows_atom(&atom.name) {
                    entries.push(DefectEntry::placement(
                        base,
                        DefectKind::Interstitial,
                        atom.index,
                        &atom.name,
                        site.index,
                        &site.name,
                    ));
                }
            }
        }
    }

    entries
}

/// 反向解析文件名 `{base}_{L|i}_r_{k}`，不符合命名规则时返回 None
pub fn parse_file_name(base: &str, file_name: &str) -> Option<DefectKey> {
    let pattern = format!(r"^{}_(L|\d+)_r_(\d+)$", regex::escape(base));
    let re = Regex::new(&pattern).ok()?;
    let caps = re.captures(file_name)?;

    let site_index: usize = caps[2].parse().ok()?;
    match &caps[1] {
        "L" => Some(DefectKey::vacancy(site_index)),
        i => Some(DefectKey::placement(i.parse().ok()?, site_index)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Selection;

    fn tin_h() -> StructureConfig {
        let mut cfg = StructureConfig::new("TiN_adpi");
        cfg.network_sites = vec!["Ti".into(), "N".into()];
        cfg.network_atoms = vec!["Ti".into(), "N".into()];
        cfg.interstitial_sites = vec!["8c".into()];
        cfg.added_atoms = vec!["H".into()];
        cfg
    }

    fn names(entries: &[DefectEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.file_name.as_str()).collect()
    }

    #[test]
    fn test_tin_h_full_sequence() {
        let entries = generate(&tin_h());
        assert_eq!(
            names(&entries),
            vec![
                "TiN_adpi_L_r_1",
                "TiN_adpi_L_r_2",
                "TiN_adpi_2_r_1",
                "TiN_adpi_3_r_1",
                "TiN_adpi_1_r_2",
                "TiN_adpi_3_r_2",
                "TiN_adpi_1_r_3",
                "TiN_adpi_2_r_3",
                "TiN_adpi_3_r_3",
            ]
        );

        let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels[0], "V_{Ti}");
        assert_eq!(labels[1], "V_{N}");
        assert_eq!(labels[2], "N_{Ti}");
        assert_eq!(labels[8], "H_{8c}");
        assert_eq!(entries[8].kind, DefectKind::Interstitial);
    }

    #[test]
    fn test_one_vacancy_per_network_site_in_order() {
        let mut cfg = tin_h();
        cfg.network_sites = vec!["a".into(), "b".into(), "c".into()];
        let vacancies: Vec<_> = generate(&cfg)
            .into_iter()
            .filter(|e| e.kind == DefectKind::Vacancy)
            .collect();
        assert_eq!(
            names(&vacancies),
            vec!["TiN_adpi_L_r_1", "TiN_adpi_L_r_2", "TiN_adpi_L_r_3"]
        );
    }

    #[test]
    fn test_vacancies_never_on_interstitial_sites() {
        let entries = generate(&tin_h());
        assert!(entries
            .iter()
            .filter(|e| e.kind == DefectKind::Vacancy)
            .all(|e| e.key.site_index <= 2));
    }

    #[test]
    fn test_substitutions_exclude_same_index() {
        let mut cfg = tin_h();
        cfg.network_atoms.push("Ti2".into());
        cfg.interstitial_sites.push("4b".into());
        for e in generate(&cfg) {
            if e.kind == DefectKind::Substitution {
                assert_ne!(e.key.atom_index, Some(e.key.site_index));
            }
        }
    }

    #[test]
    fn test_vacancies_require_network_atoms() {
        let mut cfg = tin_h();
        cfg.include_network_atoms = false;
        let entries = generate(&cfg);
        assert!(entries.iter().all(|e| e.kind != DefectKind::Vacancy));
        // 只剩 H：编号 1，与位点 1 相同的组合被排除
        assert_eq!(
            names(&entries),
            vec!["TiN_adpi_1_r_2", "TiN_adpi_1_r_3", "TiN_adpi_3_r_3"]
        );
    }

    #[test]
    fn test_no_vacancies_toggle() {
        let mut cfg = tin_h();
        cfg.include_vacancies = false;
        assert_eq!(generate(&cfg).len(), 7);
    }

    #[test]
    fn test_substitutions_off_disables_interstitials() {
        let mut cfg = tin_h();
        cfg.include_substitutions = false;
        assert_eq!(names(&generate(&cfg)), vec!["TiN_adpi_L_r_1", "TiN_adpi_L_r_2"]);
    }

    #[test]
    fn test_interstitial_sites_disabled() {
        let mut cfg = tin_h();
        cfg.include_interstitial_sites = false;
        let entries = generate(&cfg);
        assert!(entries.iter().all(|e| e.site != "8c"));
        assert!(entries.iter().all(|e| e.kind != DefectKind::Interstitial));
    }

    #[test]
    fn test_empty_interstitials_or_added_atoms() {
        let mut cfg = tin_h();
        cfg.added_atoms.clear();
        assert!(generate(&cfg)
            .iter()
            .all(|e| e.kind != DefectKind::Interstitial));

        let mut cfg = tin_h();
        cfg.interstitial_sites.clear();
        assert!(generate(&cfg)
            .iter()
            .all(|e| e.kind != DefectKind::Interstitial));
    }

    #[test]
    fn test_zero_network_sites() {
        let mut cfg = tin_h();
        cfg.network_sites.clear();
        let entries = generate(&cfg);
        assert!(entries.iter().all(|e| e.kind != DefectKind::Vacancy));
        // 8c 变为位点 1：Ti(1) 被排除，N(2)、H(3) 保留；间隙编号 0 + 1 = 1
        assert_eq!(
            names(&entries),
            vec!["TiN_adpi_2_r_1", "TiN_adpi_3_r_1", "TiN_adpi_3_r_1"]
        );
    }

    #[test]
    fn test_selection_filter() {
        let mut cfg = tin_h();
        cfg.selection = Selection {
            atoms: vec!["H".into()],
            sites: vec!["8c".into(), "Ti".into()],
        };
        assert_eq!(
            names(&generate(&cfg)),
            vec!["TiN_adpi_L_r_1", "TiN_adpi_3_r_1", "TiN_adpi_3_r_3"]
        );
    }

    #[test]
    fn test_generate_is_idempotent() {
        let cfg = tin_h();
        assert_eq!(generate(&cfg), generate(&cfg));
    }

    #[test]
    fn test_parse_file_name() {
        assert_eq!(
            parse_file_name("TiN_adpi", "TiN_adpi_L_r_2"),
            Some(DefectKey::vacancy(2))
        );
        assert_eq!(
            parse_file_name("TiN_adpi", "TiN_adpi_3_r_3"),
            Some(DefectKey::placement(3, 3))
        );
        assert_eq!(parse_file_name("TiN_adpi", "TiN_adpi_3_r_x"), None);
        assert_eq!(parse_file_name("TiN_adpi", "Other_1_r_2"), None);
        // 前缀中的正则元字符按字面匹配
        assert_eq!(
            parse_file_name("Ti.N", "Ti.N_1_r_2"),
            Some(DefectKey::placement(1, 2))
        );
        assert_eq!(parse_file_name("Ti.N", "TixN_1_r_2"), None);
    }

    #[test]
    fn test_parse_inverts_generate() {
        for e in generate(&tin_h()) {
            assert_eq!(parse_file_name("TiN_adpi", &e.file_name), Some(e.key));
        }
    }
}
