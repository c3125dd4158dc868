//! # 全局默认参数
//!
//! 默认系统名、标题、颜色与线型循环表，以及站点/原子数量上限。
//!
//! ## 依赖关系
//! - 被 `cli/`, `models/`, `plot/` 使用
//! - 无外部模块依赖

/// 曲线颜色循环表 (名称, RGB)
pub const PALETTE: [(&str, (u8, u8, u8)); 10] = [
    ("blue", (0, 0, 255)),
    ("black", (0, 0, 0)),
    ("green", (0, 128, 0)),
    ("red", (255, 0, 0)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("brown", (165, 42, 42)),
    ("cyan", (0, 191, 191)),
    ("magenta", (191, 0, 191)),
    ("grey", (128, 128, 128)),
];

/// 线型循环表
pub const LINE_STYLES: [&str; 4] = ["solid", "dashed", "dash-dot", "dotted"];

pub const DEFAULT_SYSTEM_NAME: &str = "TiN_adpi";
pub const DEFAULT_TITLE: &str = "Ti0.51N0.49";
pub const DEFAULT_TEMPERATURE: &str = "1000";

pub const MAX_SITES: usize = 10;
pub const MAX_ATOMS: usize = 10;

/// 缺省名称前缀（未给出名称、仅给出数量时使用）
pub const DEFAULT_NETWORK_SITE_PREFIX: &str = "site";
pub const DEFAULT_NETWORK_ATOM_PREFIX: &str = "Al";
pub const DEFAULT_INTER_SITE_PREFIX: &str = "site_inter";
pub const DEFAULT_ADDED_ATOM_PREFIX: &str = "H";
