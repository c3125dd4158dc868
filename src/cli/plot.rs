//! # plot 子命令 CLI 定义
//!
//! 读取命名引擎生成的全部数据文件并绘制浓度曲线。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/plot.rs`

use super::system::SystemArgs;
use crate::config::{DEFAULT_TEMPERATURE, DEFAULT_TITLE};
use crate::error::{AdpiError, Result};

use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};

/// 坐标轴刻度
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum AxisScale {
    /// Linear axis
    Linear,
    /// Logarithmic (base 10) axis
    Log,
}

impl std::fmt::Display for AxisScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisScale::Linear => write!(f, "linear"),
            AxisScale::Log => write!(f, "log"),
        }
    }
}

/// 图像输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ImageFormat {
    /// PNG image
    Png,
    /// JPEG image
    Jpg,
    /// SVG vector image
    Svg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Svg => "svg",
        }
    }

    /// 由文件扩展名推断格式
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpg),
            "svg" => Ok(ImageFormat::Svg),
            "" => Ok(ImageFormat::Png),
            other => Err(AdpiError::UnsupportedFormat(format!(
                "'.{}' (supported: png, jpg, svg)",
                other
            ))),
        }
    }
}

/// plot 子命令参数
#[derive(Args, Debug)]
pub struct PlotArgs {
    #[command(flatten)]
    pub system: SystemArgs,

    /// Abscissa column: x_<atom> or mu_<atom> (default: last x_ column)
    #[arg(short = 'x', long)]
    pub x_axis: Option<String>,

    /// Ordinate column: x_config or Hf_config (default: x_config)
    #[arg(short = 'y', long)]
    pub y_axis: Option<String>,

    /// Force the number of species instead of inferring it from the column count
    #[arg(long)]
    pub n_species: Option<usize>,

    // ─────────────────────────────────────────────────────────────
    // 坐标轴
    // ─────────────────────────────────────────────────────────────
    /// Lower abscissa bound (default: 0, or -11 for mu_)
    #[arg(long, allow_negative_numbers = true)]
    pub xmin: Option<f64>,

    /// Upper abscissa bound (default: 0.05, or 0 for mu_)
    #[arg(long, allow_negative_numbers = true)]
    pub xmax: Option<f64>,

    /// Lower ordinate bound (default: 1e-12)
    #[arg(long, allow_negative_numbers = true)]
    pub ymin: Option<f64>,

    /// Upper ordinate bound (default: 1)
    #[arg(long, allow_negative_numbers = true)]
    pub ymax: Option<f64>,

    /// Abscissa scale (ignored for mu_, always linear)
    #[arg(long, value_enum)]
    pub xscale: Option<AxisScale>,

    /// Ordinate scale (default: log)
    #[arg(long, value_enum)]
    pub yscale: Option<AxisScale>,

    // ─────────────────────────────────────────────────────────────
    // 图像
    // ─────────────────────────────────────────────────────────────
    /// System title shown on the figure
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Temperature in K, shown in the title
    #[arg(short = 't', long, default_value = DEFAULT_TEMPERATURE)]
    pub temperature: String,

    /// Output image path
    #[arg(short, long, default_value = "TiN_adpi.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<ImageFormat>,

    /// Figure width in pixels
    #[arg(long, default_value_t = 1300)]
    pub width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Also export every loaded curve to this CSV file
    #[arg(long)]
    pub data_csv: Option<PathBuf>,

    /// Number of parallel readers (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Abort without plotting if any data file is missing or invalid
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}
