//! # vsutil-cli
//!
//! vsutil 命令行工具.
//!
//! 用法:
//! ```bash
//! vsutil scale 235 --from 8 --to 16
//! vsutil scale 128 --from 8 --to 32 --chroma --scale-offsets --json
//! vsutil dither 10 8 --range-in limited --range-out limited
//! vsutil width 480 --aspect 16/9
//! vsutil format yuv420p10 --width 1920 --height 1080
//! ```

mod args;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use vsutil_clip::{FrameGeometry, get_plane_size, get_w};
use vsutil_core::{ColorRange, SampleType, VideoFormat};
use vsutil_scale::{default_dither_type, scale_value, should_dither};

use args::{parse_aspect, parse_range, parse_sample_type};

/// vsutil 命令行参数
#[derive(Parser, Debug)]
#[command(
    name = "vsutil",
    version,
    about = "vsutil - 视频采样值换算与格式查询工具"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// 以 JSON 格式输出结果
    #[arg(long, global = true)]
    json: bool,

    /// 日志详细程度 (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 在位深/范围之间换算单个采样值
    Scale {
        /// 待换算的值
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// 输入位深 (浮点用 32)
        #[arg(long = "from")]
        input_depth: u32,

        /// 输出位深 (浮点用 32)
        #[arg(long = "to")]
        output_depth: u32,

        /// 输入范围 (limited/full)
        #[arg(long, default_value = "limited", value_parser = parse_range)]
        range_in: ColorRange,

        /// 输出范围, 缺省时与输入相同
        #[arg(long, value_parser = parse_range)]
        range: Option<ColorRange>,

        /// 处理色度中性点与黑电平偏移
        #[arg(long)]
        scale_offsets: bool,

        /// 按色度平面处理
        #[arg(long)]
        chroma: bool,
    },

    /// 判断位深/范围转换是否需要抖动
    Dither {
        /// 输入位深
        in_bits: u32,

        /// 输出位深
        out_bits: u32,

        /// 输入范围
        #[arg(long, value_parser = parse_range)]
        range_in: Option<ColorRange>,

        /// 输出范围
        #[arg(long, value_parser = parse_range)]
        range_out: Option<ColorRange>,

        /// 输入采样类型 (integer/float), 缺省时由位深推断
        #[arg(long, value_parser = parse_sample_type)]
        in_sample_type: Option<SampleType>,

        /// 输出采样类型 (integer/float), 缺省时由位深推断
        #[arg(long, value_parser = parse_sample_type)]
        out_sample_type: Option<SampleType>,
    },

    /// 按高度与宽高比计算宽度
    Width {
        /// 高度
        height: u32,

        /// 宽高比 (如 16/9, 4/3, 1.85)
        #[arg(long, default_value = "16/9", value_parser = parse_aspect)]
        aspect: f64,

        /// 允许奇数宽度
        #[arg(long)]
        allow_odd: bool,
    },

    /// 查询预设视频格式的描述
    Format {
        /// 格式名 (如 yuv420p10, gray16, rgbs)
        name: String,

        /// 画面宽度, 与 --height 一起给出时输出各平面尺寸
        #[arg(long, requires = "height")]
        width: Option<u32>,

        /// 画面高度
        #[arg(long, requires = "width")]
        height: Option<u32>,
    },
}

#[derive(Debug, Serialize)]
struct ScaleReport {
    value: f64,
    input_depth: u32,
    output_depth: u32,
    range_in: String,
    range: String,
    scale_offsets: bool,
    chroma: bool,
    result: f64,
}

#[derive(Debug, Serialize)]
struct DitherReport {
    in_bits: u32,
    out_bits: u32,
    range_in: Option<String>,
    range_out: Option<String>,
    in_sample_type: String,
    out_sample_type: String,
    should_dither: bool,
    dither_type: String,
}

#[derive(Debug, Serialize)]
struct WidthReport {
    height: u32,
    aspect: f64,
    only_even: bool,
    width: u32,
}

#[derive(Debug, Serialize)]
struct PlaneReport {
    index: usize,
    width: u32,
    height: u32,
}

#[derive(Debug, Serialize)]
struct FormatReport {
    name: String,
    color_family: String,
    sample_type: String,
    bits_per_sample: u32,
    bytes_per_sample: u32,
    subsampling_w: u32,
    subsampling_h: u32,
    subsampling: Option<String>,
    num_planes: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    planes: Vec<PlaneReport>,
}

/// 固定格式与尺寸的帧描述, 用于平面尺寸查询
struct FrameProbe {
    format: VideoFormat,
    width: u32,
    height: u32,
}

impl FrameGeometry for FrameProbe {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> Option<VideoFormat> {
        Some(self.format)
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::init("vsutil", cli.verbose) {
        eprintln!("警告: 日志初始化失败: {e:#}");
    }

    if let Err(e) = run(&cli) {
        eprintln!("错误: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    debug!("命令: {:?}", cli.command);
    match &cli.command {
        Command::Scale {
            value,
            input_depth,
            output_depth,
            range_in,
            range,
            scale_offsets,
            chroma,
        } => {
            let result = scale_value(
                *value,
                *input_depth,
                *output_depth,
                *range_in,
                *range,
                *scale_offsets,
                *chroma,
            )
            .with_context(|| format!("无法换算 {value} ({input_depth} → {output_depth} 位)"))?;
            info!("scale {value} {input_depth}→{output_depth} = {result}");
            let report = ScaleReport {
                value: *value,
                input_depth: *input_depth,
                output_depth: *output_depth,
                range_in: range_in.to_string(),
                range: range.unwrap_or(*range_in).to_string(),
                scale_offsets: *scale_offsets,
                chroma: *chroma,
                result,
            };
            emit(cli.json, &report, || format!("{result}"))
        }
        Command::Dither {
            in_bits,
            out_bits,
            range_in,
            range_out,
            in_sample_type,
            out_sample_type,
        } => {
            let needed = should_dither(
                *in_bits,
                *out_bits,
                *range_in,
                *range_out,
                *in_sample_type,
                *out_sample_type,
            );
            let dither_type = default_dither_type(
                *in_bits,
                *out_bits,
                *range_in,
                *range_out,
                *in_sample_type,
                *out_sample_type,
            );
            let report = DitherReport {
                in_bits: *in_bits,
                out_bits: *out_bits,
                range_in: range_in.map(|r| r.to_string()),
                range_out: range_out.map(|r| r.to_string()),
                in_sample_type: in_sample_type
                    .unwrap_or(SampleType::implied_by_depth(*in_bits))
                    .to_string(),
                out_sample_type: out_sample_type
                    .unwrap_or(SampleType::implied_by_depth(*out_bits))
                    .to_string(),
                should_dither: needed,
                dither_type: dither_type.to_string(),
            };
            emit(cli.json, &report, || {
                format!("{needed} (dither_type={dither_type})")
            })
        }
        Command::Width {
            height,
            aspect,
            allow_odd,
        } => {
            let width = get_w(*height, *aspect, !allow_odd);
            let report = WidthReport {
                height: *height,
                aspect: *aspect,
                only_even: !allow_odd,
                width,
            };
            emit(cli.json, &report, || format!("{width}x{height}"))
        }
        Command::Format {
            name,
            width,
            height,
        } => {
            let format = VideoFormat::from_name(name)
                .with_context(|| format!("未知的视频格式: '{name}'"))?;
            let report = describe_format(format, width.zip(*height))?;
            emit(cli.json, &report, || format_text(&report))
        }
    }
}

fn describe_format(format: VideoFormat, size: Option<(u32, u32)>) -> Result<FormatReport> {
    let subsampling = format
        .subsampling()
        .with_context(|| format!("无法识别 {format} 的子采样"))?;

    let planes = match size {
        Some((width, height)) => {
            let probe = FrameProbe {
                format,
                width,
                height,
            };
            (0..format.num_planes() as usize)
                .map(|index| {
                    let (w, h) = get_plane_size(&probe, index)
                        .with_context(|| format!("无法计算平面 {index} 的尺寸"))?;
                    Ok(PlaneReport {
                        index,
                        width: w,
                        height: h,
                    })
                })
                .collect::<Result<Vec<_>>>()?
        }
        None => Vec::new(),
    };

    Ok(FormatReport {
        name: format.to_string(),
        color_family: format.color_family.to_string(),
        sample_type: format.sample_type.to_string(),
        bits_per_sample: format.bits_per_sample,
        bytes_per_sample: format.bytes_per_sample(),
        subsampling_w: format.subsampling_w,
        subsampling_h: format.subsampling_h,
        subsampling: subsampling.map(|s| s.to_string()),
        num_planes: format.num_planes(),
        planes,
    })
}

fn format_text(report: &FormatReport) -> String {
    let mut text = format!(
        "{}: {} {} {} 位, {} 个平面",
        report.name,
        report.color_family,
        report.sample_type,
        report.bits_per_sample,
        report.num_planes,
    );
    if let Some(ss) = &report.subsampling {
        text.push_str(&format!(", 子采样 {ss}"));
    }
    for plane in &report.planes {
        text.push_str(&format!(
            "\n  平面 {}: {}x{}",
            plane.index, plane.width, plane.height
        ));
    }
    text
}

/// 按输出模式打印结果
fn emit<T: Serialize>(json: bool, report: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        let doc = serde_json::to_string_pretty(report).context("JSON 序列化失败")?;
        println!("{doc}");
    } else {
        println!("{}", text());
    }
    Ok(())
}
