//! 单个采样值的位深/范围换算.
//!
//! 换算公式:
//! ```text
//! out = (in - in_offset) * out_peak / in_peak + out_offset
//! ```
//! 其中 peak 为该位深/范围下的最大偏移量:
//! - 浮点 (32 位): 1
//! - 完整范围: 2^bits - 1
//! - 有限范围: 219 (亮度) 或 224 (色度), 按 `bits - 8` 左移
//!
//! 偏移仅在 `scale_offsets` 时参与: 色度中性点 128 (转浮点时去除, 从浮点转回时加回),
//! 或有限范围黑电平 16 (有限 → 完整时去除, 完整 → 有限时加回). 结果不做截断.

use vsutil_core::func::fallback;
use vsutil_core::{ColorRange, FLOAT_DEPTH, VsError, VsResult, resolve_enum};

/// 有限范围亮度跨度 (8 位: 16-235)
const LUMA_EXCURSION: u64 = 219;
/// 有限范围色度跨度 (8 位: 16-240)
const CHROMA_EXCURSION: u64 = 224;
/// 有限范围黑电平 (8 位)
const BLACK_LEVEL: u64 = 16;
/// 色度中性点 (8 位)
const CHROMA_NEUTRAL: u64 = 128;

/// 将 8 位基准值按位深左移 `bits - 8`
fn shifted(base: u64, bits: u32) -> VsResult<f64> {
    let shift = bits
        .checked_sub(8)
        .ok_or(VsError::UnsupportedDepth(bits))?;
    Ok((base << shift) as f64)
}

fn check_depth(bits: u32) -> VsResult<()> {
    if bits == 0 || bits > FLOAT_DEPTH {
        return Err(VsError::UnsupportedDepth(bits));
    }
    Ok(())
}

/// 指定位深/范围下的峰值 (最大偏移量)
///
/// 32 位视为归一化浮点, 峰值为 1.
pub fn peak_pixel_value(bits: u32, range: ColorRange, chroma: bool) -> VsResult<f64> {
    check_depth(bits)?;
    if bits == FLOAT_DEPTH {
        return Ok(1.0);
    }
    if range.is_full() {
        return Ok(((1u64 << bits) - 1) as f64);
    }
    let excursion = if chroma {
        CHROMA_EXCURSION
    } else {
        LUMA_EXCURSION
    };
    shifted(excursion, bits)
}

/// 在位深、范围之间换算单个采样值
///
/// # 参数
/// - `value`: 待换算的值
/// - `input_depth`: 输入位深, 浮点采样用 32
/// - `output_depth`: 输出位深
/// - `range_in`: 输入范围, 32 位输入强制视为完整范围
/// - `range`: 输出范围, `None` 时与 `range_in` 相同; 32 位输出强制视为完整范围
/// - `scale_offsets`: 是否处理色度中性点与有限范围黑电平偏移.
///   例如把有限范围的 16 换算为浮点时, 开启后得到 0.0 而不是 0.073059...
/// - `chroma`: 按色度而非亮度处理
///
/// 位深与范围均不变时原样返回输入值.
///
/// # 错误
/// 位深为 0、超过 32, 或需要按 `bits - 8` 移位而位深不足 8 时返回
/// [`VsError::UnsupportedDepth`].
pub fn scale_value(
    value: f64,
    input_depth: u32,
    output_depth: u32,
    range_in: ColorRange,
    range: Option<ColorRange>,
    scale_offsets: bool,
    chroma: bool,
) -> VsResult<f64> {
    let mut range_in = range_in;
    let mut range = fallback(range, range_in);

    if input_depth == FLOAT_DEPTH {
        range_in = ColorRange::Full;
    }
    if output_depth == FLOAT_DEPTH {
        range = ColorRange::Full;
    }

    let input_peak = peak_pixel_value(input_depth, range_in, chroma)?;
    let output_peak = peak_pixel_value(output_depth, range, chroma)?;

    if input_depth == output_depth && range_in == range {
        log::trace!("scale_value: {input_depth} 位 {range_in} 无需换算");
        return Ok(value);
    }

    let mut value = value;

    if scale_offsets {
        if output_depth == FLOAT_DEPTH && chroma {
            value -= shifted(CHROMA_NEUTRAL, input_depth)?;
        } else if range == ColorRange::Full && range_in == ColorRange::Limited {
            value -= shifted(BLACK_LEVEL, input_depth)?;
        }
    }

    value *= output_peak / input_peak;

    if scale_offsets {
        if input_depth == FLOAT_DEPTH && chroma {
            value += shifted(CHROMA_NEUTRAL, output_depth)?;
        } else if range_in == ColorRange::Full && range == ColorRange::Limited {
            value += shifted(BLACK_LEVEL, output_depth)?;
        }
    }

    Ok(value)
}

/// 以宿主整数 id 指定范围的 [`scale_value`]
///
/// `range_in` 为 `None` 时视为有限范围 (0), `range` 为 `None` 时跟随 `range_in`.
///
/// # 错误
/// 范围 id 不在 {0, 1} 中时返回 [`VsError::InvalidArgument`],
/// 错误信息列出 `<vsutil.Range.LIMITED: 0>, <vsutil.Range.FULL: 1>`.
pub fn scale_value_raw(
    value: f64,
    input_depth: u32,
    output_depth: u32,
    range_in: Option<i64>,
    range: Option<i64>,
    scale_offsets: bool,
    chroma: bool,
) -> VsResult<f64> {
    let range_in = resolve_enum::<ColorRange, i64>(range_in, "range_in")?;
    let range = resolve_enum::<ColorRange, i64>(range, "range")?;
    scale_value(
        value,
        input_depth,
        output_depth,
        fallback(range_in, ColorRange::Limited),
        range,
        scale_offsets,
        chroma,
    )
}
