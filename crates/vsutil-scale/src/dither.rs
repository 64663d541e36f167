//! 抖动判定.
//!
//! 判断位深/范围/采样类型转换是否需要默认启用抖动:
//! - 输出为浮点时一律不抖动 (即使可能损失精度)
//! - 范围转换 (有限 ↔ 完整) 需要抖动
//! - 浮点转整数需要抖动
//! - 完整范围升位深需要抖动, 8 → 16 除外 (即 (0-255) * 257 → (0-65535), 无舍入误差)
//! - 降位深需要抖动, 与范围无关

use vsutil_core::func::fallback;
use vsutil_core::{ColorRange, DitherType, SampleType};

/// 判断给定转换是否需要抖动
///
/// 未指定的采样类型由对应位深推断 (32 位为浮点).
/// 范围按 `Option` 比较: 只指定一侧范围时视为发生了范围转换.
pub fn should_dither(
    in_bits: u32,
    out_bits: u32,
    in_range: Option<ColorRange>,
    out_range: Option<ColorRange>,
    in_sample_type: Option<SampleType>,
    out_sample_type: Option<SampleType>,
) -> bool {
    let out_sample_type = fallback(out_sample_type, SampleType::implied_by_depth(out_bits));
    let in_sample_type = fallback(in_sample_type, SampleType::implied_by_depth(in_bits));

    if out_sample_type == SampleType::Float {
        return false;
    }

    let range_conversion = in_range != out_range;
    let float_to_int = in_sample_type == SampleType::Float;
    let upsampling = in_bits < out_bits;
    let downsampling = in_bits > out_bits;

    range_conversion
        || float_to_int
        || (in_range == Some(ColorRange::Full) && upsampling && (in_bits, out_bits) != (8, 16))
        || downsampling
}

/// 默认抖动算法: 需要抖动时为误差扩散, 否则为四舍五入
pub fn default_dither_type(
    in_bits: u32,
    out_bits: u32,
    in_range: Option<ColorRange>,
    out_range: Option<ColorRange>,
    in_sample_type: Option<SampleType>,
    out_sample_type: Option<SampleType>,
) -> DitherType {
    if should_dither(
        in_bits,
        out_bits,
        in_range,
        out_range,
        in_sample_type,
        out_sample_type,
    ) {
        DitherType::ErrorDiffusion
    } else {
        DitherType::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITED: Option<ColorRange> = Some(ColorRange::Limited);
    const FULL: Option<ColorRange> = Some(ColorRange::Full);
    const INT: Option<SampleType> = Some(SampleType::Integer);
    const FLOAT: Option<SampleType> = Some(SampleType::Float);

    #[test]
    fn test_range_conversion_dithers() {
        assert!(should_dither(1, 1, LIMITED, FULL, None, None));
    }

    #[test]
    fn test_float_to_int_dithers() {
        assert!(should_dither(1, 1, None, None, FLOAT, None));
    }

    #[test]
    fn test_full_range_upsample_dithers() {
        assert!(should_dither(10, 12, FULL, FULL, None, None));
    }

    #[test]
    fn test_full_range_8_to_16_is_exact() {
        assert!(!should_dither(8, 16, FULL, FULL, None, None));
    }

    #[test]
    fn test_downsample_dithers_for_any_range() {
        assert!(should_dither(10, 8, None, None, INT, None));
        assert!(should_dither(10, 8, FULL, FULL, INT, None));
        assert!(should_dither(10, 8, LIMITED, LIMITED, INT, None));
    }

    #[test]
    fn test_no_dither_cases() {
        assert!(!should_dither(8, 8, None, None, INT, None));
        assert!(!should_dither(8, 16, None, None, INT, None));
        assert!(!should_dither(8, 16, LIMITED, LIMITED, INT, None));
    }

    #[test]
    fn test_float_output_never_dithers() {
        assert!(!should_dither(32, 32, None, None, INT, None));
        assert!(!should_dither(32, 16, None, None, INT, FLOAT));
        assert!(!should_dither(16, 32, LIMITED, FULL, FLOAT, None));
    }

    #[test]
    fn test_one_sided_range_counts_as_conversion() {
        // 只指定输入范围时, 与未指定的输出范围比较结果为 "不同"
        assert!(should_dither(8, 8, LIMITED, None, None, None));
        assert!(should_dither(8, 8, None, FULL, None, None));
    }

    #[test]
    fn test_default_dither_type() {
        assert_eq!(
            default_dither_type(16, 8, None, None, None, None),
            DitherType::ErrorDiffusion
        );
        assert_eq!(
            default_dither_type(8, 16, FULL, FULL, None, None),
            DitherType::None
        );
    }
}
