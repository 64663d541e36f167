//! 采样值换算一致性测试.
//!
//! 覆盖 8/16 位整数与 32 位浮点之间、有限/完整范围之间的换算,
//! 结果按 f64 精确比较 (换算顺序固定为先求峰值比再相乘).

use vsutil::core::{ColorRange, VsError};
use vsutil::scale::{ScaleRequest, scale_value, scale_value_raw};

/// 以宿主整数 id 指定范围进行换算并精确比较
#[allow(clippy::too_many_arguments)]
fn check(
    value: f64,
    input_depth: u32,
    output_depth: u32,
    range_in: i64,
    range: i64,
    scale_offsets: bool,
    chroma: bool,
    expected: f64,
) {
    let result = scale_value_raw(
        value,
        input_depth,
        output_depth,
        Some(range_in),
        Some(range),
        scale_offsets,
        chroma,
    )
    .unwrap();
    assert_eq!(
        result, expected,
        "scale_value({value}, {input_depth}, {output_depth}, range_in={range_in}, range={range}, \
         scale_offsets={scale_offsets}, chroma={chroma})"
    );
}

#[test]
fn test_identity() {
    check(1.0, 8, 8, 0, 0, false, false, 1.0);
    check(1.0, 8, 8, 1, 1, false, false, 1.0);
    check(1.0, 32, 32, 1, 0, false, false, 1.0);
    check(1.0, 32, 32, 0, 1, false, false, 1.0);
}

#[test]
fn test_range_conversion() {
    check(219.0, 8, 8, 0, 1, false, false, 255.0);
    check(255.0, 8, 8, 1, 0, false, false, 219.0);

    check(224.0, 8, 8, 0, 1, false, true, 255.0);
    check(255.0, 8, 8, 1, 0, false, true, 224.0);

    check(235.0, 8, 8, 0, 1, true, false, 255.0);
    check(255.0, 8, 8, 1, 0, true, false, 235.0);

    check(240.0, 8, 8, 0, 1, true, true, 255.0);
    check(255.0, 8, 8, 1, 0, true, true, 240.0);
}

#[test]
fn test_int_upsample() {
    check(1.0, 8, 16, 0, 0, false, false, 256.0);
    check(1.0, 8, 16, 1, 1, false, false, 257.0);
    check(219.0, 8, 16, 0, 1, false, false, 65535.0);
    check(255.0, 8, 16, 1, 0, false, false, (219 << 8) as f64);

    check(1.0, 8, 16, 0, 0, false, true, 256.0);
    check(1.0, 8, 16, 1, 1, false, true, 257.0);
    check(224.0, 8, 16, 0, 1, false, true, 65535.0);
    check(255.0, 8, 16, 1, 0, false, true, (224 << 8) as f64);

    check(1.0, 8, 16, 0, 0, true, false, 256.0);
    check(1.0, 8, 16, 1, 1, true, false, 257.0);
    check(235.0, 8, 16, 0, 1, true, false, 65535.0);
    check(255.0, 8, 16, 1, 0, true, false, (235 << 8) as f64);

    check(1.0, 8, 16, 0, 0, true, true, 256.0);
    check(1.0, 8, 16, 1, 1, true, true, 257.0);
    check(240.0, 8, 16, 0, 1, true, true, 65535.0);
    check(255.0, 8, 16, 1, 0, true, true, (240 << 8) as f64);
}

#[test]
fn test_int_to_float() {
    check(1.0, 8, 32, 0, 1, false, false, 1.0 / 219.0);
    check(1.0, 8, 32, 1, 1, false, false, 1.0 / 255.0);
    check(219.0, 8, 32, 0, 1, false, false, 1.0);
    check(255.0, 8, 32, 1, 1, false, false, 1.0);

    check(1.0, 8, 32, 0, 1, false, true, 1.0 / 224.0);
    check(1.0, 8, 32, 1, 1, false, true, 1.0 / 255.0);
    check(224.0, 8, 32, 0, 1, false, true, 1.0);
    check(255.0, 8, 32, 1, 1, false, true, 1.0);

    check(1.0, 8, 32, 0, 1, true, false, (1.0 - 16.0) / 219.0);
    check(1.0, 8, 32, 1, 1, true, false, 1.0 / 255.0);
    check(235.0, 8, 32, 0, 1, true, false, 1.0);
    check(255.0, 8, 32, 1, 1, true, false, 1.0);

    check(1.0, 8, 32, 0, 1, true, true, (1.0 - 128.0) / 224.0);
    check(1.0, 8, 32, 1, 1, true, true, (1.0 - 128.0) / 255.0);
    check(240.0, 8, 32, 0, 1, true, true, 0.5);
    check(255.0, 8, 32, 1, 1, true, true, (255.0 - 128.0) / 255.0);
}

#[test]
fn test_int_downsample() {
    check(256.0, 16, 8, 0, 0, false, false, 1.0);
    check(257.0, 16, 8, 1, 1, false, false, 1.0);
    check(65535.0, 16, 8, 1, 0, false, false, 219.0);
    check((219 << 8) as f64, 16, 8, 0, 1, false, false, 255.0);

    check(256.0, 16, 8, 0, 0, false, true, 1.0);
    check(257.0, 16, 8, 1, 1, false, true, 1.0);
    check(65535.0, 16, 8, 1, 0, false, true, 224.0);
    check((224 << 8) as f64, 16, 8, 0, 1, false, true, 255.0);

    check(256.0, 16, 8, 0, 0, true, false, 1.0);
    check(257.0, 16, 8, 1, 1, true, false, 1.0);
    check(65535.0, 16, 8, 1, 0, true, false, 235.0);
    check((235 << 8) as f64, 16, 8, 0, 1, true, false, 255.0);

    check(256.0, 16, 8, 0, 0, true, true, 1.0);
    check(257.0, 16, 8, 1, 1, true, true, 1.0);
    check(65535.0, 16, 8, 1, 0, true, true, 240.0);
    check((240 << 8) as f64, 16, 8, 0, 1, true, true, 255.0);
}

#[test]
fn test_float_to_int() {
    check(1.0 / 219.0, 32, 8, 1, 0, false, false, 1.0);
    check(1.0 / 255.0, 32, 8, 1, 1, false, false, 1.0);
    check(1.0, 32, 8, 1, 0, false, false, 219.0);
    check(1.0, 32, 8, 1, 1, false, false, 255.0);

    check(1.0 / 224.0, 32, 8, 1, 0, false, true, 1.0);
    check(1.0 / 255.0, 32, 8, 1, 1, false, true, 1.0);
    check(1.0, 32, 8, 1, 0, false, true, 224.0);
    check(1.0, 32, 8, 1, 1, false, true, 255.0);

    check((1.0 - 16.0) / 219.0, 32, 8, 1, 0, true, false, 1.0);
    check(1.0 / 255.0, 32, 8, 1, 1, true, false, 1.0);
    check(1.0, 32, 8, 1, 0, true, false, 235.0);
    check(1.0, 32, 8, 1, 1, true, false, 255.0);

    check((1.0 - 128.0) / 224.0, 32, 8, 1, 0, true, true, 1.0);
    check((1.0 - 128.0) / 255.0, 32, 8, 1, 1, true, true, 1.0);
    check(0.5, 32, 8, 1, 0, true, true, 240.0);
    check((255.0 - 128.0) / 255.0, 32, 8, 1, 1, true, true, 255.0);
}

#[test]
fn test_range_defaults() {
    // 缺省: 输入有限范围, 输出跟随输入
    assert_eq!(scale_value_raw(1.0, 8, 16, None, None, false, false).unwrap(), 256.0);
    assert_eq!(scale_value_raw(1.0, 8, 16, Some(1), None, false, false).unwrap(), 257.0);
    assert_eq!(
        scale_value_raw(219.0, 8, 8, None, Some(1), false, false).unwrap(),
        255.0
    );
}

#[test]
fn test_limited_black_to_float() {
    let with_offsets = scale_value(16.0, 8, 32, ColorRange::Limited, None, true, false).unwrap();
    assert_eq!(with_offsets, 0.0);
    let without = scale_value(16.0, 8, 32, ColorRange::Limited, None, false, false).unwrap();
    assert_eq!(without, 16.0 / 219.0);
}

#[test]
fn test_request_matches_free_function() {
    let request = ScaleRequest::new(240.0, 8, 32)
        .with_range(ColorRange::Full)
        .with_scale_offsets(true)
        .with_chroma(true);
    assert_eq!(request.scale().unwrap(), 0.5);
    assert_eq!(
        request.scale().unwrap(),
        scale_value(240.0, 8, 32, ColorRange::Limited, Some(ColorRange::Full), true, true).unwrap()
    );
}

#[test]
fn test_invalid_range_id() {
    let err = scale_value_raw(1.0, 8, 8, Some(2), None, false, false).unwrap_err();
    assert!(matches!(err, VsError::InvalidArgument { ref var_name, .. } if var_name == "range_in"));
    let message = err.to_string();
    assert!(message.contains("<vsutil.Range.LIMITED: 0>"), "{message}");
    assert!(message.contains("<vsutil.Range.FULL: 1>"), "{message}");

    let err = scale_value_raw(1.0, 8, 8, Some(0), Some(-1), false, false).unwrap_err();
    assert!(matches!(err, VsError::InvalidArgument { ref var_name, .. } if var_name == "range"));
}

#[test]
fn test_unsupported_depth() {
    assert_eq!(
        scale_value(1.0, 4, 8, ColorRange::Limited, None, false, false),
        Err(VsError::UnsupportedDepth(4))
    );
    assert_eq!(
        scale_value(1.0, 8, 33, ColorRange::Full, None, false, false),
        Err(VsError::UnsupportedDepth(33))
    );
}
