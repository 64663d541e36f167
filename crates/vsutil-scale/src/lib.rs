//! # vsutil-scale
//!
//! vsutil 位深与像素范围换算库.
//!
//! 本 crate 只包含纯数值逻辑, 不依赖宿主节点类型:
//! - 抖动判定: 位深/范围/采样类型转换是否需要默认启用抖动
//! - 采样值换算: 在位深、范围与色度/亮度偏移约定之间换算单个值
//!
//! ```
//! use vsutil_core::ColorRange;
//! use vsutil_scale::ScaleRequest;
//!
//! // 8 位有限范围色度中性点 → 浮点
//! let v = ScaleRequest::new(128.0, 8, 32)
//!     .with_range_in(ColorRange::Limited)
//!     .with_scale_offsets(true)
//!     .with_chroma(true)
//!     .scale()
//!     .unwrap();
//! assert_eq!(v, 0.0);
//! ```

pub mod dither;
pub mod value;

pub use dither::{default_dither_type, should_dither};
pub use value::{peak_pixel_value, scale_value, scale_value_raw};

use vsutil_core::{ColorRange, VsResult};

/// 单次采样值换算请求
///
/// 每次调用构造, 调用 [`ScaleRequest::scale`] 后即可丢弃.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRequest {
    /// 待换算的值
    pub value: f64,
    /// 输入位深 (浮点用 32)
    pub input_depth: u32,
    /// 输出位深
    pub output_depth: u32,
    /// 输入范围
    pub range_in: ColorRange,
    /// 输出范围, `None` 表示与输入相同
    pub range: Option<ColorRange>,
    /// 是否处理色度中性点/黑电平偏移
    pub scale_offsets: bool,
    /// 按色度处理
    pub chroma: bool,
}

impl ScaleRequest {
    /// 创建换算请求, 默认输入为有限范围、输出范围跟随输入、不处理偏移、按亮度处理
    pub fn new(value: f64, input_depth: u32, output_depth: u32) -> Self {
        Self {
            value,
            input_depth,
            output_depth,
            range_in: ColorRange::Limited,
            range: None,
            scale_offsets: false,
            chroma: false,
        }
    }

    /// 设置输入范围
    pub fn with_range_in(mut self, range_in: ColorRange) -> Self {
        self.range_in = range_in;
        self
    }

    /// 设置输出范围
    pub fn with_range(mut self, range: ColorRange) -> Self {
        self.range = Some(range);
        self
    }

    /// 设置是否处理偏移
    pub fn with_scale_offsets(mut self, scale_offsets: bool) -> Self {
        self.scale_offsets = scale_offsets;
        self
    }

    /// 设置是否按色度处理
    pub fn with_chroma(mut self, chroma: bool) -> Self {
        self.chroma = chroma;
        self
    }

    /// 执行换算
    pub fn scale(&self) -> VsResult<f64> {
        scale_value(
            self.value,
            self.input_depth,
            self.output_depth,
            self.range_in,
            self.range,
            self.scale_offsets,
            self.chroma,
        )
    }

    /// 该转换默认是否需要抖动 (整数采样类型按位深推断)
    pub fn needs_dither(&self) -> bool {
        should_dither(
            self.input_depth,
            self.output_depth,
            Some(self.range_in),
            Some(self.range.unwrap_or(self.range_in)),
            None,
            None,
        )
    }
}
