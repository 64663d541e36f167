//! 视频格式描述.
//!
//! 对应宿主节点图的格式描述符 (`bitsPerSample`, `colorFamily`, `subsamplingW/H`,
//! `numPlanes`). 本模块只描述格式, 不持有任何像素数据.

use std::fmt;

use crate::error::{VsError, VsResult};
use crate::resolve::{EnumValues, FromRaw};

/// 浮点采样约定使用的位深
pub const FLOAT_DEPTH: u32 = 32;

// ========================
// 采样类型
// ========================

/// 采样类型 (整数定点 / 浮点)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleType {
    /// 整数
    Integer = 0,
    /// 浮点
    Float = 1,
}

impl SampleType {
    /// 由位深推断的默认采样类型: 32 位为浮点, 其余为整数
    pub const fn implied_by_depth(bits: u32) -> Self {
        if bits == FLOAT_DEPTH {
            Self::Float
        } else {
            Self::Integer
        }
    }

    /// 宿主使用的整数 id
    pub const fn id(self) -> i64 {
        self as i64
    }
}

impl EnumValues for SampleType {
    const QUALIFIER: &'static str = "vapoursynth";
    const VARIANTS: &'static [Self] = &[Self::Integer, Self::Float];

    fn variant_name(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
        }
    }

    fn value_repr(self) -> String {
        self.id().to_string()
    }
}

impl FromRaw<i64> for SampleType {
    fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Self::Integer),
            1 => Some(Self::Float),
            _ => None,
        }
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "integer",
            Self::Float => "float",
        };
        write!(f, "{name}")
    }
}

// ========================
// 颜色族
// ========================

/// 颜色族
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    /// 灰度 (单平面)
    Gray = 1_000_000,
    /// RGB
    Rgb = 2_000_000,
    /// YUV
    Yuv = 3_000_000,
    /// YCoCg
    YCoCg = 4_000_000,
}

impl ColorFamily {
    /// 宿主使用的整数 id
    pub const fn id(self) -> i64 {
        self as i64
    }

    /// 是否包含亮度平面
    pub const fn has_luma(self) -> bool {
        matches!(self, Self::Yuv | Self::YCoCg | Self::Gray)
    }

    /// 是否为三平面颜色族
    pub const fn is_three_plane(self) -> bool {
        !matches!(self, Self::Gray)
    }
}

impl EnumValues for ColorFamily {
    const QUALIFIER: &'static str = "vapoursynth";
    const VARIANTS: &'static [Self] = &[Self::Gray, Self::Rgb, Self::Yuv, Self::YCoCg];

    fn variant_name(self) -> &'static str {
        match self {
            Self::Gray => "GRAY",
            Self::Rgb => "RGB",
            Self::Yuv => "YUV",
            Self::YCoCg => "YCOCG",
        }
    }

    fn value_repr(self) -> String {
        self.id().to_string()
    }
}

impl FromRaw<i64> for ColorFamily {
    fn from_raw(raw: i64) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|f| f.id() == raw)
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.variant_name())
    }
}

// ========================
// 色度子采样
// ========================

/// 可读的色度子采样类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subsampling {
    /// 4:4:4, 无子采样
    Yuv444,
    /// 4:4:0, 仅垂直 1/2
    Yuv440,
    /// 4:2:2, 水平 1/2
    Yuv422,
    /// 4:2:0, 水平垂直各 1/2
    Yuv420,
    /// 4:1:1, 水平 1/4
    Yuv411,
    /// 4:1:0, 水平垂直各 1/4
    Yuv410,
}

impl Subsampling {
    /// 由 log2 子采样 (水平, 垂直) 查找, 不在表中返回 `None`
    pub const fn from_log2(w: u32, h: u32) -> Option<Self> {
        match (w, h) {
            (1, 1) => Some(Self::Yuv420),
            (1, 0) => Some(Self::Yuv422),
            (0, 0) => Some(Self::Yuv444),
            (2, 2) => Some(Self::Yuv410),
            (2, 0) => Some(Self::Yuv411),
            (0, 1) => Some(Self::Yuv440),
            _ => None,
        }
    }

    /// log2 子采样 (水平, 垂直)
    pub const fn log2(self) -> (u32, u32) {
        match self {
            Self::Yuv444 => (0, 0),
            Self::Yuv440 => (0, 1),
            Self::Yuv422 => (1, 0),
            Self::Yuv420 => (1, 1),
            Self::Yuv411 => (2, 0),
            Self::Yuv410 => (2, 2),
        }
    }

    /// 短名称, 如 `"420"`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yuv444 => "444",
            Self::Yuv440 => "440",
            Self::Yuv422 => "422",
            Self::Yuv420 => "420",
            Self::Yuv411 => "411",
            Self::Yuv410 => "410",
        }
    }
}

impl fmt::Display for Subsampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ========================
// 视频格式
// ========================

/// 视频格式描述符
///
/// 子采样以 log2 表示, 例如 YUV420 为 (1, 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VideoFormat {
    /// 颜色族
    pub color_family: ColorFamily,
    /// 采样类型
    pub sample_type: SampleType,
    /// 每个采样的位数
    pub bits_per_sample: u32,
    /// log2 水平色度子采样
    pub subsampling_w: u32,
    /// log2 垂直色度子采样
    pub subsampling_h: u32,
}

impl VideoFormat {
    /// 创建格式描述
    pub const fn new(
        color_family: ColorFamily,
        sample_type: SampleType,
        bits_per_sample: u32,
        subsampling_w: u32,
        subsampling_h: u32,
    ) -> Self {
        Self {
            color_family,
            sample_type,
            bits_per_sample,
            subsampling_w,
            subsampling_h,
        }
    }

    const fn int(family: ColorFamily, bits: u32, ssw: u32, ssh: u32) -> Self {
        Self::new(family, SampleType::Integer, bits, ssw, ssh)
    }

    const fn float(family: ColorFamily, bits: u32, ssw: u32, ssh: u32) -> Self {
        Self::new(family, SampleType::Float, bits, ssw, ssh)
    }

    pub const GRAY8: Self = Self::int(ColorFamily::Gray, 8, 0, 0);
    pub const GRAY10: Self = Self::int(ColorFamily::Gray, 10, 0, 0);
    pub const GRAY12: Self = Self::int(ColorFamily::Gray, 12, 0, 0);
    pub const GRAY16: Self = Self::int(ColorFamily::Gray, 16, 0, 0);
    pub const GRAYH: Self = Self::float(ColorFamily::Gray, 16, 0, 0);
    pub const GRAYS: Self = Self::float(ColorFamily::Gray, 32, 0, 0);

    pub const YUV420P8: Self = Self::int(ColorFamily::Yuv, 8, 1, 1);
    pub const YUV420P10: Self = Self::int(ColorFamily::Yuv, 10, 1, 1);
    pub const YUV420P12: Self = Self::int(ColorFamily::Yuv, 12, 1, 1);
    pub const YUV420P16: Self = Self::int(ColorFamily::Yuv, 16, 1, 1);
    pub const YUV420PH: Self = Self::float(ColorFamily::Yuv, 16, 1, 1);
    pub const YUV420PS: Self = Self::float(ColorFamily::Yuv, 32, 1, 1);
    pub const YUV422P8: Self = Self::int(ColorFamily::Yuv, 8, 1, 0);
    pub const YUV422P10: Self = Self::int(ColorFamily::Yuv, 10, 1, 0);
    pub const YUV422P16: Self = Self::int(ColorFamily::Yuv, 16, 1, 0);
    pub const YUV444P8: Self = Self::int(ColorFamily::Yuv, 8, 0, 0);
    pub const YUV444P10: Self = Self::int(ColorFamily::Yuv, 10, 0, 0);
    pub const YUV444P16: Self = Self::int(ColorFamily::Yuv, 16, 0, 0);
    pub const YUV444PH: Self = Self::float(ColorFamily::Yuv, 16, 0, 0);
    pub const YUV444PS: Self = Self::float(ColorFamily::Yuv, 32, 0, 0);
    pub const YUV410P8: Self = Self::int(ColorFamily::Yuv, 8, 2, 2);
    pub const YUV411P8: Self = Self::int(ColorFamily::Yuv, 8, 2, 0);
    pub const YUV440P8: Self = Self::int(ColorFamily::Yuv, 8, 0, 1);

    pub const RGB24: Self = Self::int(ColorFamily::Rgb, 8, 0, 0);
    pub const RGB30: Self = Self::int(ColorFamily::Rgb, 10, 0, 0);
    pub const RGB48: Self = Self::int(ColorFamily::Rgb, 16, 0, 0);
    pub const RGBH: Self = Self::float(ColorFamily::Rgb, 16, 0, 0);
    pub const RGBS: Self = Self::float(ColorFamily::Rgb, 32, 0, 0);

    /// 预设格式表, 供按名称查找
    pub const PRESETS: &'static [Self] = &[
        Self::GRAY8,
        Self::GRAY10,
        Self::GRAY12,
        Self::GRAY16,
        Self::GRAYH,
        Self::GRAYS,
        Self::YUV420P8,
        Self::YUV420P10,
        Self::YUV420P12,
        Self::YUV420P16,
        Self::YUV420PH,
        Self::YUV420PS,
        Self::YUV422P8,
        Self::YUV422P10,
        Self::YUV422P16,
        Self::YUV444P8,
        Self::YUV444P10,
        Self::YUV444P16,
        Self::YUV444PH,
        Self::YUV444PS,
        Self::YUV410P8,
        Self::YUV411P8,
        Self::YUV440P8,
        Self::RGB24,
        Self::RGB30,
        Self::RGB48,
        Self::RGBH,
        Self::RGBS,
    ];

    /// 按名称查找预设格式 (不区分大小写), 如 `"yuv420p10"`
    pub fn from_name(name: &str) -> Option<Self> {
        Self::PRESETS
            .iter()
            .copied()
            .find(|f| f.to_string().eq_ignore_ascii_case(name))
    }

    /// 平面数量
    pub const fn num_planes(&self) -> u32 {
        match self.color_family {
            ColorFamily::Gray => 1,
            _ => 3,
        }
    }

    /// 每个采样占用的字节数
    pub const fn bytes_per_sample(&self) -> u32 {
        self.bits_per_sample.div_ceil(8)
    }

    /// 替换位深与采样类型, 颜色族与子采样不变
    pub const fn with_depth(self, bits_per_sample: u32, sample_type: SampleType) -> Self {
        Self {
            bits_per_sample,
            sample_type,
            ..self
        }
    }

    /// 单个平面对应的灰度格式 (位深与采样类型不变)
    pub const fn to_gray(self) -> Self {
        Self::new(
            ColorFamily::Gray,
            self.sample_type,
            self.bits_per_sample,
            0,
            0,
        )
    }

    /// 可读的色度子采样
    ///
    /// # 返回
    /// - `Ok(None)`: 非 YUV/YCoCg 格式, 不存在子采样
    /// - `Err(UnknownSubsampling)`: 子采样组合不在已知表中
    pub fn subsampling(&self) -> VsResult<Option<Subsampling>> {
        if !matches!(self.color_family, ColorFamily::Yuv | ColorFamily::YCoCg) {
            return Ok(None);
        }
        Subsampling::from_log2(self.subsampling_w, self.subsampling_h)
            .map(Some)
            .ok_or(VsError::UnknownSubsampling {
                w: self.subsampling_w,
                h: self.subsampling_h,
            })
    }

    /// 计算指定平面的尺寸 (宽, 高)
    ///
    /// 平面 0 为完整尺寸, 其余平面按色度子采样右移.
    /// 子采样移位不小于 32 时尺寸为 0.
    pub const fn plane_size(&self, plane: usize, width: u32, height: u32) -> (u32, u32) {
        if plane == 0 {
            (width, height)
        } else {
            (
                shr_or_zero(width, self.subsampling_w),
                shr_or_zero(height, self.subsampling_h),
            )
        }
    }
}

const fn shr_or_zero(value: u32, shift: u32) -> u32 {
    match value.checked_shr(shift) {
        Some(v) => v,
        None => 0,
    }
}

/// 浮点位深的名称后缀
fn float_suffix(bits: u32) -> String {
    match bits {
        16 => "H".to_string(),
        32 => "S".to_string(),
        other => format!("F{other}"),
    }
}

impl fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = match self.sample_type {
            SampleType::Integer => self.bits_per_sample.to_string(),
            SampleType::Float => float_suffix(self.bits_per_sample),
        };
        match self.color_family {
            ColorFamily::Gray => write!(f, "GRAY{depth}"),
            ColorFamily::Rgb => match self.sample_type {
                SampleType::Integer => write!(f, "RGB{}", self.bits_per_sample * 3),
                SampleType::Float => write!(f, "RGB{depth}"),
            },
            ColorFamily::Yuv | ColorFamily::YCoCg => {
                let family = self.color_family.variant_name();
                match Subsampling::from_log2(self.subsampling_w, self.subsampling_h) {
                    Some(ss) => write!(f, "{family}{ss}P{depth}"),
                    None => write!(
                        f,
                        "{family}_SSW{}_SSH{}_P{depth}",
                        self.subsampling_w, self.subsampling_h
                    ),
                }
            }
        }
    }
}
