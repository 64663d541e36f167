//! 抖动算法定义.
//!
//! 对应宿主 (zimg) 的 `zimg_dither_type_e`, 以名称字符串传递给重采样操作.

use std::fmt;
use std::str::FromStr;

use crate::error::{VsError, VsResult};
use crate::resolve::{EnumValues, FromRaw, readable_enums};

/// 降低精度时使用的抖动算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DitherType {
    /// 四舍五入到最近值, 不抖动
    None,
    /// Bayer 有序抖动
    Ordered,
    /// 幅度 0.5 的伪随机噪声
    Random,
    /// Floyd-Steinberg 误差扩散
    ErrorDiffusion,
}

impl DitherType {
    /// 宿主使用的名称
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ordered => "ordered",
            Self::Random => "random",
            Self::ErrorDiffusion => "error_diffusion",
        }
    }
}

impl EnumValues for DitherType {
    const QUALIFIER: &'static str = "vsutil.Dither";
    const VARIANTS: &'static [Self] = &[
        Self::None,
        Self::Ordered,
        Self::Random,
        Self::ErrorDiffusion,
    ];

    fn variant_name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Ordered => "ORDERED",
            Self::Random => "RANDOM",
            Self::ErrorDiffusion => "ERROR_DIFFUSION",
        }
    }

    fn value_repr(self) -> String {
        format!("'{}'", self.as_str())
    }
}

impl FromRaw<&str> for DitherType {
    fn from_raw(raw: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|d| d.as_str() == raw)
    }
}

impl FromStr for DitherType {
    type Err = VsError;

    fn from_str(s: &str) -> VsResult<Self> {
        Self::from_raw(s).ok_or_else(|| VsError::InvalidArgument {
            var_name: "dither_type".into(),
            legal: readable_enums::<Self>(),
        })
    }
}

impl fmt::Display for DitherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
