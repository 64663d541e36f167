//! 像素范围定义.
//!
//! 对应宿主 (zimg) 的 `zimg_pixel_range_e`.

use std::fmt;
use std::str::FromStr;

use crate::error::{VsError, VsResult};
use crate::resolve::{EnumValues, FromRaw, readable_enums};

/// 像素范围
///
/// 决定黑/白电平与数值上下限的对应关系:
/// - Limited: Y 16-235, Cb/Cr 16-240 (8 位) - 广播/TV 标准
/// - Full: 0-255 (8 位) - PC 标准
///
/// "未指定" 用 `Option<ColorRange>::None` 表示.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRange {
    /// 有限范围 (Studio/TV), 8 位下 16-235
    Limited = 0,
    /// 完整范围 (PC), 8 位下 0-255
    Full = 1,
}

impl ColorRange {
    /// 宿主使用的整数 id
    pub const fn id(self) -> i64 {
        self as i64
    }

    /// 是否为完整范围
    pub const fn is_full(self) -> bool {
        matches!(self, Self::Full)
    }
}

impl EnumValues for ColorRange {
    const QUALIFIER: &'static str = "vsutil.Range";
    const VARIANTS: &'static [Self] = &[Self::Limited, Self::Full];

    fn variant_name(self) -> &'static str {
        match self {
            Self::Limited => "LIMITED",
            Self::Full => "FULL",
        }
    }

    fn value_repr(self) -> String {
        self.id().to_string()
    }
}

impl FromRaw<i64> for ColorRange {
    fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Self::Limited),
            1 => Some(Self::Full),
            _ => None,
        }
    }
}

impl TryFrom<i64> for ColorRange {
    type Error = VsError;

    fn try_from(raw: i64) -> VsResult<Self> {
        Self::from_raw(raw).ok_or_else(|| VsError::InvalidArgument {
            var_name: "range".into(),
            legal: readable_enums::<Self>(),
        })
    }
}

impl FromStr for ColorRange {
    type Err = VsError;

    /// 接受名称 (`limited`/`full`, 以及 `tv`/`pc` 别名, 不区分大小写) 或整数 id
    fn from_str(s: &str) -> VsResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "limited" | "tv" => Ok(Self::Limited),
            "full" | "pc" => Ok(Self::Full),
            other => match other.parse::<i64>() {
                Ok(id) => Self::try_from(id),
                Err(_) => Err(VsError::InvalidArgument {
                    var_name: "range".into(),
                    legal: readable_enums::<Self>(),
                }),
            },
        }
    }
}

impl fmt::Display for ColorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Limited => "limited",
            Self::Full => "full",
        };
        write!(f, "{name}")
    }
}
