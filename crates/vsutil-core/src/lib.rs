//! # vsutil-core
//!
//! vsutil 核心库, 提供视频节点图辅助函数共用的值类型、枚举解析和错误处理.
//!
//! 本 crate 不依赖任何宿主类型: 格式描述符、像素范围、采样类型与抖动算法
//! 均为纯值类型, 可在任意线程中自由复制.

pub mod color;
pub mod dither;
pub mod error;
pub mod format;
pub mod func;
pub mod resolve;

// 重导出常用类型
pub use color::ColorRange;
pub use dither::DitherType;
pub use error::{VsError, VsResult};
pub use format::{ColorFamily, FLOAT_DEPTH, SampleType, Subsampling, VideoFormat};
pub use func::EXPR_VARS;
pub use resolve::{EnumValues, FromRaw, readable_enums, resolve_enum};
