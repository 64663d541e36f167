//! 色彩相关类型定义.
//!
//! 目前只包含像素范围 (有限/完整).

mod color_range;

pub use color_range::ColorRange;
