//! # vsutil
//!
//! 视频节点图通用工具库.
//!
//! vsutil 提供构建视频处理脚本时常用的辅助功能:
//! - **采样值换算**: 在位深与色彩范围 (有限/完整) 之间换算单个采样值
//! - **抖动判定**: 判断位深/范围转换是否应默认启用抖动
//! - **平面操作**: 拆分、合并、提取单个平面
//! - **格式查询**: 位深、子采样、平面尺寸、按宽高比计算宽度
//!
//! # 快速开始
//!
//! ```rust
//! use vsutil::core::ColorRange;
//! use vsutil::scale::{scale_value, should_dither};
//!
//! // 8 位有限范围的 235 (白电平) 换算到 16 位
//! let white = scale_value(235.0, 8, 16, ColorRange::Limited, None, false, false).unwrap();
//! assert_eq!(white, 60160.0);
//!
//! // 10 位降到 8 位需要抖动
//! assert!(should_dither(10, 8, None, None, None, None));
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `vsutil-core` | 核心类型: 色彩范围、抖动类型、视频格式、错误 |
//! | `vsutil-scale` | 采样值换算与抖动判定 |
//! | `vsutil-clip` | 宿主节点抽象与平面/位深辅助函数 |

/// 核心类型与工具
pub use vsutil_core as core;

/// 采样值换算与抖动判定
pub use vsutil_scale as scale;

/// 节点辅助函数
pub use vsutil_clip as clip;

/// 获取 vsutil 版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
