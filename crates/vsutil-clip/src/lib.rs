//! # vsutil-clip
//!
//! vsutil 节点辅助函数库.
//!
//! 宿主节点图 (帧图执行引擎、重采样、平面重排) 不在本 crate 中实现,
//! 而是通过 [`VideoNode`] trait 注入. 本 crate 在其之上提供:
//! - 位深/采样类型/范围转换 ([`clips::depth`])
//! - 平面提取、拆分与合并 ([`clips::plane`], [`clips::split`], [`clips::join`])
//! - 片段插入 ([`clips::insert_clip`])
//! - 格式查询 ([`info::get_depth`], [`info::get_subsampling`], [`info::get_plane_size`])
//! - 与宿主无关的 [`info::get_w`] 与 [`info::is_image`]
//!
//! 所有接受节点的函数都在入口处检查前置条件 (见 [`guard`]), 失败时不会调用宿主.

pub mod clips;
pub mod guard;
pub mod info;

#[cfg(test)]
pub(crate) mod test_util;

pub use clips::{DepthOptions, depth, get_y, insert_clip, join, plane, split};
pub use info::{get_depth, get_plane_size, get_subsampling, get_w, is_image};

use vsutil_core::{ColorFamily, ColorRange, DitherType, VideoFormat, VsResult};

/// 帧或节点的几何信息
///
/// 宽高为 0 表示分辨率可变, 格式为 `None` 表示格式可变.
pub trait FrameGeometry {
    /// 宽度 (像素)
    fn width(&self) -> u32;

    /// 高度 (像素)
    fn height(&self) -> u32;

    /// 格式描述
    fn format(&self) -> Option<VideoFormat>;
}

/// 宿主视频节点
///
/// 由宿主环境实现. 所有方法都只构造新节点, 不修改 `self`.
pub trait VideoNode: FrameGeometry + Clone {
    /// 帧数
    fn num_frames(&self) -> usize;

    /// 截取 `[start, end)` 区间的帧
    fn trim(&self, start: usize, end: usize) -> VsResult<Self>;

    /// 在末尾拼接另一个节点
    fn splice(&self, other: &Self) -> VsResult<Self>;

    /// 从 `clips[i]` 取第 `planes[i]` 个平面, 组合为 `family` 颜色族的新节点
    fn shuffle_planes(clips: &[Self], planes: &[usize], family: ColorFamily) -> VsResult<Self>;

    /// 最近邻重采样到新格式 (位深/采样类型/范围转换由宿主完成)
    fn resize_point(&self, params: &ResizeParams) -> VsResult<Self>;
}

/// 交给宿主重采样操作的参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeParams {
    /// 目标格式
    pub format: VideoFormat,
    /// 输出范围, `None` 表示沿用输入
    pub range: Option<ColorRange>,
    /// 输入范围, `None` 表示沿用节点属性
    pub range_in: Option<ColorRange>,
    /// 抖动算法
    pub dither_type: DitherType,
}
