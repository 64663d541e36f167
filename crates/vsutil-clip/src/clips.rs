//! 节点变换: 位深转换、平面提取/拆分/合并与片段插入.
//!
//! 实际的像素处理由宿主完成, 这里只负责参数推导与前置检查.

use log::debug;

use vsutil_core::func::fallback;
use vsutil_core::{
    ColorFamily, ColorRange, DitherType, SampleType, VsError, VsResult, resolve_enum,
};
use vsutil_scale::should_dither;

use crate::guard::require_constant_format;
use crate::{ResizeParams, VideoNode};

/// [`depth`] 的可选参数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthOptions {
    /// 输出采样类型, 默认 32 位为浮点, 其余为整数
    pub sample_type: Option<SampleType>,
    /// 输出范围, 默认沿用输入
    pub range: Option<ColorRange>,
    /// 输入范围, 默认沿用节点属性
    pub range_in: Option<ColorRange>,
    /// 抖动算法, 默认由抖动判定决定
    pub dither_type: Option<DitherType>,
}

impl DepthOptions {
    /// 从宿主原始值解析
    ///
    /// 采样类型与范围为整数 id, 抖动算法为名称. 任一值无法识别时返回
    /// [`VsError::InvalidArgument`], `var_name` 为对应参数名.
    pub fn from_raw(
        sample_type: Option<i64>,
        range: Option<i64>,
        range_in: Option<i64>,
        dither_type: Option<&str>,
    ) -> VsResult<Self> {
        Ok(Self {
            sample_type: resolve_enum(sample_type, "sample_type")?,
            range: resolve_enum(range, "range")?,
            range_in: resolve_enum(range_in, "range_in")?,
            dither_type: resolve_enum(dither_type, "dither_type")?,
        })
    }
}

/// 位深转换, 只借助宿主的最近邻重采样
///
/// 默认 32 位输出浮点, 其余输出整数. 降位深、范围转换或完整范围升位深时默认使用
/// 误差扩散抖动, 其余情况四舍五入 (见 [`should_dither`]).
///
/// 位深、采样类型均不变且 `range_in == range` 时原样返回节点.
pub fn depth<N: VideoNode>(clip: &N, bitdepth: u32, options: DepthOptions) -> VsResult<N> {
    let format = require_constant_format(clip)?;

    let curr_depth = format.bits_per_sample;
    let sample_type = fallback(options.sample_type, SampleType::implied_by_depth(bitdepth));

    if (curr_depth, format.sample_type, options.range_in) == (bitdepth, sample_type, options.range)
    {
        debug!("depth: {format} 无需转换");
        return Ok(clip.clone());
    }

    let dither = should_dither(
        curr_depth,
        bitdepth,
        options.range_in,
        options.range,
        Some(format.sample_type),
        Some(sample_type),
    );
    let dither_type = fallback(
        options.dither_type,
        if dither {
            DitherType::ErrorDiffusion
        } else {
            DitherType::None
        },
    );

    let params = ResizeParams {
        format: format.with_depth(bitdepth, sample_type),
        range: options.range,
        range_in: options.range_in,
        dither_type,
    };
    debug!(
        "depth: {format} → {}, range_in={:?}, range={:?}, dither={dither_type}",
        params.format, params.range_in, params.range
    );
    clip.resize_point(&params)
}

/// 提取指定平面, 返回灰度节点
///
/// 单平面节点取平面 0 时原样返回.
pub fn plane<N: VideoNode>(clip: &N, planeno: usize) -> VsResult<N> {
    let format = require_constant_format(clip)?;
    let num_planes = format.num_planes();
    if planeno >= num_planes as usize {
        return Err(VsError::PlaneOutOfRange {
            plane: planeno,
            num_planes,
        });
    }
    if num_planes == 1 && planeno == 0 {
        return Ok(clip.clone());
    }
    N::shuffle_planes(std::slice::from_ref(clip), &[planeno], ColorFamily::Gray)
}

/// 拆分为各平面
pub fn split<N: VideoNode>(clip: &N) -> VsResult<Vec<N>> {
    let format = require_constant_format(clip)?;
    (0..format.num_planes() as usize)
        .map(|p| plane(clip, p))
        .collect()
}

/// 将三个平面合并为 `family` 颜色族的三平面节点
pub fn join<N: VideoNode>(planes: &[N], family: ColorFamily) -> VsResult<N> {
    if !family.is_three_plane() {
        return Err(VsError::InvalidColorFamily(format!(
            "合并要求三平面颜色族, 实际为 {family}"
        )));
    }
    N::shuffle_planes(planes, &[0, 0, 0], family)
}

/// 提取亮度平面
///
/// 单平面灰度节点视为亮度, 原样返回.
pub fn get_y<N: VideoNode>(clip: &N) -> VsResult<N> {
    let format = require_constant_format(clip)?;
    if !format.color_family.has_luma() {
        return Err(VsError::NoLumaPlane);
    }
    plane(clip, 0)
}

/// 用较短的 `insert` 替换 `clip` 中从 `start_frame` 开始的帧
///
/// 插入片段不能超出源片段末尾, 结果与源片段帧数相同.
pub fn insert_clip<N: VideoNode>(clip: &N, insert: &N, start_frame: usize) -> VsResult<N> {
    let total = clip.num_frames();
    let length = insert.num_frames();
    let frame_after_insert = start_frame
        .checked_add(length)
        .filter(|&end| end <= total)
        .ok_or(VsError::InsertTooLong {
            start: start_frame,
            length,
            total,
        })?;

    if start_frame == 0 {
        if length == total {
            return Ok(insert.clone());
        }
        return insert.splice(&clip.trim(length, total)?);
    }

    let pre = clip.trim(0, start_frame)?;
    if frame_after_insert == total {
        return pre.splice(insert);
    }
    let post = clip.trim(frame_after_insert, total)?;
    pre.splice(insert)?.splice(&post)
}
