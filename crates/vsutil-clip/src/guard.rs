//! 前置条件检查.
//!
//! 在调用宿主之前确认节点格式与分辨率固定.

use vsutil_core::{VideoFormat, VsError, VsResult};

use crate::FrameGeometry;

/// 要求格式固定, 返回格式描述
pub fn require_constant_format<G: FrameGeometry + ?Sized>(clip: &G) -> VsResult<VideoFormat> {
    clip.format().ok_or(VsError::VariableFormat)
}

/// 要求分辨率固定, 返回 (宽, 高)
pub fn require_constant_resolution<G: FrameGeometry + ?Sized>(clip: &G) -> VsResult<(u32, u32)> {
    let (w, h) = (clip.width(), clip.height());
    if w == 0 || h == 0 {
        return Err(VsError::VariableResolution);
    }
    Ok((w, h))
}
