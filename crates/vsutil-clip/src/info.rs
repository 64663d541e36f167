//! 格式与尺寸查询.

use std::path::Path;

use vsutil_core::{Subsampling, VsResult};

use crate::FrameGeometry;
use crate::guard::{require_constant_format, require_constant_resolution};

/// [`get_w`] 的默认宽高比
pub const DEFAULT_ASPECT_RATIO: f64 = 16.0 / 9.0;

/// 图像 MIME 类型 (`image/*`) 对应的文件扩展名
const IMAGE_EXTENSIONS: &[&str] = &[
    "avif", "bmp", "gif", "heic", "heif", "ico", "ief", "jpe", "jpeg", "jpg", "pbm", "pgm", "png",
    "pnm", "ppm", "ras", "rgb", "svg", "tif", "tiff", "webp", "xbm", "xpm", "xwd",
];

/// 节点的位深
pub fn get_depth<G: FrameGeometry + ?Sized>(clip: &G) -> VsResult<u32> {
    Ok(require_constant_format(clip)?.bits_per_sample)
}

/// 节点的可读色度子采样, 非 YUV/YCoCg 格式返回 `None`
pub fn get_subsampling<G: FrameGeometry + ?Sized>(clip: &G) -> VsResult<Option<Subsampling>> {
    require_constant_format(clip)?.subsampling()
}

/// 计算指定平面的尺寸 (宽, 高)
///
/// 可传入帧或节点; 节点必须分辨率与格式固定.
pub fn get_plane_size<G: FrameGeometry + ?Sized>(frame: &G, planeno: usize) -> VsResult<(u32, u32)> {
    let (width, height) = require_constant_resolution(frame)?;
    let format = require_constant_format(frame)?;
    Ok(format.plane_size(planeno, width, height))
}

/// 按高度和宽高比计算宽度
///
/// `only_even` 为真时取最近的偶数, 与多数标准分辨率一致 (如 854x480).
/// 舍入采用银行家舍入 (0.5 取偶).
pub fn get_w(height: u32, aspect_ratio: f64, only_even: bool) -> u32 {
    let width = f64::from(height) * aspect_ratio;
    if only_even {
        ((width / 2.0).round_ties_even() * 2.0) as u32
    } else {
        width.round_ties_even() as u32
    }
}

/// 文件名是否指向图像 (按扩展名对应的 MIME 类型判断, 区分大小写)
pub fn is_image(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext))
}
