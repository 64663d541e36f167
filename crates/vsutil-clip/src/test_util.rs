//! 单元测试用的内存宿主节点.

use vsutil_core::{ColorFamily, VideoFormat, VsError, VsResult};

use crate::{FrameGeometry, ResizeParams, VideoNode};

/// 只记录元数据的内存节点
///
/// `frames` 中每个元素为 `"标签:源帧号"`, 用于检查截取与拼接顺序.
#[derive(Debug, Clone, PartialEq)]
pub struct MockClip {
    pub format: Option<VideoFormat>,
    pub width: u32,
    pub height: u32,
    pub frames: Vec<String>,
    pub last_resize: Option<ResizeParams>,
    pub source_planes: Vec<usize>,
}

impl MockClip {
    pub fn blank(format: VideoFormat, width: u32, height: u32, length: usize) -> Self {
        Self::tagged("blank", format, width, height, length)
    }

    pub fn tagged(tag: &str, format: VideoFormat, width: u32, height: u32, length: usize) -> Self {
        Self {
            format: Some(format),
            width,
            height,
            frames: (0..length).map(|i| format!("{tag}:{i}")).collect(),
            last_resize: None,
            source_planes: Vec::new(),
        }
    }

    pub fn with_variable_format(&self) -> Self {
        Self {
            format: None,
            ..self.clone()
        }
    }
}

impl FrameGeometry for MockClip {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> Option<VideoFormat> {
        self.format
    }
}

impl VideoNode for MockClip {
    fn num_frames(&self) -> usize {
        self.frames.len()
    }

    fn trim(&self, start: usize, end: usize) -> VsResult<Self> {
        if start >= end || end > self.frames.len() {
            return Err(VsError::Host(format!(
                "trim 越界: [{start}, {end}) / {}",
                self.frames.len()
            )));
        }
        Ok(Self {
            frames: self.frames[start..end].to_vec(),
            ..self.clone()
        })
    }

    fn splice(&self, other: &Self) -> VsResult<Self> {
        if self.format != other.format || (self.width, self.height) != (other.width, other.height) {
            return Err(VsError::Host("splice: 格式或尺寸不一致".into()));
        }
        let mut frames = self.frames.clone();
        frames.extend(other.frames.iter().cloned());
        Ok(Self {
            frames,
            ..self.clone()
        })
    }

    fn shuffle_planes(clips: &[Self], planes: &[usize], family: ColorFamily) -> VsResult<Self> {
        let first = clips
            .first()
            .ok_or_else(|| VsError::Host("shuffle_planes: 没有输入".into()))?;
        let format = first
            .format
            .ok_or_else(|| VsError::Host("shuffle_planes: 可变格式".into()))?;

        if family == ColorFamily::Gray {
            let p = planes[0];
            if p >= format.num_planes() as usize {
                return Err(VsError::Host(format!("shuffle_planes: 平面 {p} 不存在")));
            }
            let (w, h) = format.plane_size(p, first.width, first.height);
            return Ok(Self {
                format: Some(format.to_gray()),
                width: w,
                height: h,
                source_planes: vec![p],
                ..first.clone()
            });
        }

        let chroma = clips.get(1).unwrap_or(first);
        let ssw = (first.width / chroma.width.max(1)).trailing_zeros();
        let ssh = (first.height / chroma.height.max(1)).trailing_zeros();
        Ok(Self {
            format: Some(VideoFormat::new(
                family,
                format.sample_type,
                format.bits_per_sample,
                ssw,
                ssh,
            )),
            source_planes: planes.to_vec(),
            ..first.clone()
        })
    }

    fn resize_point(&self, params: &ResizeParams) -> VsResult<Self> {
        Ok(Self {
            format: Some(params.format),
            last_resize: Some(*params),
            ..self.clone()
        })
    }
}
