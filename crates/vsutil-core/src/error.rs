//! 统一错误类型定义.
//!
//! 所有 vsutil crate 共用的错误类型, 支持跨模块传播.

use thiserror::Error;

/// vsutil 统一错误类型
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VsError {
    /// 枚举参数无法解析, 附带全部合法取值
    #[error("{var_name} 必须取以下值之一: {}", .legal.join(", "))]
    InvalidArgument {
        /// 出错的参数名
        var_name: String,
        /// 合法取值的可读形式, 如 `<vsutil.Range.LIMITED: 0>`
        legal: Vec<String>,
    },

    /// 重复次数为负数
    #[error("次数不能为负数: {0}")]
    NegativeCount(i64),

    /// 位深超出 1-32, 或不足 8 位却需要有限范围峰值/偏移
    #[error("不支持的位深: {0}")]
    UnsupportedDepth(u32),

    /// 片段格式可变
    #[error("不支持可变格式的片段")]
    VariableFormat,

    /// 片段分辨率可变
    #[error("不支持可变分辨率的片段")]
    VariableResolution,

    /// 未知的色度子采样组合
    #[error("未知的色度子采样: w={w}, h={h}")]
    UnknownSubsampling {
        /// log2 水平子采样
        w: u32,
        /// log2 垂直子采样
        h: u32,
    },

    /// 平面索引超出范围
    #[error("平面索引 {plane} 超出范围 (共 {num_planes} 个平面)")]
    PlaneOutOfRange {
        /// 请求的平面索引
        plane: usize,
        /// 格式的平面数量
        num_planes: u32,
    },

    /// 颜色族不满足要求
    #[error("颜色族不满足要求: {0}")]
    InvalidColorFamily(String),

    /// 片段没有亮度平面
    #[error("片段必须包含亮度平面")]
    NoLumaPlane,

    /// 插入片段超出源片段末尾
    #[error("插入片段过长: 起始帧 {start} + 长度 {length} 超出源片段帧数 {total}")]
    InsertTooLong {
        /// 插入起始帧
        start: usize,
        /// 插入片段长度
        length: usize,
        /// 源片段帧数
        total: usize,
    },

    /// 宿主环境返回的错误
    #[error("宿主错误: {0}")]
    Host(String),
}

/// vsutil 统一 Result 类型
pub type VsResult<T> = Result<T, VsError>;
