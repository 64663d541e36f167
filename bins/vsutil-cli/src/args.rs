//! 命令行参数解析辅助.

use std::str::FromStr;

use vsutil_core::{ColorRange, SampleType};

/// 解析宽高比字符串 (如 "16/9" 或 "1.85")
pub(crate) fn parse_aspect(s: &str) -> Result<f64, String> {
    let ratio = if let Some(slash) = s.find('/') {
        let num: f64 = s[..slash]
            .trim()
            .parse()
            .map_err(|_| format!("无效的宽高比分子: '{s}'"))?;
        let den: f64 = s[slash + 1..]
            .trim()
            .parse()
            .map_err(|_| format!("无效的宽高比分母: '{s}'"))?;
        if den == 0.0 {
            return Err(format!("宽高比分母不能为 0: '{s}'"));
        }
        num / den
    } else {
        s.trim()
            .parse()
            .map_err(|_| format!("无效的宽高比: '{s}'"))?
    };
    if ratio.is_finite() && ratio > 0.0 {
        Ok(ratio)
    } else {
        Err(format!("宽高比必须为正数: '{s}'"))
    }
}

/// 解析色彩范围 (limited/tv/full/pc 或 0/1)
pub(crate) fn parse_range(s: &str) -> Result<ColorRange, String> {
    ColorRange::from_str(s).map_err(|e| e.to_string())
}

/// 解析采样类型 (integer/int/float 或 0/1)
pub(crate) fn parse_sample_type(s: &str) -> Result<SampleType, String> {
    match s.to_ascii_lowercase().as_str() {
        "integer" | "int" | "0" => Ok(SampleType::Integer),
        "float" | "1" => Ok(SampleType::Float),
        _ => Err(format!("无效的采样类型: '{s}' (可选 integer, float)")),
    }
}
