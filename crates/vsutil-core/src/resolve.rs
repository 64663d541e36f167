//! 枚举参数解析.
//!
//! 宿主 API 常以整数 id 或字符串传递枚举值. 本模块把原始值解析为强类型枚举,
//! 解析失败时返回列出全部合法取值的 [`VsError::InvalidArgument`].

use crate::error::{VsError, VsResult};

/// 可枚举全部取值的枚举类型
pub trait EnumValues: Sized + Copy + 'static {
    /// 错误信息中变体名前的限定前缀
    ///
    /// 本库的枚举带模块与类型名 (如 `vsutil.Range`), 宿主枚举只带 `vapoursynth`.
    const QUALIFIER: &'static str;

    /// 全部变体, 按原始值顺序
    const VARIANTS: &'static [Self];

    /// 变体名 (如 `LIMITED`)
    fn variant_name(self) -> &'static str;

    /// 原始值的可读形式 (整数直接输出, 字符串带引号)
    fn value_repr(self) -> String;
}

/// 从原始值 `R` 查找对应的枚举变体
pub trait FromRaw<R>: EnumValues {
    /// 查找失败返回 `None`
    fn from_raw(raw: R) -> Option<Self>;
}

/// 以 `<限定前缀.NAME: value>` 形式列出枚举的全部取值
pub fn readable_enums<E: EnumValues>() -> Vec<String> {
    E::VARIANTS
        .iter()
        .map(|v| format!("<{}.{}: {}>", E::QUALIFIER, v.variant_name(), v.value_repr()))
        .collect()
}

/// 解析可选的原始枚举值
///
/// - `None` 原样返回 `Ok(None)`
/// - 原始值无对应变体时返回 [`VsError::InvalidArgument`], 错误信息列出全部合法取值
pub fn resolve_enum<E, R>(value: Option<R>, var_name: &str) -> VsResult<Option<E>>
where
    E: FromRaw<R>,
{
    let Some(raw) = value else {
        return Ok(None);
    };
    match E::from_raw(raw) {
        Some(v) => Ok(Some(v)),
        None => {
            log::debug!("枚举参数解析失败: {var_name} ({})", E::QUALIFIER);
            Err(VsError::InvalidArgument {
                var_name: var_name.to_string(),
                legal: readable_enums::<E>(),
            })
        }
    }
}
