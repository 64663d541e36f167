//! 与宿主无关的通用小工具.

use crate::error::{VsError, VsResult};

/// 表达式字符串中可出现的节点变量名, 按赋值顺序排列
///
/// 第一个输入节点名为 `x`, 第二个为 `y`, 依此类推.
pub const EXPR_VARS: &str = "xyzabcdefghijklmnopqrstuvw";

/// 返回 `value`, 为 `None` 时返回 `fallback_value`
///
/// ```
/// use vsutil_core::func::fallback;
///
/// assert_eq!(fallback(Some(5), 6), 5);
/// assert_eq!(fallback(None, 6), 6);
/// ```
pub fn fallback<T>(value: Option<T>, fallback_value: T) -> T {
    value.unwrap_or(fallback_value)
}

/// 以 `base` 为初值重复执行 `function` 共 `count` 次
///
/// ```
/// use vsutil_core::func::iterate;
///
/// assert_eq!(iterate(5, |x| x * 2, 2).unwrap(), 20);
/// ```
///
/// # 错误
/// `count` 为负数时返回 [`VsError::NegativeCount`].
pub fn iterate<T, F>(base: T, mut function: F, count: i64) -> VsResult<T>
where
    F: FnMut(T) -> T,
{
    if count < 0 {
        return Err(VsError::NegativeCount(count));
    }
    let mut v = base;
    for _ in 0..count {
        v = function(v);
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expr_vars_order() {
        assert_eq!(EXPR_VARS.len(), 26);
        assert!(EXPR_VARS.starts_with("xyza"));
        let mut letters: Vec<char> = EXPR_VARS.chars().collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 26);
    }

    fn double_number(x: i64) -> i64 {
        x * 2
    }

    #[test]
    fn test_fallback() {
        assert_eq!(fallback(None, "a value"), "a value");
        assert_eq!(fallback(Some("a value"), "another value"), "a value");
        assert_eq!(fallback(None, (0..5).sum::<i32>()), 10);
    }

    #[test]
    fn test_iterate_counts() {
        assert_eq!(iterate(2, double_number, 0).unwrap(), 2);
        assert_eq!(iterate(2, double_number, 1).unwrap(), double_number(2));
        assert_eq!(
            iterate(2, double_number, 3).unwrap(),
            double_number(double_number(double_number(2)))
        );
    }

    #[test]
    fn test_iterate_negative_count() {
        assert_eq!(
            iterate(2, double_number, -1),
            Err(VsError::NegativeCount(-1))
        );
    }

    #[test]
    fn test_iterate_with_stateful_closure() {
        let mut calls = 0;
        let out = iterate(
            String::from("a"),
            |s| {
                calls += 1;
                s + "b"
            },
            3,
        )
        .unwrap();
        assert_eq!(out, "abbb");
        assert_eq!(calls, 3);
    }
}
