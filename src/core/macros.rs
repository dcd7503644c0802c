//! 核心宏定义

/// 用字段默认值为配置结构体实现 `Default`
///
/// 使用示例:
/// ```rust
/// use particle_trail::impl_default;
///
/// struct FadeSettings {
///     alpha: u8,
///     enabled: bool,
/// }
///
/// impl_default!(FadeSettings {
///     alpha: 25,
///     enabled: true,
/// });
///
/// assert_eq!(FadeSettings::default().alpha, 25);
/// ```
#[macro_export]
macro_rules! impl_default {
    ($struct_name:ident {
        $($field:ident: $value:expr),* $(,)?
    }) => {
        impl Default for $struct_name {
            fn default() -> Self {
                Self {
                    $($field: $value),*
                }
            }
        }
    };
}
