macro_rules! debug_log {
    ($target: ident: $($args: tt)*) => {
        if cfg!(feature = "debug-logs") {
            eprintln!("[{}] {}", stringify!($target), format_args!($($args)*));
        }
    };
}

/// Builds a [`PropMap`](crate::props::PropMap).
///
/// Keys convert via `Into<String>`, values via `Into<PropValue>`.
#[macro_export]
macro_rules! prop_map {
    {$($k: expr => $v: expr),* $(,)?} => {{
        #[allow(unused_mut)]
        let mut map = $crate::props::PropMap::new();
        $(map.insert($k.into(), $v.into());)*
        map
    }}
}
