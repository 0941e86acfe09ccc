pub mod peek;

// Re-exported so that crates using the snapshot macros only need a dev-dependency on us.
pub use insta;

/// Snapshots `$output` as yaml, recording the source text it was produced from.
#[macro_export]
macro_rules! assert_yaml_snapshot_with_source {
    ($source:expr => $output:expr) => {{
        $crate::insta::with_settings!({
            info => &$source,
            omit_expression => true,
        }, {
            $crate::insta::assert_yaml_snapshot!($output);
        })
    }};
}

/// Snapshots the text `$output`, recording the source text it was produced from.
#[macro_export]
macro_rules! assert_snapshot_with_source {
    ($source:expr => $output:expr) => {{
        $crate::insta::with_settings!({
            info => &$source,
            omit_expression => true,
        }, {
            $crate::insta::assert_snapshot!($output);
        })
    }};
}
