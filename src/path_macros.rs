/// Builds a [`PathIndex`](crate::path_index::PathIndex) from a flat list of
/// positions and branch names.
///
/// `path_index!(1, Superscript, 0, Denominator, 0)` is the path
/// `(1, superscript):(0, denominator):(0)`.
#[macro_export]
macro_rules! path_index {
    ($position:expr) => {
        $crate::path_index::PathIndex::level0($position)
    };
    ($position:expr, $branch:ident, $($rest:tt)+) => {
        $crate::path_index::PathIndex::at(
            $position,
            $crate::branch::Branch::$branch,
            $crate::path_index!($($rest)+),
        )
    };
}
