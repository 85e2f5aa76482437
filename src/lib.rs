pub mod branch;
pub mod path_index;
pub mod path_macros;
pub mod path_range;
pub mod print_helpers;
