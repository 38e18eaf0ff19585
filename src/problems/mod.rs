//! Worked interview-style problems built on the structures in this crate.
//!
//! Each submodule groups one family of problems. Functions are free-standing
//! and take the smallest input type that expresses the problem.

pub mod bits;
pub mod linked_lists;
pub mod recursion;
pub mod strings;
pub mod trees_graphs;

pub use bits::insert_bits;
pub use linked_lists::{kth_to_last, remove_duplicates};
pub use recursion::{robot_path, ways_to_climb};
pub use strings::{is_palindrome_permutation, is_permutation, is_unique, urlify};
pub use trees_graphs::{minimal_bst, route_exists};
