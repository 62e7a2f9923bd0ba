//! Domain logic - pure branch-name rules independent of git operations

pub mod branch;

pub use branch::{check_prefix, is_protected, PrefixCheck, RECOGNIZED_PREFIXES};
