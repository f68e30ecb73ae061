//! spt-pairs Common Library
//!
//! 入出力を伴わない純粋なロジック（マニフェスト解析・ペア列挙・引数構築）

pub mod cleanup;
pub mod error;
pub mod invocation;
pub mod manifest;
pub mod pairs;

pub use cleanup::{is_stale_result, select_stale_results, validate_prefix, DEFAULT_RESULT_PREFIX};
pub use error::{Error, Result};
pub use invocation::{build_tool_args, ToolPaths};
pub use manifest::{extract_filename, parse_manifest};
pub use pairs::{all_pairs, pair_count, Pair};
