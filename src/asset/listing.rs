use std::collections::BTreeSet;

use crate::github::ReleaseAsset;
use crate::tool::Tool;

/// Marker between the name/version part of a wheel filename and its platform tag.
const PLATFORM_MARKER: &str = "-py2.py3-none-";

/// Platform tag segment of a wheel filename, if it has one.
///
/// `clang-tidy-1.0-py2.py3-none-win_amd64.whl` yields `win_amd64`.
pub fn wheel_platform(name: &str) -> Option<String> {
    let stem = name.strip_suffix(".whl").unwrap_or(name);
    stem.split_once(PLATFORM_MARKER)
        .map(|(_, platform)| platform)
        .filter(|platform| !platform.is_empty())
        .map(str::to_string)
}

/// Sorted, deduplicated platform tags `tool` is published for.
pub fn available_platforms(assets: &[ReleaseAsset], tool: Tool) -> BTreeSet<String> {
    assets
        .iter()
        .filter(|a| tool.owns_wheel(&a.name))
        .filter_map(|a| wheel_platform(&a.name))
        .collect()
}
