use crate::github::ReleaseAsset;
use crate::tool::Tool;

/// Fixed python/abi segment every tool wheel carries.
const WHEEL_ABI_SEGMENT: &str = "py2.py3-none-";

/// Trait for selecting an asset from a list of available assets
pub trait AssetPicker: Send + Sync {
    /// Pick the most appropriate asset from the given list
    ///
    /// Returns `None` if no suitable asset is found
    fn pick<'a>(&self, assets: &'a [ReleaseAsset]) -> Option<&'a ReleaseAsset>;
}

/// Picks the wheel of one tool for the first platform tag that has one.
pub struct WheelPicker {
    prefixes: [String; 2],
    platform_tags: Vec<String>,
}

impl WheelPicker {
    pub fn new(tool: Tool, platform_tags: Vec<String>, version: Option<&str>) -> Self {
        let prefix = |name: &str| match version {
            Some(version) => format!("{}-{}-{}", name, version, WHEEL_ABI_SEGMENT),
            None => format!("{}-{}", name, WHEEL_ABI_SEGMENT),
        };

        Self {
            prefixes: [prefix(tool.as_str()), prefix(tool.underscored())],
            platform_tags,
        }
    }

    fn matches(&self, name: &str, platform_tag: &str) -> bool {
        self.prefixes.iter().any(|p| name.starts_with(p.as_str()))
            && name.ends_with(".whl")
            && name.contains(platform_tag)
    }
}

impl AssetPicker for WheelPicker {
    /// Tag order wins over list order: every asset is checked against the
    /// first tag before any asset is checked against the second.
    fn pick<'a>(&self, assets: &'a [ReleaseAsset]) -> Option<&'a ReleaseAsset> {
        self.platform_tags
            .iter()
            .find_map(|tag| assets.iter().find(|a| self.matches(&a.name, tag)))
    }
}

/// Find the wheel asset for `tool` matching one of `platform_tags`.
pub fn find_wheel_asset<'a>(
    assets: &'a [ReleaseAsset],
    tool: Tool,
    platform_tags: &[String],
    version: Option<&str>,
) -> Option<&'a ReleaseAsset> {
    WheelPicker::new(tool, platform_tags.to_vec(), version).pick(assets)
}
