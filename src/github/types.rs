use serde::{Deserialize, Serialize};

/// Represents a GitHub release asset
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct ReleaseAsset {
    pub name: String,
    pub size: u64,
    pub browser_download_url: String,
}

/// Represents a GitHub release
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

impl Release {
    /// Tag name with any leading `v` removed, as embedded in wheel filenames.
    pub fn version(&self) -> &str {
        self.tag_name.trim_start_matches('v')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_deserialize_minimal() {
        let release: Release = serde_json::from_str(r#"{"tag_name": "v20.1.8"}"#).unwrap();
        assert_eq!(release.tag_name, "v20.1.8");
        assert!(release.assets.is_empty());
    }

    #[test]
    fn test_release_deserialize_ignores_unknown_fields() {
        let release: Release = serde_json::from_str(
            r#"{
                "tag_name": "v20.1.8",
                "html_url": "https://github.com/cpp-linter/clang-tools-wheel/releases/tag/v20.1.8",
                "assets": [
                    {
                        "name": "clang_format-20.1.8-py2.py3-none-win_amd64.whl",
                        "size": 1048576,
                        "browser_download_url": "https://example.com/a.whl",
                        "content_type": "application/octet-stream"
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(release.assets.len(), 1);
        assert_eq!(release.assets[0].size, 1048576);
    }

    #[test]
    fn test_release_version_strips_v() {
        let release = Release {
            tag_name: "v20.1.8".into(),
            ..Default::default()
        };
        assert_eq!(release.version(), "20.1.8");

        let release = Release {
            tag_name: "20.1.8".into(),
            ..Default::default()
        };
        assert_eq!(release.version(), "20.1.8");
    }
}
