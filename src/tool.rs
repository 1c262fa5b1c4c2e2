use std::fmt;

/// Tools published as wheels in the release feed.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    ClangFormat,
    ClangTidy,
}

impl Tool {
    /// Hyphenated spelling, e.g. `clang-format`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::ClangFormat => "clang-format",
            Tool::ClangTidy => "clang-tidy",
        }
    }

    /// Underscored spelling used by normalized wheel names, e.g. `clang_format`.
    pub fn underscored(&self) -> &'static str {
        match self {
            Tool::ClangFormat => "clang_format",
            Tool::ClangTidy => "clang_tidy",
        }
    }

    /// Whether `name` is a wheel of this tool under either spelling.
    pub fn owns_wheel(&self, name: &str) -> bool {
        (name.starts_with(&format!("{}-", self.as_str()))
            || name.starts_with(&format!("{}-", self.underscored())))
            && name.ends_with(".whl")
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_tool_spellings() {
        assert_eq!(Tool::ClangFormat.to_string(), "clang-format");
        assert_eq!(Tool::ClangFormat.underscored(), "clang_format");
        assert_eq!(Tool::ClangTidy.as_str(), "clang-tidy");
        assert_eq!(Tool::ClangTidy.underscored(), "clang_tidy");
    }

    #[test]
    fn test_tool_value_names_match_spelling() {
        for tool in Tool::value_variants() {
            let value = tool.to_possible_value().unwrap();
            assert_eq!(value.get_name(), tool.as_str());
        }
    }

    #[test]
    fn test_owns_wheel() {
        let tool = Tool::ClangTidy;
        assert!(tool.owns_wheel("clang-tidy-1.0-py2.py3-none-win_amd64.whl"));
        assert!(tool.owns_wheel("clang_tidy-1.0-py2.py3-none-win_amd64.whl"));
        assert!(!tool.owns_wheel("clang-tidy-1.0.tar.gz"));
        assert!(!tool.owns_wheel("clang-format-1.0-py2.py3-none-win_amd64.whl"));
        assert!(!tool.owns_wheel("clang-tidyx-1.0-py2.py3-none-win_amd64.whl"));
    }
}
