use crate::{asset::available_platforms, github::Release, tool::Tool};

/// Lines describing every platform `tool` is published for in `release`.
pub fn platform_listing(release: &Release, tool: Tool) -> Vec<String> {
    let mut lines = vec![format!(
        "Available platforms for {} in release {}:",
        tool, release.tag_name
    )];
    lines.extend(
        available_platforms(&release.assets, tool)
            .into_iter()
            .map(|platform| format!("  {}", platform)),
    );
    lines
}

/// Print the platforms `tool` is published for in `release`.
#[tracing::instrument(skip(release))]
pub fn list_platforms(release: &Release, tool: Tool) {
    for line in platform_listing(release, tool) {
        println!("{}", line);
    }
}
