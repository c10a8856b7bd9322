/// Centralized error mapping for commands.
///
/// Uses the alternate format so the whole context chain reaches the caller,
/// e.g. `failed to load projects collection: projects/en/x.mdx: missing frontmatter`.
pub fn map_err(err: anyhow::Error) -> String {
    format!("{err:#}")
}
