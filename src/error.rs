/// Errors returned by the fallible parts of the public API.
///
/// Rendering itself never fails.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StyledMarkdownError {
    #[error("unknown theme preset: {0}")]
    UnknownTheme(String),
}
