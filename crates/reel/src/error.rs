use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not launch {tool}: {source}")]
    ToolLaunch {
        tool: &'static str,
        source: std::io::Error,
    },
}
