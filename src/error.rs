use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

pub type StoryboardResult<T> = Result<T, StoryboardError>;

#[derive(Debug, Error, Diagnostic)]
pub enum StoryboardError {
    #[error("script is required")]
    #[diagnostic(
        code("storyboard.script_required"),
        help("enter a script with blank lines between scenes")
    )]
    ScriptRequired,
    #[error("unknown visual style '{0}'")]
    #[diagnostic(
        code("storyboard.unknown_style"),
        help("expected one of: cinematic, anime, noir, watercolor")
    )]
    UnknownStyle(String),
    #[error("unknown emotion label '{0}'")]
    #[diagnostic(code("storyboard.unknown_emotion"))]
    UnknownEmotion(String),
    #[error("resource limit exceeded: {0}")]
    #[diagnostic(code("storyboard.resource_limit"))]
    ResourceLimit(String),
    #[error("invalid configuration: {0}")]
    #[diagnostic(code("storyboard.config"))]
    Config(String),
    #[error("configuration parse error: {message}")]
    #[diagnostic(code("storyboard.config_parse"))]
    ConfigParse {
        message: String,
        #[source_code]
        src: String,
        #[label("here")]
        span: SourceSpan,
    },
    #[error("serialization error: {0}")]
    #[diagnostic(code("storyboard.serialization"))]
    Serialization(String),
    #[error("io error: {0}")]
    #[diagnostic(code("storyboard.io"))]
    Io(#[from] std::io::Error),
}
