use thiserror::Error;

pub type CarouselResult<T> = Result<T, CarouselError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("slide index {index} out of range for {slide_count} slides")]
    InvalidSlideIndex { index: usize, slide_count: usize },

    #[error("plugin `{plugin}` failed to resolve: {reason}")]
    PluginResolution { plugin: String, reason: String },

    #[error("unknown plugin `{0}`")]
    UnknownPlugin(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
