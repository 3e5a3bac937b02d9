use serde::Deserialize;

/// How statement and expression subtrees are rendered, fixed for a whole traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderStrategy {
    /// Everything is emitted as nested document nodes.
    Structured,
    /// Worker statements are emitted as one line of text each, and reply
    /// statements carry their text form next to the structured children.
    #[default]
    StructuredWithText,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub strategy: RenderStrategy,
}

impl ModelConfig {
    pub fn structured() -> Self {
        Self { strategy: RenderStrategy::Structured }
    }

    pub fn with_text(&self) -> bool {
        matches!(self.strategy, RenderStrategy::StructuredWithText)
    }
}
