//! Fixed catalog of model identifiers and their display metadata.

use serde::Serialize;

/// One of the five models the engine knows how to recommend.
///
/// The variant order of [`ModelId::ALL`] is the catalog order, which decides
/// ties during selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelId {
    ChatGpt,
    Claude,
    Gemini,
    DeepSeek,
    Grok,
}

impl ModelId {
    /// Every model, in catalog order.
    pub const ALL: [ModelId; 5] = [
        ModelId::ChatGpt,
        ModelId::Claude,
        ModelId::Gemini,
        ModelId::DeepSeek,
        ModelId::Grok,
    ];

    /// Wire identifier, e.g. `"deepseek"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::ChatGpt => "chatgpt",
            ModelId::Claude => "claude",
            ModelId::Gemini => "gemini",
            ModelId::DeepSeek => "deepseek",
            ModelId::Grok => "grok",
        }
    }

    /// Display metadata for this model.
    pub fn info(&self) -> &'static ModelInfo {
        // CATALOG is laid out in the same order as the enum.
        &CATALOG[*self as usize]
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display metadata attached to a [`ModelId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub id: ModelId,
    /// Human-facing name, e.g. "DeepSeek".
    pub name: &'static str,
    /// Short specialty tag used in selection reasons.
    pub specialty: &'static str,
    /// Longer label for listings.
    pub description: &'static str,
}

/// The model catalog in iteration order.
pub static CATALOG: [ModelInfo; 5] = [
    ModelInfo {
        id: ModelId::ChatGpt,
        name: "ChatGPT",
        specialty: "general",
        description: "General Purpose",
    },
    ModelInfo {
        id: ModelId::Claude,
        name: "Claude",
        specialty: "research",
        description: "Research & Analysis",
    },
    ModelInfo {
        id: ModelId::Gemini,
        name: "Gemini",
        specialty: "multimodal",
        description: "Multimodal",
    },
    ModelInfo {
        id: ModelId::DeepSeek,
        name: "DeepSeek",
        specialty: "code",
        description: "Code & Programming",
    },
    ModelInfo {
        id: ModelId::Grok,
        name: "Grok",
        specialty: "realtime",
        description: "Real-time Info",
    },
];
