//! Query analysis: word count, complexity bucket, and task classification.

use serde::Serialize;

/// Words per complexity point.
const WORDS_PER_COMPLEXITY: usize = 5;

/// Upper bound on the complexity value.
pub const MAX_COMPLEXITY: usize = 10;

/// Number of leading tokens echoed back as keywords.
const SAMPLE_KEYWORDS: usize = 5;

/// Coarse classification of what a query is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Programming,
    Research,
    Multimodal,
    Realtime,
    General,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Programming => "programming",
            TaskType::Research => "research",
            TaskType::Multimodal => "multimodal",
            TaskType::Realtime => "realtime",
            TaskType::General => "general",
        }
    }

    /// Classify a query. The first matching marker wins.
    pub fn classify(query: &str) -> Self {
        let lowered = query.to_lowercase();
        TASK_MARKERS
            .iter()
            .find(|(marker, _)| lowered.contains(marker))
            .map(|(_, task)| *task)
            .unwrap_or(TaskType::General)
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Priority-ordered markers for [`TaskType::classify`].
const TASK_MARKERS: &[(&str, TaskType)] = &[
    ("code", TaskType::Programming),
    ("research", TaskType::Research),
    ("image", TaskType::Multimodal),
    ("news", TaskType::Realtime),
];

/// Result of analyzing a query, as returned by `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The query exactly as received.
    pub query: String,
    /// `word_count / 5`, capped at 10.
    pub complexity: usize,
    pub task_type: TaskType,
    pub word_count: usize,
    /// Up to the first five whitespace-separated tokens, original casing.
    pub keywords: Vec<String>,
}

/// Unicode whitespace plus the ASCII information separators (U+001C..U+001F),
/// which `char::is_whitespace` leaves out.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Whitespace-delimited tokens, with runs of separators collapsed.
fn tokens(query: &str) -> impl Iterator<Item = &str> {
    query.split(is_separator).filter(|t| !t.is_empty())
}

/// Analyze a query.
pub fn analyze(query: &str) -> Analysis {
    let word_count = tokens(query).count();

    Analysis {
        query: query.to_string(),
        complexity: (word_count / WORDS_PER_COMPLEXITY).min(MAX_COMPLEXITY),
        task_type: TaskType::classify(query),
        word_count,
        keywords: tokens(query)
            .take(SAMPLE_KEYWORDS)
            .map(str::to_string)
            .collect(),
    }
}
