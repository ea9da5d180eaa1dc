//! Keyword scorer for model selection.
//!
//! Each rule in [`RULES`] checks the lowercased query for any of its trigger
//! substrings and, on a hit, adds a fixed increment to one model. Models left
//! at zero are lifted to [`FLOOR_SCORE`], and the highest score wins with ties
//! going to the earliest model in catalog order.
//!
//! Scores live in a [`ScoreVector`] built fresh for every call, so concurrent
//! requests never observe each other's working state.

use serde::Serialize;
use serde::ser::SerializeMap;

use super::catalog::ModelId;

/// Score assigned to any model that no rule targeted.
pub const FLOOR_SCORE: u32 = 5;

/// Points a matching rule adds to its target.
pub const RULE_INCREMENT: u32 = 10;

/// Divisor turning a winning score into a confidence value.
const CONFIDENCE_SCALE: f64 = 10.0;

/// A keyword rule: any trigger present in the query adds `increment` to `target`.
#[derive(Debug, Clone, Copy)]
pub struct ScoringRule {
    pub triggers: &'static [&'static str],
    pub target: ModelId,
    pub increment: u32,
}

impl ScoringRule {
    /// Whether any trigger appears in an already-lowercased query.
    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t))
    }
}

/// Rule table, evaluated independently; several rules may fire for one query.
pub const RULES: &[ScoringRule] = &[
    ScoringRule {
        triggers: &["code", "python", "javascript", "function"],
        target: ModelId::DeepSeek,
        increment: RULE_INCREMENT,
    },
    ScoringRule {
        triggers: &["research", "analysis", "study"],
        target: ModelId::Claude,
        increment: RULE_INCREMENT,
    },
    ScoringRule {
        triggers: &["image", "vision", "picture"],
        target: ModelId::Gemini,
        increment: RULE_INCREMENT,
    },
    ScoringRule {
        triggers: &["news", "today", "current", "latest"],
        target: ModelId::Grok,
        increment: RULE_INCREMENT,
    },
    ScoringRule {
        triggers: &["write", "create", "story"],
        target: ModelId::ChatGpt,
        increment: RULE_INCREMENT,
    },
];

/// Per-call score for every catalog model, kept in catalog order.
///
/// Serializes as a JSON object whose keys follow catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreVector {
    entries: [(ModelId, u32); 5],
}

impl ScoreVector {
    /// All models at zero.
    pub fn zeroed() -> Self {
        Self {
            entries: ModelId::ALL.map(|id| (id, 0)),
        }
    }

    /// Score for a model.
    pub fn get(&self, id: ModelId) -> u32 {
        self.entries[id as usize].1
    }

    fn add(&mut self, id: ModelId, points: u32) {
        self.entries[id as usize].1 += points;
    }

    /// Iterate `(model, score)` in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (ModelId, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest-scoring model; the first in catalog order wins a tie.
    pub fn best(&self) -> (ModelId, u32) {
        let mut best = self.entries[0];
        for &(id, score) in &self.entries[1..] {
            if score > best.1 {
                best = (id, score);
            }
        }
        best
    }
}

impl Serialize for ScoreVector {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, score) in &self.entries {
            map.serialize_entry(id.as_str(), score)?;
        }
        map.end()
    }
}

/// Outcome of scoring a query, as returned by `POST /select-model`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    #[serde(rename = "selected_model")]
    pub selected: ModelId,
    #[serde(rename = "model_name")]
    pub display_name: String,
    /// Winning score divided by ten, rounded to two decimals.
    pub confidence: f64,
    pub reason: String,
    #[serde(rename = "all_scores")]
    pub scores: ScoreVector,
}

/// Score every model against `query` without applying selection.
pub fn score_models(query: &str) -> ScoreVector {
    let lowered = query.to_lowercase();
    let mut scores = ScoreVector::zeroed();

    for rule in RULES {
        if rule.matches(&lowered) {
            scores.add(rule.target, rule.increment);
        }
    }

    for entry in scores.entries.iter_mut() {
        if entry.1 == 0 {
            entry.1 = FLOOR_SCORE;
        }
    }

    scores
}

/// Pick the best model for `query`.
pub fn select_model(query: &str) -> Selection {
    let scores = score_models(query);
    let (selected, top) = scores.best();
    let info = selected.info();

    tracing::debug!(
        selected = %selected,
        score = top,
        "model selected"
    );

    Selection {
        selected,
        display_name: info.name.to_string(),
        confidence: confidence_for(top),
        reason: format!("Best choice for {} tasks", info.specialty),
        scores,
    }
}

fn confidence_for(score: u32) -> f64 {
    (f64::from(score) / CONFIDENCE_SCALE * 100.0).round() / 100.0
}
