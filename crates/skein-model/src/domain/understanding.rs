use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

/// One utterance understood by the speech pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Understanding {
    /// Raw recognised text.
    pub text: String,
    /// Intent name assigned by the language-understanding stage.
    pub intent: String,
    /// Language code the utterance was recognised in (e.g. `"en"`).
    pub lang: String,
}

impl Understanding {
    pub fn new(
        text: impl Into<String>,
        intent: impl Into<String>,
        lang: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            intent: intent.into(),
            lang: lang.into(),
        }
    }

    pub fn language(&self) -> LanguageTag {
        LanguageTag(self.lang.clone())
    }
}

/// Language of the last understanding, stored on its own when a skill is asked to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct LanguageTag(pub String);
