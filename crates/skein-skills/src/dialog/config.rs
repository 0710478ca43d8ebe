use std::{fmt, time::Duration};

use skein_model::{ModelError, Options};

const KEY_ANY: &str = "any";
const KEY_INTENTS: &str = "intents";
const KEY_TIMEOUT_MS: &str = "timeout-ms";
const KEY_SET_LANGUAGE: &str = "set-language";
const KEY_SLOT: &str = "slot";

const DEFAULT_SLOT: &str = "NLUSlot";

/// What counts as a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentMatch {
    /// First understanding of any kind.
    Any,
    /// First understanding whose intent is listed; earlier entries win.
    Intents(Vec<String>),
}

/// Parsed `wait-for-intent` options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitForIntentConfig {
    pub matcher: IntentMatch,
    /// `None` waits forever.
    pub timeout: Option<Duration>,
    /// Also store the language of the understanding.
    pub set_language: bool,
    /// Memory key for the understanding.
    pub slot: String,
}

impl WaitForIntentConfig {
    /// Parse options.
    ///
    /// Rules:
    /// - `any` and `intents` are mutually exclusive;
    /// - without `any`, `intents` must name at least one intent;
    /// - `timeout-ms <= 0` disables the timeout.
    pub fn from_options(options: &Options) -> Result<Self, ModelError> {
        let any = options.optional_bool(KEY_ANY, false)?;
        let matcher = if any {
            if options.contains(KEY_INTENTS) {
                return Err(ModelError::ConflictingOptions(format!(
                    "cannot use '{KEY_ANY}' and '{KEY_INTENTS}' together"
                )));
            }
            IntentMatch::Any
        } else {
            let intents = options.list(KEY_INTENTS)?;
            if intents.is_empty() {
                return Err(ModelError::InvalidOption {
                    key: KEY_INTENTS.into(),
                    value: options.optional_str(KEY_INTENTS, "").into(),
                });
            }
            IntentMatch::Intents(intents)
        };

        let timeout_ms = options.optional_i64(KEY_TIMEOUT_MS, -1)?;
        let timeout = u64::try_from(timeout_ms)
            .ok()
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);

        Ok(Self {
            matcher,
            timeout,
            set_language: options.optional_bool(KEY_SET_LANGUAGE, false)?,
            slot: options.optional_str(KEY_SLOT, DEFAULT_SLOT).to_string(),
        })
    }
}

impl fmt::Display for WaitForIntentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let matcher = match &self.matcher {
            IntentMatch::Any => "any".to_string(),
            IntentMatch::Intents(list) => list.join(";"),
        };
        write!(
            f,
            "WaitForIntentConfig(match={matcher}, timeout_ms={:?}, set_language={}, slot='{}')",
            self.timeout.map(|t| t.as_millis()),
            self.set_language,
            self.slot,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_keep_order_and_skip_blanks() {
        let opts = Options::new().with("intents", "confirm; ;deny;");
        let cfg = WaitForIntentConfig::from_options(&opts).unwrap();

        assert_eq!(
            cfg.matcher,
            IntentMatch::Intents(vec!["confirm".into(), "deny".into()])
        );
        assert_eq!(cfg.timeout, None);
        assert!(!cfg.set_language);
        assert_eq!(cfg.slot, "NLUSlot");
    }

    #[test]
    fn any_with_intents_is_a_conflict() {
        let opts = Options::new().with("any", "true").with("intents", "confirm");
        assert!(matches!(
            WaitForIntentConfig::from_options(&opts),
            Err(ModelError::ConflictingOptions(_))
        ));
    }

    #[test]
    fn intents_are_required_without_any() {
        assert!(matches!(
            WaitForIntentConfig::from_options(&Options::new()),
            Err(ModelError::MissingOption(_))
        ));
        assert!(matches!(
            WaitForIntentConfig::from_options(&Options::new().with("intents", " ; ")),
            Err(ModelError::InvalidOption { .. })
        ));
    }

    #[test]
    fn only_positive_timeouts_are_kept() {
        let parse = |v: &str| {
            let opts = Options::new().with("any", "yes").with("timeout-ms", v);
            WaitForIntentConfig::from_options(&opts).unwrap().timeout
        };
        assert_eq!(parse("-1"), None);
        assert_eq!(parse("0"), None);
        assert_eq!(parse("1500"), Some(Duration::from_millis(1_500)));
    }

    #[test]
    fn language_and_slot_options() {
        let opts = Options::new()
            .with("any", "1")
            .with("set-language", "true")
            .with("slot", "LastOrder");
        let cfg = WaitForIntentConfig::from_options(&opts).unwrap();

        assert_eq!(cfg.matcher, IntentMatch::Any);
        assert!(cfg.set_language);
        assert_eq!(cfg.slot, "LastOrder");
    }
}
