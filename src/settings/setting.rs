//! A single named setting and its update pipeline.
//!
//! A [`Setting`] owns one stored value plus the metadata needed to arbitrate
//! updates: the [`Source`] that produced the current value, the policy and
//! frozen flags, and the preprocess/validate/derive pipeline declared by the
//! schema. All mutation goes through [`Setting::update`]; there is no other
//! write path, so precedence and validation can never be bypassed.

use serde_json::Value;

use crate::schema::SettingSpec;
use crate::settings::{Settings, Source};
use crate::{Error, Result};

/// Pure transform run before validation (e.g. string→int, trailing-slash
/// trim, comma splitting). Returns a reason string on failure.
pub type Preprocessor = fn(&Value) -> std::result::Result<Value, String>;

/// Predicate run against the preprocessed value. Returns a reason string on
/// failure.
pub type Validator = fn(&Value) -> std::result::Result<(), String>;

/// Pure function computing the exposed value from the stored one, possibly
/// reading other settings' resolved values through the registry.
pub type Deriver = fn(Value, &Settings) -> Value;

/// One named configuration value with its update/validation/derivation
/// metadata.
///
/// Invariant: `raw` has passed every validator (applied to the output of
/// every preprocessor) since its last successful update. A never-updated
/// setting holds its schema default, which is exempt from validation.
#[derive(Debug, Clone)]
pub struct Setting {
    name: &'static str,
    raw: Value,
    source: Source,
    is_policy: bool,
    frozen: bool,
    preprocessors: &'static [Preprocessor],
    validators: &'static [Validator],
    derivers: &'static [Deriver],
}

impl Setting {
    /// Seed a setting from its schema spec.
    ///
    /// The seed source is chosen by the registry: `Base` for ordinary
    /// settings (any real update overrides the default) and `Args` for
    /// policy settings (minimal priority under the inverted comparator).
    /// The default is stored as-is, without running the pipeline.
    pub fn new(spec: &SettingSpec, seed: Source) -> Self {
        Self {
            name: spec.name,
            raw: (spec.default)(),
            source: seed,
            is_policy: spec.is_policy,
            frozen: spec.frozen,
            preprocessors: spec.preprocessors,
            validators: spec.validators,
            derivers: spec.derivers,
        }
    }

    /// The setting's declared name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The stored value, before derivation.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// The source that produced the current value.
    pub fn source(&self) -> Source {
        self.source
    }

    /// Whether source precedence is inverted for this setting.
    pub fn is_policy(&self) -> bool {
        self.is_policy
    }

    /// Whether this individual setting rejects updates.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Make this individual setting permanently read-only.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// The resolved value: every deriver applied in order to a clone of the
    /// stored value.
    ///
    /// Recomputed fresh on every call. Derivers read other settings whose
    /// resolved values change between reads, so this must not be memoized.
    /// A `null` stored value short-circuits (derivers are skipped).
    pub fn value(&self, ctx: &Settings) -> Value {
        let mut value = self.raw.clone();
        if value.is_null() {
            return value;
        }
        for derive in self.derivers {
            value = derive(value, ctx);
        }
        value
    }

    /// Apply an update from `source`.
    ///
    /// Fails with [`Error::Frozen`] if the setting is frozen. An update that
    /// loses the precedence comparison is silently dropped (the current
    /// value stands). A winning update runs the preprocessors, then the
    /// validators; any failure yields [`Error::InvalidValue`] and leaves the
    /// stored value and source untouched. A `null` value bypasses the
    /// pipeline and clears the setting.
    pub fn update(&mut self, value: Value, source: Source) -> Result<()> {
        if self.frozen {
            return Err(Error::Frozen(self.name.to_string()));
        }
        if !source.supersedes(self.source, self.is_policy) {
            tracing::debug!(
                setting = self.name,
                new = %source,
                current = %self.source,
                "update dropped by source precedence"
            );
            return Ok(());
        }
        let value = self.run_pipeline(value)?;
        self.raw = value;
        self.source = source;
        Ok(())
    }

    fn run_pipeline(&self, value: Value) -> Result<Value> {
        // null clears the setting; unset values never enter the pipeline
        if value.is_null() {
            return Ok(value);
        }
        let mut current = value;
        for preprocess in self.preprocessors {
            current = preprocess(&current).map_err(|reason| Error::InvalidValue {
                name: self.name.to_string(),
                value: current.clone(),
                reason,
            })?;
        }
        for validate in self.validators {
            validate(&current).map_err(|reason| Error::InvalidValue {
                name: self.name.to_string(),
                value: current.clone(),
                reason,
            })?;
        }
        Ok(current)
    }
}
