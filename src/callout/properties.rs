//! Callout configuration properties
//!
//! Properties are plain strings set by the host when the callout is
//! configured. Values may reference context variables as `{name}` or
//! `{name:default}`; references are resolved on every execution.

use super::context::MessageContext;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

static VARIABLE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([^{} :][^{} ]*?)\}").expect("valid variable reference pattern")
});

/// Property names read by the callouts
pub mod names {
    pub const SOURCE: &str = "source";
    pub const DESTINATION: &str = "destination";
    pub const DEBUG: &str = "debug";
}

/// Read-only property map of a configured callout
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalloutProperties {
    properties: HashMap<String, String>,
}

impl CalloutProperties {
    /// Build from host-supplied name/value pairs
    pub fn from_map<I, K, V>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            properties: properties
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    /// Raw, unresolved property value
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Trimmed property value with variable references resolved
    ///
    /// Returns `None` when the property is unset, blank, or resolves to
    /// the empty string.
    pub fn resolved(&self, name: &str, ctx: &dyn MessageContext) -> Option<String> {
        let value = self.raw(name)?.trim();
        if value.is_empty() {
            return None;
        }
        let value = resolve_variable_references(value, ctx);
        (!value.is_empty()).then_some(value)
    }

    /// Name of the variable holding the input
    pub fn source(&self, ctx: &dyn MessageContext) -> Option<String> {
        self.resolved(names::SOURCE, ctx)
    }

    /// Name of the variable receiving the output
    pub fn destination(&self, ctx: &dyn MessageContext) -> Option<String> {
        self.resolved(names::DESTINATION, ctx)
    }

    /// `true` only when `debug` is `"true"`, ignoring case
    pub fn debug(&self) -> bool {
        self.raw(names::DEBUG)
            .is_some_and(|value| value.eq_ignore_ascii_case("true"))
    }
}

/// Replace each `{name}` / `{name:default}` in `template`
///
/// A reference becomes the value of context variable `name`, else
/// `default`, else nothing. Text that does not form a reference (such as
/// `{ name}` or `{:x}`) is kept as is.
pub fn resolve_variable_references(template: &str, ctx: &dyn MessageContext) -> String {
    VARIABLE_REFERENCE
        .replace_all(template, |caps: &Captures<'_>| {
            let reference = &caps[1];
            let (name, default) = match reference.split_once(':') {
                Some((name, default)) => (name, Some(default)),
                None => (reference, None),
            };
            ctx.variable(name)
                .or_else(|| default.map(str::to_string))
                .unwrap_or_default()
        })
        .into_owned()
}
