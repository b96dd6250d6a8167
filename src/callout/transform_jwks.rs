use super::{complete, Callout, CalloutProperties, ExecutionResult, MessageContext};
use crate::error::{Error, Result};
use crate::jwks::JwksNormalizer;
use tracing::debug;

/// Variable read and rewritten when `source` is unset
pub const DEFAULT_SOURCE: &str = "message.content";

/// Normalizes the JWKS held in the `source` variable in place
#[derive(Debug, Clone)]
pub struct TransformJwks {
    properties: CalloutProperties,
    normalizer: JwksNormalizer,
}

impl TransformJwks {
    pub fn new(properties: CalloutProperties) -> Self {
        Self {
            properties,
            normalizer: JwksNormalizer::new(),
        }
    }

    /// Use a custom normalizer policy
    pub fn with_normalizer(mut self, normalizer: JwksNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    fn run(&self, ctx: &mut dyn MessageContext) -> Result<()> {
        let source = self
            .properties
            .source(&*ctx)
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string());
        let jwks = ctx.variable(&source).ok_or(Error::SourceUnresolved)?;

        let normalized = self.normalizer.normalize(&jwks)?;
        debug!(%source, "rewrote jwks");
        ctx.set_variable(&source, normalized);
        Ok(())
    }
}

impl Callout for TransformJwks {
    fn execute(&self, ctx: &mut dyn MessageContext) -> ExecutionResult {
        let outcome = self.run(ctx);
        complete("TransformJwks", outcome, self.properties.debug(), ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callout::FlowVariables;

    #[test]
    fn test_default_source_missing() {
        let mut ctx = FlowVariables::new();
        ctx.set_variable("message-content", "hi there".into());
        let callout = TransformJwks::new(CalloutProperties::from_map([("debug", "true")]));

        assert_eq!(callout.execute(&mut ctx), ExecutionResult::Abort);
        assert_eq!(ctx.get("jwks_error"), Some("source variable resolves to null"));
        assert!(!ctx.contains("jwks_stacktrace"));
    }

    #[test]
    fn test_unresolved_source() {
        let mut ctx = FlowVariables::new();
        let callout = TransformJwks::new(CalloutProperties::from_map([
            ("debug", "true"),
            ("source", "not-message.content"),
        ]));

        assert_eq!(callout.execute(&mut ctx), ExecutionResult::Abort);
        assert_eq!(ctx.get("jwks_error"), Some("source variable resolves to null"));
        assert!(!ctx.contains("jwks_stacktrace"));
    }

    #[test]
    fn test_rewrites_default_source() {
        let mut ctx = FlowVariables::new();
        ctx.set_variable(DEFAULT_SOURCE, r#"{ "keys" : [ {"kty":"EC"} ] }"#.into());
        let callout = TransformJwks::new(CalloutProperties::default());

        assert_eq!(callout.execute(&mut ctx), ExecutionResult::Success);
        assert_eq!(ctx.get(DEFAULT_SOURCE), Some(r#"{"keys":[{"kty":"EC"}]}"#));
        assert!(!ctx.contains("jwks_error"));
    }

    #[test]
    fn test_malformed_jwks_left_unchanged() {
        let mut ctx = FlowVariables::new();
        ctx.set_variable(DEFAULT_SOURCE, "hi there".into());
        let callout = TransformJwks::new(CalloutProperties::from_map([("debug", "true")]));

        assert_eq!(callout.execute(&mut ctx), ExecutionResult::Abort);
        assert_eq!(ctx.get(DEFAULT_SOURCE), Some("hi there"));
        assert!(ctx.get("jwks_exception").unwrap().starts_with("FormatError: "));
        assert!(ctx.contains("jwks_stacktrace"));
    }
}
