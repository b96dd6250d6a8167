use super::{complete, var_name, Callout, CalloutProperties, ExecutionResult, MessageContext};
use crate::error::{Error, Result};
use crate::pem::convert_jwk_to_pem;
use tracing::debug;

/// Converts the JWK held in the `source` variable to PEM
///
/// The PEM is written to `destination`, or `jwks_pem` when unset.
#[derive(Debug, Clone)]
pub struct JwkToPem {
    properties: CalloutProperties,
}

impl JwkToPem {
    pub fn new(properties: CalloutProperties) -> Self {
        Self { properties }
    }

    fn run(&self, ctx: &mut dyn MessageContext) -> Result<()> {
        let source = self
            .properties
            .source(&*ctx)
            .ok_or(Error::SourceNotSpecified)?;
        let destination = self
            .properties
            .destination(&*ctx)
            .unwrap_or_else(|| var_name("pem"));

        let jwk = ctx.variable(&source).ok_or(Error::SourceUnresolved)?;
        if jwk.is_empty() {
            return Err(Error::SourceEmpty);
        }

        let pem = convert_jwk_to_pem(&jwk)?;
        debug!(%source, %destination, "wrote pem");
        ctx.set_variable(&destination, pem);
        Ok(())
    }
}

impl Callout for JwkToPem {
    fn execute(&self, ctx: &mut dyn MessageContext) -> ExecutionResult {
        let outcome = self.run(ctx);
        complete("JwkToPem", outcome, self.properties.debug(), ctx)
    }
}
