//! Host integration layer
//!
//! Wraps [`convert_jwk_to_pem`](crate::convert_jwk_to_pem) and
//! [`normalize_jwks`](crate::normalize_jwks) as callouts: units a gateway
//! host configures with string properties and executes against a
//! [`MessageContext`]. Inputs and outputs travel through named variables,
//! and failures are reported through variables rather than returned:
//!
//! - `jwks_exception`: `"<Kind>Error: <message>"` on one line
//! - `jwks_error`: the message part of `jwks_exception`
//! - `jwks_stacktrace`: the error's debug rendering, only with `debug=true`
//!   and only for conversion failures

mod context;
mod jwk_to_pem;
mod properties;
mod transform_jwks;

pub use context::{FlowVariables, MessageContext};
pub use jwk_to_pem::JwkToPem;
pub use properties::{names, resolve_variable_references, CalloutProperties};
pub use transform_jwks::{TransformJwks, DEFAULT_SOURCE};

use crate::error::{Error, ErrorKind, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

/// Prefix of every variable a callout writes on its own behalf
pub const VARIABLE_PREFIX: &str = "jwks_";

static COMMON_ERROR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)[:;] (.+)$").expect("valid error pattern"));

/// Outcome reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionResult {
    Success,
    /// The callout failed; details are in the `jwks_*` variables
    Abort,
}

/// A configured unit of work executed against a message context
pub trait Callout {
    fn execute(&self, ctx: &mut dyn MessageContext) -> ExecutionResult;
}

/// `jwks_<suffix>`
pub fn var_name(suffix: &str) -> String {
    format!("{VARIABLE_PREFIX}{suffix}")
}

/// Map an operation outcome to an [`ExecutionResult`], reporting failures
pub(crate) fn complete(
    callout: &str,
    outcome: Result<()>,
    debug: bool,
    ctx: &mut dyn MessageContext,
) -> ExecutionResult {
    match outcome {
        Ok(()) => ExecutionResult::Success,
        Err(err) => {
            warn!(callout, kind = %err.kind(), error = %err, "callout aborted");
            if debug && err.kind() != ErrorKind::Configuration {
                ctx.set_variable(&var_name("stacktrace"), format!("{err:#?}"));
            }
            set_error_variables(&err, ctx);
            ExecutionResult::Abort
        }
    }
}

fn set_error_variables(err: &Error, ctx: &mut dyn MessageContext) {
    let exception = format!("{}: {}", err.kind(), err).replace('\n', " ");
    let message = COMMON_ERROR
        .captures(&exception)
        .and_then(|caps| caps.get(2))
        .map_or_else(|| exception.clone(), |m| m.as_str().to_string());
    ctx.set_variable(&var_name("exception"), exception);
    ctx.set_variable(&var_name("error"), message);
}
