//! Connection Validation
//!
//! Confirms the endpoint is reachable and the credentials are accepted by
//! looking up a project id that never exists. A "project not found" answer
//! can only come from an authenticated session, so it counts as success.

use scanbridge_core::{gated, translate, ErrorKind, ProjectService, ServiceError};

use crate::services::context::ClientContext;
use crate::utils::error::{BridgeError, BridgeResult};

/// Project id looked up during validation; no real project carries it.
pub const CONNECTION_PROBE_PROJECT_ID: &str = "scanbridge-connection-probe";

pub struct ConnectionValidator<'a, S> {
    ctx: &'a ClientContext<S>,
}

impl<'a, S: ProjectService> ConnectionValidator<'a, S> {
    pub fn new(ctx: &'a ClientContext<S>) -> Self {
        Self { ctx }
    }

    /// Validate connectivity and credentials.
    ///
    /// Logging is silenced while the probe runs and restored afterwards,
    /// whatever the outcome.
    pub async fn validate(&self) -> BridgeResult<()> {
        let outcome = {
            let _quiet = self.ctx.log_gate().suppress();
            self.ctx
                .service()
                .get_project_by_id(CONNECTION_PROBE_PROJECT_ID)
                .await
        };

        match outcome {
            Ok(_) => {}
            Err(ServiceError::Connectivity(err)) => return Err(err.into()),
            Err(ServiceError::Fault(fault)) => {
                let translated = translate(&fault);
                if translated.kind != ErrorKind::NotFound {
                    return Err(BridgeError::CredentialValidation {
                        message: format!(
                            "Failed to validate the connection : {}",
                            translated.describe()
                        ),
                        fault: translated,
                    });
                }
            }
        }

        gated!(self.ctx.log_gate(), debug, "Connection validated");
        Ok(())
    }
}
