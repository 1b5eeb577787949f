//! Fault Translation
//!
//! Maps remote fault codes onto `ErrorKind`. The table is fixed and
//! case-significant; anything unrecognized is a remote service error.

use crate::error::{ErrorKind, RemoteFault, TranslatedFault};

/// Fault code sent when the supplied credentials are rejected.
pub const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Fault code sent when a project id or name does not resolve.
pub const PROJECT_NOT_FOUND: &str = "project not found";

/// Fault code sent when a report template title does not resolve.
pub const REPORT_TEMPLATE_NOT_FOUND: &str = "report template not found";

/// Translate a remote fault into its local error kind.
pub fn translate(fault: &RemoteFault) -> TranslatedFault {
    let kind = match fault.code.as_deref() {
        Some(INVALID_CREDENTIALS) => ErrorKind::Credential,
        Some(PROJECT_NOT_FOUND) | Some(REPORT_TEMPLATE_NOT_FOUND) => ErrorKind::NotFound,
        Some(_) | None => ErrorKind::RemoteService,
    };

    TranslatedFault {
        kind,
        remote_code: fault.code.clone(),
        message: fault.message.clone(),
    }
}
