//! Project Lifecycle Integration Tests
//!
//! Drives create / exists / clone against the in-memory service:
//! - created projects resolve on later lookups
//! - a second create of the same name is refused without a create call
//! - clones carry the fixed options and reset no obligations

use scanbridge::models::DEFAULT_PROJECT_DESCRIPTION;
use scanbridge::{ClientContext, ErrorKind, ProjectRef};
use scanbridge_core::CloneOption;

use super::support::InMemoryService;

#[tokio::test]
async fn test_create_then_exists_then_duplicate() {
    let ctx = ClientContext::new(InMemoryService::new());
    let projects = ctx.projects();

    assert!(!projects.exists("proj1").await.unwrap());

    let created = projects.ensure_created("proj1", None).await.unwrap();
    let id = created.id().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created.name, "proj1");

    assert!(projects.exists("proj1").await.unwrap());
    assert_eq!(projects.resolve_id("proj1").await.unwrap(), id);

    let err = projects.ensure_created("proj1", None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(ctx.service().creates(), 1);

    let stored = ctx.service().project_named("proj1").unwrap();
    assert_eq!(stored.description.as_deref(), Some(DEFAULT_PROJECT_DESCRIPTION));
}

#[tokio::test]
async fn test_clone_from_existing_project() {
    let ctx = ClientContext::new(InMemoryService::new());
    let projects = ctx.projects();

    let source = projects.ensure_created("proj1", None).await.unwrap();
    let cloned = projects.ensure_created("proj2", Some("proj1")).await.unwrap();

    assert_ne!(cloned.id(), source.id());
    assert!(cloned.id().is_some_and(|id| !id.is_empty()));
    assert_eq!(projects.resolve("proj2").await.unwrap(), cloned);

    let clones = ctx.service().clones();
    assert_eq!(clones.len(), 1);
    assert_eq!(Some(clones[0].source_id.as_str()), source.id());
    assert_eq!(clones[0].new_name, "proj2");
    assert_eq!(clones[0].options, CloneOption::ALL.to_vec());
    assert!(clones[0].resets.is_empty());
    // A clone is not a create
    assert_eq!(ctx.service().creates(), 1);
}

#[tokio::test]
async fn test_clone_missing_source() {
    let ctx = ClientContext::new(InMemoryService::new());

    let err = ctx.projects().clone("A", "B").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(ctx.service().clones().is_empty());

    let err = ctx.projects().ensure_created("A", Some("B")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(ctx.service().project_named("A").is_none());
}

#[tokio::test]
async fn test_validation_happens_before_remote_calls() {
    let ctx = ClientContext::new(InMemoryService::new());
    let projects = ctx.projects();

    let long_name = "n".repeat(250);
    assert_eq!(
        projects.ensure_created(&long_name, None).await.unwrap_err().kind(),
        ErrorKind::Validation
    );
    assert_eq!(
        projects.ensure_created("  ", Some("proj1")).await.unwrap_err().kind(),
        ErrorKind::Validation
    );
    assert_eq!(
        projects.clone(" ", "").await.unwrap_err().kind(),
        ErrorKind::Validation
    );
    assert_eq!(ctx.service().remote_calls(), 0);

    // Just under the limit is accepted
    let name = "n".repeat(249);
    let created = projects.ensure_created(&name, None).await.unwrap();
    assert_eq!(created, ProjectRef::resolved(created.id().unwrap(), name));
}

#[tokio::test]
async fn test_rejected_credentials_propagate() {
    let ctx = ClientContext::new(InMemoryService::locked());
    let projects = ctx.projects();

    assert_eq!(
        projects.exists("proj1").await.unwrap_err().kind(),
        ErrorKind::Credential
    );
    let err = projects.ensure_created("proj1", None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Credential);
    assert_eq!(err.remote_code(), Some("invalid credentials"));
    assert_eq!(ctx.service().creates(), 0);
}
