//! Generation session orchestration.
//!
//! One call to [`submit`] drives a complete prompt → code round trip:
//! pre-flight validation, credit gate, conversation log bookkeeping, the
//! single network dispatch, and -- on success only -- the credit debit and
//! file merge. Steps execute strictly in order; the only suspension points
//! are the dispatch itself and the local database writes.

use codeforge_ai::GenerationRequest;
use codeforge_core::artifact;
use codeforge_core::error::CoreError;
use codeforge_core::model_catalog::{find_tier, validate_task_type};
use codeforge_core::project::STATUS_GENERATING;
use codeforge_core::session::validate_prompt;
use codeforge_db::models::project::Project;
use codeforge_db::repositories::{CreditRepo, ProjectFileRepo, ProjectRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Result of a successful generation round trip.
#[derive(Debug, Serialize)]
pub struct GenerationOutcome {
    /// The generated file content.
    pub content: String,
    /// Model id the service actually used.
    pub model_used: String,
    /// Credits debited for this round trip.
    pub credits_charged: i32,
    /// File the content was merged into.
    pub filename: String,
}

/// Run one generation round trip for an owner-checked project.
///
/// Ordering contract:
/// 1. blank prompt / unknown tier / unknown task type reject with no log
///    mutation;
/// 2. insufficient remaining credits rejects with no log mutation and no
///    external call (pre-flight only -- the authoritative debit is step 5's
///    atomic reserve-and-commit);
/// 3. `User` + `Pending` are appended and the session moves to `Submitted`
///    (a second submit for the same project now gets a 409);
/// 4. the prompt is dispatched -- the session lock is NOT held across this
///    await, so the log stays readable while generating;
/// 5. on success: debit, merge into the project's files, resolve the
///    `Pending` entry to `Assistant`;
/// 6. on failure: resolve to `Error`, no debit, no file mutation.
pub async fn submit(
    state: &AppState,
    project: &Project,
    prompt: &str,
    model: &str,
    task_type: &str,
) -> AppResult<GenerationOutcome> {
    // -- Step 1: input validation, before any visible effect.
    validate_prompt(prompt)?;
    let tier = find_tier(model)?;
    validate_task_type(task_type)?;

    // -- Step 2: credit pre-flight. Purely an optimization to avoid a
    // doomed dispatch; correctness comes from reserve_and_commit below.
    let balance = CreditRepo::balance(&state.pool, project.owner_id)
        .await?
        .ok_or_else(|| CoreError::Unauthorized("Unknown user".into()))?;
    if balance.remaining < tier.credits {
        return Err(AppError::Core(CoreError::InsufficientCredits {
            required: tier.credits,
            remaining: balance.remaining,
        }));
    }

    // -- Step 3: enter Submitted and append User + Pending.
    let session = state.workspaces.session(project.id).await;
    session.lock().await.begin(prompt)?;

    tracing::info!(
        project_id = project.id,
        model = tier.id,
        cost = tier.credits,
        "Dispatching generation"
    );

    // -- Steps 4-5: dispatch, then commit results. Any error past this
    // point must still resolve the Pending entry and restore the status.
    let result = async {
        ProjectRepo::set_status(&state.pool, project.id, STATUS_GENERATING).await?;
        dispatch_and_commit(state, project, prompt, tier.id, tier.credits, task_type).await
    }
    .await;

    if let Err(err) = ProjectRepo::set_status(&state.pool, project.id, &project.status).await {
        tracing::error!(project_id = project.id, error = %err, "Failed to restore project status");
    }

    let mut session = session.lock().await;
    match result {
        Ok(outcome) => {
            session.resolve_success(format!(
                "Generated code using {}. Used {} credit(s).",
                outcome.model_used, outcome.credits_charged
            ))?;
            Ok(outcome)
        }
        Err(err) => {
            session.resolve_failure(err.to_string())?;
            Err(err)
        }
    }
}

/// The success path after `Submitted`: dispatch, debit, merge.
///
/// A failed generation returns before the debit, so it never consumes
/// credits or touches files.
async fn dispatch_and_commit(
    state: &AppState,
    project: &Project,
    prompt: &str,
    model: &str,
    cost: i32,
    task_type: &str,
) -> AppResult<GenerationOutcome> {
    let request = GenerationRequest {
        prompt: prompt.to_string(),
        model: model.to_string(),
        task_type: task_type.to_string(),
    };
    let generated = state.generator.generate(&request).await?;

    // Charge only on success. A concurrent session may have spent the
    // remaining credits since the pre-flight check; the conditional update
    // is the authority, and a loss here fails the round trip before any
    // file is written.
    let debited = CreditRepo::reserve_and_commit(&state.pool, project.owner_id, cost).await?;
    if debited.is_none() {
        let balance = CreditRepo::balance(&state.pool, project.owner_id)
            .await?
            .map(|b| b.remaining)
            .unwrap_or(0);
        return Err(AppError::Core(CoreError::InsufficientCredits {
            required: cost,
            remaining: balance,
        }));
    }

    // File-merge policy: the first artifact becomes the canonical entry
    // file; afterwards each generation lands in a fresh discriminated file.
    let existing = ProjectFileRepo::filenames(&state.pool, project.id).await?;
    let filename = match artifact::merge_target(&existing) {
        Some(name) => name.to_string(),
        None => loop {
            let seq = ProjectRepo::claim_artifact_seq(&state.pool, project.id)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: "Project",
                    id: project.id,
                })?;
            let candidate = artifact::generated_filename(seq);
            // Skip over user-saved files that happen to use the same name.
            if !existing.contains(&candidate) {
                break candidate;
            }
        },
    };
    ProjectFileRepo::append(&state.pool, project.id, &filename, &generated.content).await?;

    Ok(GenerationOutcome {
        content: generated.content,
        model_used: generated.model_used,
        credits_charged: cost,
        filename,
    })
}
