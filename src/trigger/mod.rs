// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flumen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flumen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Scheduled job-trigger entry point.
//!
//! An external scheduler invokes [`JobControl::fire`] with the merged
//! parameter bag of the scheduled task. A bag without `job-name` or
//! `app-name` is a misconfigured schedule entry: it is logged and skipped,
//! never failed. A reachable control endpoint that answers anything other
//! than `201 Created` fails the run, and the scheduler applies its own
//! retry/alerting policy.

use std::fmt;

use serde::Serialize;
use tracing::{info, warn};

/// Permission asserted on every execution request.
const EXECUTE_JOB_PERMISSION: &str = "execute-job";

/// Merged parameters of one scheduled task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerParams {
    pub job_name: Option<String>,
    pub app_name: Option<String>,
    pub execution_id: Option<String>,
    pub command: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerError {
    Request { message: String },
    UnexpectedStatus { status: u16 },
}

impl fmt::Display for TriggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request { message } => {
                write!(f, "job control request failed: {message}")
            }
            Self::UnexpectedStatus { status } => {
                write!(f, "job control endpoint answered {status} (expected 201)")
            }
        }
    }
}

impl std::error::Error for TriggerError {}

#[derive(Debug, Serialize)]
struct ExecutionRequest<'a> {
    identity: Identity<'a>,
}

#[derive(Debug, Serialize)]
struct Identity<'a> {
    permissions: &'a [&'a str],
}

/// Client for the external job-control endpoint.
pub struct JobControl {
    base_url: String,
    http: reqwest::Client,
}

impl JobControl {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn executions_url(&self, app_name: &str, job_name: &str) -> String {
        format!("{}/{app_name}/{job_name}/executions", self.base_url)
    }

    /// Entry point for the scheduled task.
    pub async fn fire(&self, params: &TriggerParams) -> Result<(), TriggerError> {
        info!(
            job_name = params.job_name.as_deref(),
            app_name = params.app_name.as_deref(),
            execution_id = params.execution_id.as_deref(),
            command = params.command.as_deref(),
            "execute job"
        );

        let (Some(job_name), Some(app_name)) =
            (params.job_name.as_deref(), params.app_name.as_deref())
        else {
            warn!("not executing invalid job entry, check the schedule settings");
            return Ok(());
        };

        let request = ExecutionRequest {
            identity: Identity {
                permissions: &[EXECUTE_JOB_PERMISSION],
            },
        };
        let response = self
            .http
            .post(self.executions_url(app_name, job_name))
            .json(&request)
            .send()
            .await
            .map_err(|err| TriggerError::Request {
                message: err.to_string(),
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::CREATED {
            return Err(TriggerError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
