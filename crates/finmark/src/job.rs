//! Batch execution: every job runs independently and records its own outcome.

use std::path::Path;

use finmark_fiducial::{FiducialError, FiducialSelector, FiducialSet};
use finmark_trace::{MarkTrace, TraceError};
use log::{info, warn};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::io::{
    FiducialJob, FiducialJobReport, FinmarkJobConfig, FinmarkReport, TraceJob, TraceJobReport,
    TraceOp,
};

/// Errors from a single trace or fiducial job.
#[derive(thiserror::Error, Debug)]
pub enum JobError {
    #[error(transparent)]
    Trace(#[from] TraceError),
    #[error(transparent)]
    Fiducial(#[from] FiducialError),
}

/// Build the job's trace and apply its ops in order.
#[cfg_attr(feature = "tracing", instrument(level = "info", skip(job), fields(id = %job.id)))]
pub fn run_trace_job(job: &TraceJob) -> Result<MarkTrace, JobError> {
    let mut trace = MarkTrace::try_from(job.trace.clone())?;
    for op in &job.ops {
        trace = match op {
            TraceOp::KeepOnly { types } => trace.keep_only(types),
            TraceOp::RemoveTypes { types } => trace.remove_types(types),
            TraceOp::Reverse => trace.reverse(),
            TraceOp::Append { trace: other } => {
                let other = MarkTrace::try_from(other.clone())?;
                trace.combine(&other);
                trace
            }
        };
    }
    Ok(trace)
}

#[cfg_attr(feature = "tracing", instrument(level = "info", skip(job), fields(id = %job.id)))]
pub fn run_fiducial_job(job: &FiducialJob) -> Result<FiducialSet, JobError> {
    Ok(FiducialSelector::new(job.side).select(&job.spots, job.reference)?)
}

/// Run every job in `cfg`; failures are logged and recorded, never propagated.
pub fn run_config(cfg: &FinmarkJobConfig, config_path: &Path) -> FinmarkReport {
    let mut report = FinmarkReport::new(config_path);

    for job in &cfg.traces {
        let (output, error) = match run_trace_job(job) {
            Ok(trace) => {
                info!("trace {}: {} -> {} points", job.id, job.trace.len(), trace.len());
                (Some(trace.to_arrays()), None)
            }
            Err(err) => {
                warn!("trace {} skipped: {err}", job.id);
                (None, Some(err.to_string()))
            }
        };
        report.traces.push(TraceJobReport {
            id: job.id.clone(),
            input_len: job.trace.len(),
            output,
            error,
        });
    }

    for job in &cfg.fiducials {
        let (fiducials, error) = match run_fiducial_job(job) {
            Ok(set) => {
                info!("fiducials {}: {:?} from {} spots", job.id, set.source(), job.spots.len());
                (Some(set), None)
            }
            Err(err) => {
                warn!("fiducials {} skipped: {err}", job.id);
                (None, Some(err.to_string()))
            }
        };
        report.fiducials.push(FiducialJobReport {
            id: job.id.clone(),
            side: job.side,
            num_spots: job.spots.len(),
            fiducials,
            error,
        });
    }

    report
}
