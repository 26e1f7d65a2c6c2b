use std::io;
use std::process::ExitStatus;

/// Everything that can go wrong in one monitor pass. Two families:
/// getting the disk usage report, and getting the alert mail out.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("failed to run df: {source}")]
    DfInvoke { source: io::Error },

    #[error("df exited with {status}")]
    DfStatus { status: ExitStatus },

    #[error("no parseable df entry for partition {partition}")]
    DfParse { partition: String },

    #[error("smtp server not configured, alert mail not sent")]
    SmtpNotConfigured,

    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to assemble alert mail: {0}")]
    MailBuild(#[from] lettre::error::Error),

    #[error("smtp transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
