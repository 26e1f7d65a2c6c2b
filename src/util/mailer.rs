use crate::alerts::Alert;
use crate::config::SmtpConfig;
use crate::error::MonitorError;
use crate::models::usage::DiskUsage;
use crate::util::human::{fmt_bytes, fmt_pct};
use lettre::message::MultiPart;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

/// Mail the alert through the configured STARTTLS relay.
pub fn send_alert(cfg: &SmtpConfig, alert: &Alert, usage: &DiskUsage) -> Result<(), MonitorError> {
    if !cfg.is_configured() {
        return Err(MonitorError::SmtpNotConfigured);
    }

    let email = build_message(cfg, alert, usage)?;

    let mut builder = SmtpTransport::starttls_relay(&cfg.server)?.port(cfg.port);
    if !cfg.username.is_empty() {
        if let Some(password) = cfg.password() {
            builder = builder.credentials(Credentials::new(cfg.username.clone(), password));
        }
    }

    builder.build().send(&email)?;
    Ok(())
}

/// Assemble the two-part plain/HTML alert message.
/// Pure so it can be tested without a server.
pub fn build_message(
    cfg: &SmtpConfig,
    alert: &Alert,
    usage: &DiskUsage,
) -> Result<Message, MonitorError> {
    let mut builder = Message::builder().from(cfg.from.trim().parse()?);
    for addr in &cfg.to {
        builder = builder.to(addr.trim().parse()?);
    }

    let subject = format!("[dalert] {} {}: {}", alert.severity.label(), alert.mount, alert.message);
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

    let plain = format!(
        "Disk usage alert\n\n\
         Partition:  {} ({})\n\
         Used:       {}\n\
         Available:  {}\n\
         Time:       {}\n\n\
         Sent by dalert.\n",
        usage.mount,
        usage.device,
        fmt_pct(usage.use_pct),
        fmt_bytes(usage.avail_bytes()),
        now,
    );

    let html = format!(
        "<html>\n<body>\n\
         <p>Disk usage on <b>{}</b> ({}) crossed the configured threshold.</p>\n\
         <ul>\n\
         <li>Used: <b>{}</b></li>\n\
         <li>Available: <b>{}</b></li>\n\
         <li>Time: {}</li>\n\
         </ul>\n\
         <p>Sent by dalert.</p>\n\
         </body>\n</html>\n",
        usage.mount,
        usage.device,
        fmt_pct(usage.use_pct),
        fmt_bytes(usage.avail_bytes()),
        now,
    );

    Ok(builder
        .subject(subject)
        .multipart(MultiPart::alternative_plain_html(plain, html))?)
}
