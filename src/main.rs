mod alerts;
mod collectors;
mod config;
mod error;
mod models;
mod util;

use anyhow::Result;
use clap::Parser;
use config::Config;
use error::MonitorError;

#[derive(Parser, Debug)]
#[command(name = "dalert", about = "cron-friendly disk usage alert mailer", version = "0.1")]
struct Cli {
    /// Mount point to watch (overrides the config file)
    #[arg(short, long)]
    partition: Option<String>,

    /// Warning threshold percentage (overrides the config file)
    #[arg(short = 't', long)]
    threshold: Option<u8>,

    /// One-shot health check: exit 0=OK, 1=WARNING, 2=CRITICAL, no mail (nagios/cron compatible)
    #[arg(long)]
    check: bool,

    /// Print a one-shot JSON snapshot of the parsed usage and exit
    #[arg(long)]
    json: bool,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,

    /// Send the alert mail regardless of the threshold (for testing SMTP settings)
    #[arg(long)]
    force_mail: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load();
    if let Some(p) = &cli.partition {
        cfg.monitor.partition = p.clone();
    }
    if let Some(t) = cli.threshold {
        cfg.alerts.thresholds.use_warn_pct = t;
    }

    if cli.config {
        return run_print_config(&cfg);
    }
    if cli.json {
        return run_json_snapshot(&cfg);
    }
    if cli.check {
        return run_check(&cfg);
    }

    if let Err(e) = run_monitor(&cfg, cli.force_mail) {
        log_failure(&e);
        std::process::exit(1);
    }
    Ok(())
}

/// One monitor pass: collect, evaluate, mail if the threshold is crossed.
fn run_monitor(cfg: &Config, force_mail: bool) -> Result<(), MonitorError> {
    use util::human::{fmt_bytes, fmt_pct};

    let usage = collectors::df::read_usage(&cfg.monitor.partition)?;
    println!(
        "{}: {} used, {} available",
        usage.mount,
        fmt_pct(usage.use_pct),
        fmt_bytes(usage.avail_bytes())
    );

    let alert = match alerts::evaluate(&usage, &cfg.alerts.thresholds) {
        Some(a) => Some(a),
        None if force_mail => Some(alerts::Alert {
            severity: alerts::Severity::Warning,
            mount:    usage.mount.clone(),
            message:  format!("{}% full (forced test mail)", usage.use_pct),
        }),
        None => None,
    };

    if let Some(alert) = alert {
        println!(
            "[{}] threshold crossed, mailing {}",
            alert.severity.label(),
            cfg.smtp.to.join(", ")
        );
        util::mailer::send_alert(&cfg.smtp, &alert, &usage)?;
    }
    Ok(())
}

fn run_check(cfg: &Config) -> Result<()> {
    use alerts::Severity;
    use util::human::{fmt_bytes, fmt_pct};

    let usage = collectors::df::read_usage(&cfg.monitor.partition)?;
    match alerts::evaluate(&usage, &cfg.alerts.thresholds) {
        None => {
            println!(
                "OK: {} {} used, {} available",
                usage.mount,
                fmt_pct(usage.use_pct),
                fmt_bytes(usage.avail_bytes())
            );
            Ok(())
        }
        Some(a) => {
            println!("[{}] [{}] {}", a.severity.label(), a.mount, a.message);
            std::process::exit(match a.severity {
                Severity::Critical => 2,
                Severity::Warning  => 1,
            });
        }
    }
}

fn run_json_snapshot(cfg: &Config) -> Result<()> {
    use serde_json::json;
    use util::human::fmt_bytes;

    let usage = collectors::df::read_usage(&cfg.monitor.partition)?;
    let alert = alerts::evaluate(&usage, &cfg.alerts.thresholds);

    let snapshot = json!({
        "dalert_version": "0.1",
        "timestamp": chrono::Local::now().to_rfc3339(),
        "partition": {
            "device":   usage.device,
            "mount":    usage.mount,
            "total":    usage.total_bytes(),
            "used":     usage.used_bytes(),
            "avail":    usage.avail_bytes(),
            "total_hr": fmt_bytes(usage.total_bytes()),
            "used_hr":  fmt_bytes(usage.used_bytes()),
            "avail_hr": fmt_bytes(usage.avail_bytes()),
            "use_pct":  usage.use_pct,
        },
        "alert": alert.map(|a| json!({
            "severity": a.severity.label(),
            "mount":    a.mount,
            "message":  a.message,
        })),
    });

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn run_print_config(cfg: &Config) -> Result<()> {
    let path = Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    let t = &cfg.alerts.thresholds;
    println!("Config: {}", path);
    println!();
    println!("[monitor]");
    println!("  partition = {}", cfg.monitor.partition);
    println!();
    println!("[alerts.thresholds]");
    println!("  use_warn_pct = {}%", t.use_warn_pct);
    println!("  use_crit_pct = {}%", t.use_crit_pct);
    println!();
    println!("[smtp]");
    let s = &cfg.smtp;
    println!("  server   = {}", if s.server.is_empty() { "(not set)" } else { s.server.as_str() });
    println!("  port     = {}", s.port);
    println!("  username = {}", if s.username.is_empty() { "(none)" } else { s.username.as_str() });
    println!("  password = {}", if s.password.is_empty() { "(unset, falls back to $SMTP_PASSWORD)" } else { "(configured)" });
    println!("  from     = {}", if s.from.is_empty() { "(not set)" } else { s.from.as_str() });
    println!("  to       = {:?}", s.to);
    Ok(())
}

/// Monitor-path failures end up here: one alert-level line in the system log.
fn log_failure(err: &MonitorError) {
    use syslog::{Facility, Formatter3164};

    let formatter = Formatter3164 {
        facility: Facility::LOG_USER,
        hostname: None,
        process:  "dalert".into(),
        pid:      std::process::id(),
    };
    match syslog::unix(formatter) {
        Ok(mut logger) => {
            let _ = logger.alert(err.to_string());
        }
        // No syslog socket (containers, chroots): stderr is all that is left.
        Err(_) => eprintln!("dalert: {err}"),
    }
}
