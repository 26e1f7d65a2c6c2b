use crate::config::AlertThresholds;
use crate::models::usage::DiskUsage;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Critical,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Warning  => "WARN",
            Severity::Critical => "CRIT",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Alert {
    pub severity: Severity,
    pub mount:    String,
    pub message:  String,
}

/// Evaluate the parsed usage against the configured thresholds.
/// Fires exactly when `use_pct >= use_warn_pct`; escalates to Critical
/// at `use_crit_pct`.
pub fn evaluate(usage: &DiskUsage, thr: &AlertThresholds) -> Option<Alert> {
    if usage.use_pct < thr.use_warn_pct {
        return None;
    }

    let severity = if usage.use_pct >= thr.use_crit_pct {
        Severity::Critical
    } else {
        Severity::Warning
    };

    let message = match severity {
        Severity::Critical => format!("{}% full, critically low space", usage.use_pct),
        Severity::Warning  => format!("{}% full", usage.use_pct),
    };

    Some(Alert { severity, mount: usage.mount.clone(), message })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(pct: u8) -> DiskUsage {
        DiskUsage {
            device:   "/dev/sda1".into(),
            mount:    "/".into(),
            total_kb: 100,
            used_kb:  u64::from(pct),
            avail_kb: 100 - u64::from(pct),
            use_pct:  pct,
        }
    }

    fn thresholds() -> AlertThresholds {
        AlertThresholds { use_warn_pct: 60, use_crit_pct: 90 }
    }

    #[test]
    fn below_warn_threshold_is_quiet() {
        assert!(evaluate(&usage(59), &thresholds()).is_none());
        assert!(evaluate(&usage(0), &thresholds()).is_none());
    }

    #[test]
    fn fires_exactly_at_warn_threshold() {
        let alert = evaluate(&usage(60), &thresholds()).unwrap();
        assert_eq!(alert.severity, Severity::Warning);
        assert_eq!(alert.mount, "/");
    }

    #[test]
    fn between_thresholds_stays_warning() {
        let alert = evaluate(&usage(89), &thresholds()).unwrap();
        assert_eq!(alert.severity, Severity::Warning);
    }

    #[test]
    fn escalates_to_critical_at_crit_threshold() {
        let alert = evaluate(&usage(90), &thresholds()).unwrap();
        assert_eq!(alert.severity, Severity::Critical);
        assert!(alert.message.contains("critically low"));

        let alert = evaluate(&usage(100), &thresholds()).unwrap();
        assert_eq!(alert.severity, Severity::Critical);
    }
}
