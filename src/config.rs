use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub monitor: MonitorConfig,

    #[serde(default)]
    pub alerts: AlertConfig,

    #[serde(default)]
    pub smtp: SmtpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Mount point of the partition to watch.
    pub partition: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    #[serde(default)]
    pub thresholds: AlertThresholds,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    /// Mail an alert when usage reaches this percentage.
    pub use_warn_pct: u8,
    /// Escalate the alert to critical at this percentage.
    pub use_crit_pct: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpConfig {
    /// Submission relay hostname. Empty = mail disabled.
    pub server: String,
    /// Submission port (STARTTLS).
    pub port: u16,
    /// SMTP auth username. Empty = no authentication.
    pub username: String,
    /// SMTP auth password. Empty = read from $SMTP_PASSWORD instead,
    /// so credentials can stay out of the config file.
    pub password: String,
    /// Envelope/header sender address.
    pub from: String,
    /// Recipient addresses.
    pub to: Vec<String>,
}

impl SmtpConfig {
    pub fn is_configured(&self) -> bool {
        !self.server.is_empty() && !self.from.is_empty() && !self.to.is_empty()
    }

    /// Password from the config file, or from $SMTP_PASSWORD when unset.
    pub fn password(&self) -> Option<String> {
        if !self.password.is_empty() {
            return Some(self.password.clone());
        }
        std::env::var("SMTP_PASSWORD").ok().filter(|p| !p.is_empty())
    }
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for Config {
    fn default() -> Self {
        Self {
            monitor: MonitorConfig::default(),
            alerts:  AlertConfig::default(),
            smtp:    SmtpConfig::default(),
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self { partition: "/".into() }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self { thresholds: AlertThresholds::default() }
    }
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self { use_warn_pct: 60, use_crit_pct: 90 }
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            server:   String::new(),
            port:     587,
            username: String::new(),
            password: String::new(),
            from:     String::new(),
            to:       Vec::new(),
        }
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Config {
    pub fn load() -> Self {
        match try_load() {
            Ok(c)  => c,
            Err(_) => {
                // Write defaults on first run (best-effort)
                let _ = try_write_defaults();
                Config::default()
            }
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dalert").join("dalert.toml"))
    }
}

fn try_load() -> Result<Config> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&text)?;
    Ok(cfg)
}

fn try_write_defaults() -> Result<()> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(&Config::default())?;
    fs::write(path, format!("# dalert configuration\n# Generated on first run, edit freely\n\n{}", text))?;
    Ok(())
}
