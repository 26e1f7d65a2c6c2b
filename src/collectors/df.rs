use crate::error::MonitorError;
use crate::models::usage::DiskUsage;
use lazy_regex::regex_captures;
use std::process::Command;

/// Run `df -P` and return the usage entry for `partition`.
/// `-P` pins the POSIX column format: device, 1024-blocks, used, available,
/// capacity%, mount point — one line per filesystem.
pub fn read_usage(partition: &str) -> Result<DiskUsage, MonitorError> {
    let out = Command::new("df")
        .arg("-P")
        .output()
        .map_err(|source| MonitorError::DfInvoke { source })?;

    if !out.status.success() {
        return Err(MonitorError::DfStatus { status: out.status });
    }

    parse_usage(&String::from_utf8_lossy(&out.stdout), partition)
}

/// Scan df output for the line whose mount point equals `partition` exactly.
pub fn parse_usage(output: &str, partition: &str) -> Result<DiskUsage, MonitorError> {
    for line in output.lines() {
        let Some((_, device, total, used, avail, pct, mount)) = regex_captures!(
            r"^(\S+)\s+(\d+)\s+(\d+)\s+(\d+)\s+(\d+)%\s+(/.*?)\s*$",
            line
        ) else {
            continue; // header or foreign row
        };

        if mount != partition {
            continue;
        }

        return Ok(DiskUsage {
            device:   device.to_string(),
            mount:    mount.to_string(),
            total_kb: total.parse().unwrap_or(0),
            used_kb:  used.parse().unwrap_or(0),
            avail_kb: avail.parse().unwrap_or(0),
            use_pct:  pct.parse().unwrap_or(0),
        });
    }

    Err(MonitorError::DfParse { partition: partition.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DF_OUTPUT: &str = "\
Filesystem     1024-blocks     Used Available Capacity Mounted on
udev               8104396        0   8104396       0% /dev
/dev/nvme0n1p2   239360064 99093492 128034220      44% /
/dev/nvme0n1p1      523248     6160    517088       2% /boot/efi
/dev/sda1        961301832 865171648  47242456     95% /home
";

    #[test]
    fn parses_root_partition_line() {
        let u = parse_usage(DF_OUTPUT, "/").unwrap();
        assert_eq!(u.device, "/dev/nvme0n1p2");
        assert_eq!(u.mount, "/");
        assert_eq!(u.total_kb, 239_360_064);
        assert_eq!(u.used_kb, 99_093_492);
        assert_eq!(u.avail_kb, 128_034_220);
        assert_eq!(u.use_pct, 44);
    }

    #[test]
    fn mount_match_is_exact_not_prefix() {
        let u = parse_usage(DF_OUTPUT, "/home").unwrap();
        assert_eq!(u.device, "/dev/sda1");
        assert_eq!(u.use_pct, 95);
    }

    #[test]
    fn missing_partition_is_a_parse_error() {
        let err = parse_usage(DF_OUTPUT, "/srv").unwrap_err();
        assert!(matches!(err, MonitorError::DfParse { ref partition } if partition == "/srv"));
    }

    #[test]
    fn malformed_output_is_a_parse_error_not_a_crash() {
        let err = parse_usage("not df output at all\n1 2 3\n", "/").unwrap_err();
        assert!(matches!(err, MonitorError::DfParse { .. }));
    }

    #[test]
    fn empty_output_is_a_parse_error() {
        assert!(parse_usage("", "/").is_err());
    }
}
