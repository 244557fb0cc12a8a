//! Queries the local machine for the facts shown on the sheet.

use sysinfo::System;

use crate::entry::{Entry, EntryKind};
use crate::textfmt::beautify;

const BYTES_PER_GB: f64 = 1_000_000_000.0;

/// Snapshot of everything the sheet can display. Collected once at startup
/// and again on an explicit refresh.
#[derive(Clone, Debug, Default)]
pub struct SystemReport {
    pub cpu: String,
    pub gpus: Vec<String>,
    pub ram: String,
    pub disks: Vec<String>,
    pub motherboard: String,
    pub os: String,
    pub kernel: String,
    pub username: String,
}

pub fn collect() -> SystemReport {
    let sys = System::new_all();

    let cpu = sys
        .cpus()
        .first()
        .map(|c| beautify(c.brand()))
        .unwrap_or_else(|| "Unknown".to_string());

    let total = sys.total_memory() as f64 / BYTES_PER_GB;
    let available = sys.available_memory() as f64 / BYTES_PER_GB;
    let ram = format!("{:.2} / {:.2} GB", total - available, total);

    SystemReport {
        cpu,
        gpus: gpu_names(),
        ram,
        disks: disk_models(),
        motherboard: motherboard_description(),
        os: System::name().unwrap_or_else(|| "Unknown".to_string()),
        kernel: format!(
            "{} {}",
            title_case(std::env::consts::OS),
            System::kernel_version().unwrap_or_else(|| "Unknown".to_string())
        ),
        username: current_username(),
    }
}

/// Left panel: CPU, each GPU, RAM, each disk, motherboard.
pub fn collect_hardware(report: &SystemReport) -> Vec<Entry> {
    let mut entries = vec![Entry::collected(EntryKind::Cpu, 0)];
    for i in 0..report.gpus.len() {
        entries.push(Entry::collected(EntryKind::Gpu, i));
    }
    entries.push(Entry::collected(EntryKind::Ram, 0));
    for i in 0..report.disks.len() {
        entries.push(Entry::collected(EntryKind::Disk, i));
    }
    entries.push(Entry::collected(EntryKind::Motherboard, 0));
    entries
}

/// Right panel: OS, kernel, username. Windows has no kernel row.
pub fn collect_system(_report: &SystemReport) -> Vec<Entry> {
    let mut entries = vec![Entry::collected(EntryKind::Os, 0)];
    if !cfg!(windows) {
        entries.push(Entry::collected(EntryKind::Kernel, 0));
    }
    entries.push(Entry::collected(EntryKind::Username, 0));
    entries
}

fn current_username() -> String {
    let raw = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_default();
    title_case(&raw)
}

/// Upper-cases the first character and every character following a space,
/// lower-cases the rest. "john doe" -> "John Doe".
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_space = true;
    for ch in text.trim().chars() {
        if prev_space {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
        prev_space = ch == ' ';
    }
    out
}

#[cfg(target_os = "linux")]
fn gpu_names() -> Vec<String> {
    use std::fs;

    let mut gpus = Vec::new();
    if let Ok(entries) = fs::read_dir("/sys/class/drm") {
        for entry in entries.flatten() {
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.starts_with("card") || name.contains('-') {
                continue;
            }
            if let Ok(device_name) = fs::read_to_string(path.join("device/name")) {
                let device_name = device_name.trim();
                if !device_name.is_empty() {
                    gpus.push(beautify(device_name));
                }
            }
        }
    }
    if gpus.is_empty() {
        gpus = lspci_gpus();
    }
    gpus.sort();
    gpus
}

#[cfg(not(target_os = "linux"))]
fn gpu_names() -> Vec<String> {
    Vec::new()
}

#[cfg(target_os = "linux")]
fn lspci_gpus() -> Vec<String> {
    use std::process::Command;

    let Ok(output) = Command::new("lspci").output() else {
        return Vec::new();
    };
    if !output.status.success() {
        return Vec::new();
    }
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| {
            line.contains("VGA compatible controller")
                || line.contains("3D controller")
                || line.contains("Display controller")
        })
        .filter_map(|line| {
            let after = line[line.rfind(':')? + 1..].trim();
            let cleaned = after.split(" (rev ").next().unwrap_or(after).trim();
            if cleaned.is_empty() {
                None
            } else {
                Some(beautify(cleaned))
            }
        })
        .collect()
}

#[cfg(target_os = "linux")]
fn disk_models() -> Vec<String> {
    use std::fs;

    let mut disks = Vec::new();
    if let Ok(entries) = fs::read_dir("/sys/block") {
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name.starts_with("loop") || name.starts_with("ram") || name.starts_with("zram") {
                continue;
            }
            if let Ok(model) = fs::read_to_string(entry.path().join("device/model")) {
                let model = model.trim();
                if !model.is_empty() {
                    disks.push(beautify(model));
                }
            }
        }
    }
    disks.sort();
    disks
}

#[cfg(not(target_os = "linux"))]
fn disk_models() -> Vec<String> {
    Vec::new()
}

#[cfg(target_os = "linux")]
fn motherboard_description() -> String {
    use std::fs;
    use std::path::Path;

    let dmi = Path::new("/sys/devices/virtual/dmi/id");
    let mut parts = Vec::new();
    for file in ["board_vendor", "board_name"] {
        if let Ok(value) = fs::read_to_string(dmi.join(file)) {
            let value = value.trim();
            if !value.is_empty() && !value.eq_ignore_ascii_case("unknown") {
                parts.push(value.to_string());
            }
        }
    }
    parts.join(" ")
}

#[cfg(not(target_os = "linux"))]
fn motherboard_description() -> String {
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalizes_after_spaces() {
        assert_eq!(title_case("john doe"), "John Doe");
        assert_eq!(title_case("ALICE"), "Alice");
        assert_eq!(title_case("  bob  "), "Bob");
        assert_eq!(title_case(""), "");
    }

    fn sample_report() -> SystemReport {
        SystemReport {
            cpu: "Ryzen 5 3600".into(),
            gpus: vec!["GPU A".into(), "GPU B".into()],
            ram: "7.50 / 16.00 GB".into(),
            disks: vec!["Disk A".into(), "Disk B".into()],
            motherboard: "ASUS PRIME".into(),
            os: "Fedora Linux".into(),
            kernel: "Linux 6.8.0".into(),
            username: "Jane".into(),
        }
    }

    #[test]
    fn hardware_entries_follow_collection_order() {
        let entries = collect_hardware(&sample_report());
        let shape: Vec<(EntryKind, usize)> = entries.iter().map(|e| (e.kind, e.index)).collect();
        assert_eq!(
            shape,
            vec![
                (EntryKind::Cpu, 0),
                (EntryKind::Gpu, 0),
                (EntryKind::Gpu, 1),
                (EntryKind::Ram, 0),
                (EntryKind::Disk, 0),
                (EntryKind::Disk, 1),
                (EntryKind::Motherboard, 0),
            ]
        );
    }

    #[test]
    fn system_entries_start_with_os_and_end_with_username() {
        let entries = collect_system(&sample_report());
        assert_eq!(entries.first().map(|e| e.kind), Some(EntryKind::Os));
        assert_eq!(entries.last().map(|e| e.kind), Some(EntryKind::Username));
    }

    #[cfg(not(windows))]
    #[test]
    fn kernel_row_is_present_off_windows() {
        let entries = collect_system(&sample_report());
        assert!(entries.iter().any(|e| e.kind == EntryKind::Kernel));
    }

    #[test]
    fn collected_report_has_a_formatted_ram_string() {
        let report = collect();
        assert!(report.ram.ends_with(" GB"));
        assert!(report.ram.contains(" / "));
    }
}
