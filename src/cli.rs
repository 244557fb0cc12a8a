use colored::*;

use crate::collector;
use crate::logging::log_to_file;

/// One-shot terminal rendition of the sheet.
pub fn run_cli() {
    // Attach to parent console (or allocate one) when windows_subsystem = "windows"
    #[cfg(windows)]
    unsafe {
        extern "system" {
            fn AttachConsole(dwProcessId: u32) -> i32;
            fn AllocConsole() -> i32;
        }
        if AttachConsole(0xFFFFFFFF) == 0 {
            AllocConsole();
        }
    }

    let ver = env!("CARGO_PKG_VERSION");
    let title = format!("Spec Sheet v{}", ver);
    let tagline = "Your machine, on one sheet";
    let width = 39;
    println!(
        "{}",
        format!("\u{2554}{}\u{2557}", "\u{2550}".repeat(width)).bright_cyan()
    );
    println!(
        "{}",
        format!("\u{2551}{:^w$}\u{2551}", title, w = width).bright_cyan()
    );
    println!(
        "{}",
        format!("\u{2551}{:^w$}\u{2551}", tagline, w = width).bright_cyan()
    );
    println!(
        "{}",
        format!("\u{255a}{}\u{255d}", "\u{2550}".repeat(width)).bright_cyan()
    );
    println!();

    let report = collector::collect();

    println!("{} Collected system info:\n", "*".green());

    row("CPU", &report.cpu);
    for gpu in &report.gpus {
        row("GPU", gpu);
    }
    row("RAM", &report.ram);
    for disk in &report.disks {
        row("Disk", disk);
    }
    if !report.motherboard.is_empty() {
        row("Motherboard", &report.motherboard);
    }
    row("OS", &report.os);
    if !cfg!(windows) {
        row("Kernel", &report.kernel);
    }
    row("Username", &report.username);

    println!("\n{}", "\u{2500}".repeat(60).dimmed());
    log_to_file("Printed spec sheet (CLI)");
}

fn row(label: &str, value: &str) {
    println!(
        "  {} {} {}",
        "|".dimmed(),
        format!("{:<12}", label).dimmed(),
        value.bold()
    );
}
