use clap::Parser;

/// Running the binary drops straight into the interactive menu; there are no
/// subcommands yet. Provisioning flags will hang off this struct once a real
/// backend lands.
#[derive(Parser)]
#[command(name = "azure-infra-creator")]
#[command(about = "Interactive menu for provisioning Azure infrastructure")]
#[command(version)]
pub struct Cli {}

pub fn show_banner() {
    println!();
    println!("╔═══════════════════════════════════╗");
    println!("║   Azure Infrastructure Creator    ║");
    println!("║   Secure. Simple. Best Practices. ║");
    println!("╚═══════════════════════════════════╝");
    println!("  {}", chrono::Local::now().format("%Y-%m-%d %H:%M"));
    println!();
}

pub fn show_goodbye() {
    println!();
    println!("╔═══════════════════════════════════╗");
    println!("║         Until next time!          ║");
    println!("╚═══════════════════════════════════╝");
    println!();
}
