// battguard-cli — Desktop diagnostic tool
//
// Cross-platform (macOS, Linux, Windows) command-line interface for
// exercising the settings navigator against a simulated device.

mod simulator;

use anyhow::Result;
use battguard_core::settings::target::{ACTION_APPLICATION_DETAILS_SETTINGS, ACTION_SETTINGS};
use battguard_core::{
    BatteryOptimization, DeepLinkTarget, PlatformAdapter, SettingsNavigator, VENDOR_PROFILES,
};
use clap::{Parser, Subcommand};
use colored::*;
use simulator::SimulatedDevice;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "battguard")]
#[command(about = "BattGuard — background-restriction whitelisting diagnostics", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List known vendor settings screens in match priority order
    Vendors,
    /// Show the ordered attempt plan for a simulated device
    Plan {
        /// Manufacturer identity the simulated device reports
        #[arg(short, long)]
        manufacturer: String,
        /// Treat the vendor screen as absent from the device
        #[arg(long)]
        unresolvable: bool,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the full module surface against a simulated device
    Simulate {
        /// Manufacturer identity the simulated device reports
        #[arg(short, long)]
        manufacturer: String,
        /// Treat the vendor screen as absent from the device
        #[arg(long)]
        unresolvable: bool,
        /// Inject a platform failure into the first launch attempt
        #[arg(long)]
        fail_primary: bool,
        /// Inject a platform failure into the settings-root launch as well
        #[arg(long)]
        fail_root: bool,
        /// Platform API level of the simulated build
        #[arg(long, default_value = "34")]
        sdk: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Vendors => cmd_vendors(),
        Commands::Plan {
            manufacturer,
            unresolvable,
            json,
        } => cmd_plan(manufacturer, unresolvable, json),
        Commands::Simulate {
            manufacturer,
            unresolvable,
            fail_primary,
            fail_root,
            sdk,
        } => cmd_simulate(manufacturer, unresolvable, fail_primary, fail_root, sdk).await,
    }
}

fn cmd_vendors() -> Result<()> {
    println!("{}", "Vendor settings screens (match priority order)".bold());
    println!();
    for (index, profile) in VENDOR_PROFILES.iter().enumerate() {
        println!("  {}. {}", index + 1, profile.matcher.bright_cyan().bold());
        println!("     package:  {}", profile.authority);
        println!("     activity: {}", profile.entry_point);
    }
    println!();
    println!("Matching is case-insensitive substring containment; first match wins.");
    Ok(())
}

fn cmd_plan(manufacturer: String, unresolvable: bool, json: bool) -> Result<()> {
    let device = Arc::new(SimulatedDevice::new(
        manufacturer.clone(),
        34,
        unresolvable,
        false,
        false,
    ));
    let navigator = SettingsNavigator::new(device);
    let plan = navigator.fallback_plan();

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("{}", format!("Attempt plan for \"{}\"", manufacturer).bold());
    println!();
    for (index, target) in plan.iter().enumerate() {
        println!(
            "  {}. {} {}",
            index + 1,
            tier_label(target).bright_green(),
            target.to_string().bright_yellow()
        );
    }
    Ok(())
}

async fn cmd_simulate(
    manufacturer: String,
    unresolvable: bool,
    fail_primary: bool,
    fail_root: bool,
    sdk: u32,
) -> Result<()> {
    let device = Arc::new(SimulatedDevice::new(
        manufacturer.clone(),
        sdk,
        unresolvable,
        fail_primary,
        fail_root,
    ));
    let adapter: Arc<dyn PlatformAdapter> = device.clone();
    let module = BatteryOptimization::new(adapter);

    println!(
        "{}",
        format!("Simulating \"{}\" (API level {})", manufacturer, sdk).bold()
    );
    println!();

    report(
        "isIgnoringBatteryOptimizations",
        module.is_ignoring_battery_optimizations().await,
    );
    report(
        "isAutoRevokeWhitelisted",
        module.is_auto_revoke_whitelisted().await,
    );
    report("openBatterySettings", module.open_battery_settings().await);
    report(
        "openApplicationDetails",
        module.open_application_details().await,
    );

    let launched = device.launched();
    if !launched.is_empty() {
        println!();
        println!("{}", "Screens launched:".bold());
        for (index, target) in launched.iter().enumerate() {
            println!(
                "  {}. {} {}",
                index + 1,
                tier_label(target).bright_green(),
                target
            );
        }
    }
    Ok(())
}

fn report(call: &str, outcome: Result<bool, battguard_core::BridgeError>) {
    match outcome {
        Ok(value) => println!("  {} {} -> {}", "✓".green(), call, value),
        Err(err) => println!(
            "  {} {} -> {}",
            "✗".red(),
            call,
            err.to_string().bright_red()
        ),
    }
}

fn tier_label(target: &DeepLinkTarget) -> &'static str {
    if target.is_component() {
        "[vendor screen]"
    } else if target.action.as_deref() == Some(ACTION_APPLICATION_DETAILS_SETTINGS) {
        "[app details]"
    } else if target.action.as_deref() == Some(ACTION_SETTINGS) {
        "[settings root]"
    } else {
        "[unknown]"
    }
}
