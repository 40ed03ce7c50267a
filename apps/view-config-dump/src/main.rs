use std::path::Path;

use anyhow::{bail, Context, Result};
use cranpose_view_config::{
    DeviceProfile, ResolvedConfig, Resolver, ResolverOptions, PRESET_NAMES,
};
use serde::Serialize;

const USAGE: &str = "usage: view-config-dump [PRESET | PROFILE.json | --list]";

#[derive(Serialize)]
struct Report<'a> {
    profile: &'a DeviceProfile,
    options: ResolverOptions,
    config: ResolvedConfig,
    has_permanent_menu_key: bool,
}

fn load_profile(arg: &str) -> Result<DeviceProfile> {
    if let Some(profile) = DeviceProfile::preset(arg) {
        return Ok(profile);
    }
    let path = Path::new(arg);
    if !path.exists() {
        bail!(
            "'{arg}' is neither a preset ({}) nor a profile file\n{USAGE}",
            PRESET_NAMES.join(", ")
        );
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading profile {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing profile {}", path.display()))
}

fn run() -> Result<()> {
    let arg = std::env::args().nth(1);
    let profile = match arg.as_deref() {
        Some("--list") => {
            for name in PRESET_NAMES {
                println!("{name}");
            }
            return Ok(());
        }
        Some("-h") | Some("--help") => {
            println!("{USAGE}");
            return Ok(());
        }
        Some(arg) => load_profile(arg)?,
        None => DeviceProfile::mdpi_phone(),
    };

    let resolver = Resolver::from_env();
    log::info!(
        "resolving '{}' (density {}, api {})",
        profile.name,
        profile.density().value(),
        profile.configuration.api_level
    );
    let config = profile
        .resolve(&resolver)
        .with_context(|| format!("resolving profile '{}'", profile.name))?;

    let report = Report {
        profile: &profile,
        options: resolver.options(),
        config,
        has_permanent_menu_key: config.has_permanent_menu_key(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
