// SPDX-License-Identifier: PMPL-1.0-or-later

//! attackctl: launch, supervise and stop wireless attack tools
//!
//! Each run is tracked by an [`Attack`] record: what kind of attack, which
//! target, when it started and stopped, and the process doing the work.

use anyhow::{anyhow, Result};
use attackctl::attack::{
    finish, supervise, Attack, AttackLauncher, AttackProfile, FinishOptions, ProcessHandle,
};
use attackctl::report;
use attackctl::timing;
use attackctl::types::AttackKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "attackctl")]
#[command(version)]
#[command(about = "Launch, supervise and stop wireless attack tools")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported attack kinds
    Kinds,

    /// Launch an attack and stop it after a duration or when it exits
    Run {
        /// Attack kind
        #[arg(value_name = "KIND", value_enum)]
        kind: KindArg,

        /// Target identifier, usually a BSSID or station MAC
        #[arg(value_name = "TARGET")]
        target: String,

        /// Monitor-mode interface passed to the attack tool
        #[arg(short, long)]
        interface: Option<String>,

        /// Attack profile (json or yaml) overriding the builtin commands
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// How long to run, e.g. 30s, 5m (default: until the tool exits)
        #[arg(short = 'f', long = "for", value_parser = parse_duration_arg)]
        run_for: Option<Duration>,

        /// Print the final status as JSON
        #[arg(long)]
        json: bool,

        /// Save the final status to a JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Explicit command to run instead of the profile's
        #[arg(last = true, value_name = "COMMAND")]
        command: Vec<String>,
    },

    /// Track an already running process as an attack and stop it
    Attach {
        /// Attack kind
        #[arg(value_name = "KIND", value_enum)]
        kind: KindArg,

        /// Target identifier
        #[arg(value_name = "TARGET")]
        target: String,

        /// Process id of the running attack tool
        #[arg(long)]
        pid: u32,

        /// How long to keep it running (default: until it exits)
        #[arg(short = 'f', long = "for", value_parser = parse_duration_arg)]
        run_for: Option<Duration>,

        /// Print the final status as JSON
        #[arg(long)]
        json: bool,
    },
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum KindArg {
    Deauth,
    Disassoc,
    AuthFlood,
    BeaconFlood,
}

impl From<KindArg> for AttackKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Deauth => AttackKind::Deauth,
            KindArg::Disassoc => AttackKind::Disassoc,
            KindArg::AuthFlood => AttackKind::AuthFlood,
            KindArg::BeaconFlood => AttackKind::BeaconFlood,
        }
    }
}

fn parse_duration_arg(raw: &str) -> std::result::Result<Duration, String> {
    timing::parse_duration(raw).map_err(|err| err.to_string())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Kinds => report::print_kinds(),

        Commands::Run {
            kind,
            target,
            interface,
            profile,
            run_for,
            json,
            output,
            command,
        } => {
            let mut profile = match profile {
                Some(path) => AttackProfile::load(&path)?,
                None => AttackProfile::builtin(),
            };
            if interface.is_some() {
                profile.interface = interface;
            }
            let launcher = AttackLauncher::new(profile);

            let mut attack = match command.split_first() {
                Some((program, args)) => {
                    launcher.launch_command(kind.into(), &target, program, args)?
                }
                None => launcher.launch(kind.into(), &target)?,
            };

            supervise(&mut attack, run_for);
            finish(&mut attack, &FinishOptions { json, output })?;
        }

        Commands::Attach {
            kind,
            target,
            pid,
            run_for,
            json,
        } => {
            let handle = ProcessHandle::find(pid)
                .map_err(|err| anyhow!("cannot attach to process {}: {}", pid, err))?;
            let mut attack = Attack::new(kind.into(), target);
            attack.init(handle);

            supervise(&mut attack, run_for);
            finish(&mut attack, &FinishOptions { json, output: None })?;
        }
    }

    Ok(())
}
