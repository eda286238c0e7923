use anyhow::Context;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use log::debug;
use sdfmt_core::{EraseMode, FormatError, FormatOptions};
use sdfmt_formatters::format_device;
use sdfmt_platform::FileBlockDevice;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit code for failures outside the formatter's error taxonomy.
const EXIT_OTHER: u8 = 9;

#[derive(Parser, Debug)]
#[command(name = "sdfmt", version)]
#[command(about = "Format SD cards the way the SD Association recommends", long_about = None)]
struct Cli {
    /// Capacity override in 512-byte sectors
    #[arg(short, long, value_name = "SECTORS")]
    capacity: Option<u64>,

    /// Discard the whole card before formatting
    #[arg(short, long, value_enum, value_name = "MODE")]
    erase: Option<EraseArg>,

    /// Use FAT32 instead of exFAT on cards above 32 GiB
    #[arg(short = 'f', long)]
    force_fat32: bool,

    /// Allow logical sectors above 512 bytes for very large FAT32 clusters
    #[arg(short, long)]
    big_clusters: bool,

    /// Volume label
    #[arg(short, long)]
    label: Option<String>,

    /// Print the layout without touching the device
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// More output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Card reader device or image file
    device: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum EraseArg {
    Trim,
    Secure,
}

impl From<EraseArg> for EraseMode {
    fn from(arg: EraseArg) -> Self {
        match arg {
            EraseArg::Trim => EraseMode::Trim,
            EraseArg::Secure => EraseMode::Secure,
        }
    }
}

impl Cli {
    fn options(&self) -> FormatOptions {
        FormatOptions {
            label: self.label.clone(),
            erase: self.erase.map(EraseMode::from),
            force_fat32: self.force_fat32,
            big_clusters: self.big_clusters,
            capacity_override: self.capacity,
            dry_run: self.dry_run,
        }
    }

    fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

/// A dry run only reads the device size, so it must not create missing images.
fn open_device(cli: &Cli) -> Result<FileBlockDevice, FormatError> {
    if cli.dry_run {
        FileBlockDevice::open_existing(&cli.device)
    } else {
        FileBlockDevice::open(&cli.device)
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = cli.options();
    debug!("{:?}", options);

    let mut device = open_device(cli)?;
    let report = format_device(&mut device, &options)
        .with_context(|| format!("Formatting {} failed", cli.device.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<FormatError>()
        .and_then(|e| u8::try_from(e.exit_code()).ok())
        .unwrap_or(EXIT_OTHER)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format_timestamp(None)
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}
