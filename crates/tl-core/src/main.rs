//! templut: generate the temperature calibration lookup table.

use std::path::Path;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tl_common::{CalibrationTable, Result};
use tl_core::cli::Cli;
use tl_core::format::{self, DEFAULT_FILE_NAME};
use tl_core::interrupt::{self, InterruptFlag};
use tl_core::{downsample, merge, ExitCode, Session, SessionConfig};
use tl_device::DeviceUri;

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from_error(&error)
        }
    };
    process::exit(code.as_i32());
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let uri: DeviceUri = cli.uri.parse()?;
    let mut source = tl_device::open(&uri)?;
    println!("Connection established");

    let config = SessionConfig::from(cli);
    let mut table = CalibrationTable::new();
    if config.append {
        merge::seed_from_file(&config.output, &mut table)?;
    }

    let flag = InterruptFlag::new();
    interrupt::install_handler(&flag)?;

    println!("'CTRL + C' to stop the calibration data extraction process");
    let mut session = Session::new(config.clone(), table, flag);
    let outcome = session.run(source.as_mut());

    // A device failure mid-session still flushes whatever was collected.
    let table = session.into_table();
    let reduced = downsample(&table, config.max_values);
    format::write_file(&config.output, &reduced)?;
    print_guidance(&config.output);

    outcome.map(|_| ())
}

fn print_guidance(path: &Path) {
    println!(
        "The calibration values were written to the file: {}",
        path.display()
    );
    println!(
        "Copy the file into the device and eject it (do not unplug!) in order to apply the \
         values. After ejecting, the device will reboot. Once booted, the temperature \
         calibration look-up table is active."
    );
    println!(
        "IMPORTANT: if you are using the -f or --file option you should rename the file to \
         '{DEFAULT_FILE_NAME}' before copying it to the device."
    );
}
