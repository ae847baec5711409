//! # Struk CLI
//!
//! Command-line interface for ESC/POS receipt printing.
//!
//! ## Usage
//!
//! ```bash
//! # Print a receipt to the default serial printer
//! struk print receipt.json
//!
//! # Another device, 19200 baud, US formatting
//! struk print --device /dev/ttyACM0 --baud 19200 --locale en-US receipt.json
//!
//! # Show the ticket as text instead of printing
//! struk print --preview receipt.json
//!
//! # Capture the raw ESC/POS bytes
//! struk print --output receipt.bin receipt.json
//!
//! # Kick the cash drawer
//! struk drawer
//! ```
//!
//! Set `RUST_LOG=struk=debug` for transport diagnostics.

use clap::{Args, Parser, Subcommand};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use struk::{
    ByteSink, Locale, PrinterSession, ReceiptDocument, ReceiptFormatter, StrukError,
    printer::{Parity, SerialConfig},
    transport::{SerialTransport, WriterSink, serial::DEFAULT_DEVICE},
};

/// Struk - ESC/POS receipt printer utility
#[derive(Parser, Debug)]
#[command(name = "struk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a receipt from a JSON document
    Print {
        /// Receipt document (JSON)
        receipt: PathBuf,

        /// Write the raw bytes to a file instead of the printer
        #[arg(long, value_name = "FILE", conflicts_with = "preview")]
        output: Option<PathBuf>,

        /// Print the ticket as plain text to stdout instead of the printer
        #[arg(long)]
        preview: bool,

        /// Number, currency and date formatting (id-ID, en-US)
        #[arg(long, default_value = "id-ID")]
        locale: Locale,

        /// Kick the cash drawer after printing
        #[arg(long)]
        open_drawer: bool,

        #[command(flatten)]
        serial: SerialArgs,
    },

    /// Open the cash drawer
    Drawer {
        #[command(flatten)]
        serial: SerialArgs,
    },
}

#[derive(Args, Debug)]
struct SerialArgs {
    /// Printer device path
    #[arg(long, default_value = DEFAULT_DEVICE)]
    device: PathBuf,

    /// Baud rate
    #[arg(long, default_value_t = 9600)]
    baud: u32,

    /// Data bits (5-8)
    #[arg(long, default_value_t = 8)]
    data_bits: u8,

    /// Stop bits (1 or 2)
    #[arg(long, default_value_t = 1)]
    stop_bits: u8,

    /// Parity (none, even, odd)
    #[arg(long, default_value = "none")]
    parity: Parity,
}

impl SerialArgs {
    fn config(&self) -> SerialConfig {
        SerialConfig {
            baud_rate: self.baud,
            data_bits: self.data_bits,
            stop_bits: self.stop_bits,
            parity: self.parity,
        }
    }

    fn open(&self) -> Result<SerialTransport, StrukError> {
        SerialTransport::open(&self.device, &self.config())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), StrukError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Print {
            receipt,
            output,
            preview,
            locale,
            open_drawer,
            serial,
        } => {
            let json = fs::read_to_string(&receipt)?;
            let doc = ReceiptDocument::from_json(&json)?;
            let formatter = ReceiptFormatter::with_locale(locale);

            if preview {
                print!("{}", formatter.build_intent_sequence(&doc).preview());
                return Ok(());
            }

            let sink: Box<dyn ByteSink> = match &output {
                Some(path) => Box::new(WriterSink::new(BufWriter::new(File::create(path)?))),
                None => Box::new(serial.open()?),
            };

            let mut session = PrinterSession::new(sink);
            session.print_receipt(&doc, &formatter)?;
            if open_drawer {
                session.open_drawer()?;
            }
            session.close()?;

            match output {
                Some(path) => println!("Saved to {}", path.display()),
                None => println!("Printed successfully!"),
            }
        }
        Commands::Drawer { serial } => {
            let mut session = PrinterSession::new(serial.open()?);
            session.open_drawer()?;
            session.close()?;
            println!("Drawer opened");
        }
    }

    Ok(())
}
