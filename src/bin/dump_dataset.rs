use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use make_dataset::data::decode::{decode_values, split_counts_header};
use make_dataset::data::model::ByteOrder;
use make_dataset::data::writer::VALUE_SIZE;

/// Print a binary dataset as hex bytes next to each decoded value.
#[derive(Parser, Debug)]
#[command(name = "dump-dataset", version)]
struct Args {
    /// Binary file written by make-dataset
    file: PathBuf,

    /// Values per printed row; taken from the counts header when present
    #[arg(short, long)]
    columns: Option<usize>,

    /// The file starts with an [inputs u32][outputs u32] header
    #[arg(long)]
    counts_header: bool,

    /// Byte order the file was written with
    #[arg(long, value_enum, default_value_t = ByteOrder::Native)]
    byte_order: ByteOrder,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;

    let (payload, header_columns) = if args.counts_header {
        let (counts, rest) = split_counts_header(&bytes, args.byte_order)?;
        println!("inputs: {}  outputs: {}", counts.inputs, counts.outputs);
        (rest, usize::try_from(counts.row_width()).ok())
    } else {
        (&bytes[..], None)
    };

    let values = decode_values(payload, args.byte_order)?;
    let columns = args.columns.or(header_columns).unwrap_or(1).max(1);
    log::debug!("{} values, {columns} per row", values.len());

    let entries: Vec<String> = payload
        .chunks_exact(VALUE_SIZE)
        .zip(&values)
        .map(|(chunk, value)| {
            let hex: Vec<String> = chunk.iter().map(|b| format!("0x{b:02X}")).collect();
            format!("{} | ({value:>12})", hex.join(" "))
        })
        .collect();

    for line in entries.chunks(columns) {
        println!("{}", line.join("    "));
    }

    Ok(())
}
