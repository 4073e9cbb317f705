use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_qrgen::render::{self, DEFAULT_CELL_SIZE, DEFAULT_MARGIN_MODULES};
use rust_qrgen::{
    ByteSegment, ECLevel, EncodeOptions, MaskPattern, QrEncoder, Result, Segment, TextEncoding,
    Version, encode_segments,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "RustQRGen CLI tools")]
struct Cli {
    /// Log mask selection details (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a payload and write the symbol
    Encode {
        #[command(flatten)]
        input: InputArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Output file; svg and text go to stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        /// Pixels per module (png)
        #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
        cell_size: u32,
        /// Quiet zone: pixels for png, modules for svg and text
        #[arg(long)]
        margin: Option<u32>,
    },
    /// Encode a payload and print symbol statistics
    Info {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Text payload
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    text: Option<String>,
    /// Read the payload bytes from a file
    #[arg(long)]
    file: Option<PathBuf>,
    /// Error correction level
    #[arg(long, value_enum, default_value_t = Level::M)]
    level: Level,
    /// Symbol version (1-40); smallest fitting when omitted
    #[arg(long)]
    version: Option<u8>,
    /// Mask pattern (0-7); penalty-driven when omitted
    #[arg(long)]
    mask: Option<u8>,
    /// Encode text as UTF-8 instead of Latin-1
    #[arg(long)]
    utf8: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Level {
    L,
    M,
    Q,
    H,
}

impl From<Level> for ECLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::L => ECLevel::L,
            Level::M => ECLevel::M,
            Level::Q => ECLevel::Q,
            Level::H => ECLevel::H,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Png,
    Svg,
    Text,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Encode {
            input,
            format,
            out,
            cell_size,
            margin,
        } => encode_cmd(&input, format, out, cell_size, margin),
        Command::Info { input } => info_cmd(&input),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build(input: &InputArgs) -> Result<QrEncoder> {
    let encoding = if input.utf8 {
        TextEncoding::Utf8
    } else {
        TextEncoding::Latin1
    };

    let mut options = EncodeOptions::new()
        .ec_level(input.level.into())
        .encoding(encoding);
    if let Some(number) = input.version {
        options = options.version(Version::new(number)?);
    }
    if let Some(bits) = input.mask {
        options = options.mask(MaskPattern::from_bits(bits)?);
    }

    let segment: Segment = match (&input.text, &input.file) {
        (Some(text), _) => ByteSegment::with_encoding(text, &options.encoding).into(),
        (None, Some(path)) => ByteSegment::from_bytes(std::fs::read(path)?).into(),
        (None, None) => ByteSegment::from_bytes(Vec::new()).into(),
    };

    let qr = encode_segments(vec![segment], &options)?;
    info!(
        version = qr.version().number(),
        mask = ?qr.mask_pattern(),
        "symbol built"
    );
    Ok(qr)
}

fn encode_cmd(
    input: &InputArgs,
    format: Format,
    out: Option<PathBuf>,
    cell_size: u32,
    margin: Option<u32>,
) -> Result<()> {
    let qr = build(input)?;
    let modules_margin = margin.map_or(DEFAULT_MARGIN_MODULES, |m| m as usize);

    match format {
        Format::Png => {
            let path = out.unwrap_or_else(|| PathBuf::from("qr.png"));
            let margin = margin.unwrap_or_else(|| render::default_margin(cell_size));
            render::save_png(&qr, &path, cell_size, margin)?;
            println!("Wrote {}", path.display());
        }
        Format::Svg => write_or_print(out, render::to_svg_string(&qr, modules_margin))?,
        Format::Text => write_or_print(out, render::to_text(&qr, modules_margin))?,
    }
    Ok(())
}

fn write_or_print(out: Option<PathBuf>, content: String) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(&path, content)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}

fn info_cmd(input: &InputArgs) -> Result<()> {
    let qr = build(input)?;
    let used = qr.data_bits();
    let capacity = qr.capacity_bits();

    println!(
        "Version: {} ({}x{})",
        qr.version().number(),
        qr.module_count(),
        qr.module_count()
    );
    println!("Error correction: {:?}", qr.ec_level());
    if let Some(mask) = qr.mask_pattern() {
        println!("Mask: {}", mask.bits());
    }
    if let Some(score) = qr.penalty_score() {
        println!("Penalty: {score}");
    }
    println!("Codewords: {}", qr.codewords().len());
    println!(
        "Capacity: {used}/{capacity} bits ({:.1}%)",
        used as f64 * 100.0 / capacity as f64
    );
    Ok(())
}
