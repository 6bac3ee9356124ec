use anyhow::{Context, Result};
use axischart::parser::parse_axis_expr;
use axischart::reader::{self, InputFormat};
use axischart::{writer, AxisInput, AxisSpec, ChartOptions, OutputFormat};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "axischart")]
#[command(about = "Pivot tabular data into chart categories and series", long_about = None)]
struct Args {
    /// JSON options file with xAxis / yAxis / output settings
    #[arg(long)]
    options: Option<PathBuf>,

    /// X-axis columns (e.g. 'month' or 'month, region'); repeatable
    #[arg(short = 'x', long = "x-axis")]
    x_axis: Vec<String>,

    /// Y-axis columns (e.g. 'sales(color: "red")'); repeatable
    #[arg(short = 'y', long = "y-axis")]
    y_axis: Vec<String>,

    /// Input file, or '-' for stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Input format (defaults from the file extension, CSV for stdin)
    #[arg(long, value_enum)]
    input_format: Option<InputFormat>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn parse_axis_args(exprs: &[String]) -> Result<Option<AxisInput>> {
    if exprs.is_empty() {
        return Ok(None);
    }
    let mut specs: Vec<AxisSpec> = Vec::new();
    for expr in exprs {
        specs.extend(parse_axis_expr(expr)?);
    }
    Ok(Some(AxisInput::from(specs)))
}

fn build_options(args: &Args) -> Result<ChartOptions> {
    let mut options = match &args.options {
        Some(path) => ChartOptions::from_path(path)?,
        None => ChartOptions::default(),
    };

    if let Some(x) = parse_axis_args(&args.x_axis).context("Invalid --x-axis")? {
        options.x_axis = Some(x);
    }
    if let Some(y) = parse_axis_args(&args.y_axis).context("Invalid --y-axis")? {
        options.y_axis = Some(y);
    }
    if let Some(format) = args.format {
        options.output.format = format;
    }
    if args.pretty {
        options.output.pretty = true;
    }

    Ok(options)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let options = build_options(&args)?;

    let table = reader::read_input(args.input.as_deref(), args.input_format)
        .context("Failed to read input table")?;

    // An invalid axis configuration is reported and yields an empty chart
    let chart_data = axischart::pivot_or_empty(&options, &table);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writer::write_chart_data(&chart_data, &options.output, &mut handle)
        .context("Failed to write chart data to stdout")?;
    handle.flush().context("Failed to flush stdout")?;

    Ok(())
}
