//! scout2annika CLI - Convert Scout result files to MS Annika format
//!
//! ```bash
//! scout2annika run1.csv                          # -> run1.xlsx
//! scout2annika run1.csv results                  # -> results.xlsx
//! scout2annika run1.csv -o out.xlsx --xl DSSO --xlmod K
//! ```

use clap::Parser;
use scout2annika::models::{Crosslinker, DEFAULT_CROSSLINKER, DEFAULT_RESIDUE};
use scout2annika::transform::{convert_file, default_output_path, normalize_xlsx_path};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scout2annika")]
#[command(version)]
#[command(about = "Convert Scout crosslink result files to MS Annika Excel worksheets", long_about = None)]
struct Cli {
    /// Scout result file to process; if a second filename is given it is
    /// used as the output name
    #[arg(value_name = "f", num_args = 1..=2, required = true)]
    files: Vec<PathBuf>,

    /// Name of the output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Name of the crosslinker, e.g. DSSO
    #[arg(long, visible_alias = "xl", default_value = DEFAULT_CROSSLINKER)]
    crosslinker: String,

    /// Residue that the crosslinker binds to, e.g. K for DSSO
    #[arg(long = "crosslinker-modification", visible_alias = "xlmod", default_value = DEFAULT_RESIDUE)]
    crosslinker_modification: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Run parameters are validated before any file is touched.
    let xl = Crosslinker::new(&cli.crosslinker, &cli.crosslinker_modification)?;

    let input = &cli.files[0];
    let output = match (&cli.output, cli.files.get(1)) {
        (Some(explicit), _) => normalize_xlsx_path(explicit),
        (None, Some(second)) => normalize_xlsx_path(second),
        (None, None) => default_output_path(input),
    };

    eprintln!("📄 Converting: {}", input.display());

    let summary = convert_file(input, &output, &xl)?;

    eprintln!("   Encoding: {}", summary.encoding);
    eprintln!(
        "   Delimiter: '{}'",
        match summary.delimiter {
            '\t' => "\\t".to_string(),
            c => c.to_string(),
        }
    );
    eprintln!("   Columns: {}", summary.columns);
    eprintln!("✅ Converted {} crosslinks", summary.rows);
    eprintln!("💾 Output written to: {}", summary.output.display());

    Ok(())
}
