use crate::args::Cli;
use crate::shared::record::Record;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

// Per-run counters, reported on stderr once the output is complete.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransformStats {
    pub pairs: usize,
    pub blank: usize,
    pub comments: usize,
    pub malformed: usize,
}

// Public transform command entrypoint.
// The success line on stdout is part of the CLI contract; the summary is diagnostic only.
pub fn run_transform(args: Cli) -> Result<()> {
    let stats = transform_env_file(&args.input, &args.output)?;
    println!(
        "Successfully transformed {} to {}",
        args.input.display(),
        args.output.display()
    );
    eprintln!(
        "Wrote {} key-value pair(s); skipped {} blank, {} comment, {} malformed line(s)",
        stats.pairs, stats.blank, stats.comments, stats.malformed
    );
    Ok(())
}

// Convert `input` into `output`, truncating any existing output file.
// The input is opened first so a missing input leaves the output path untouched.
// Both handles are dropped on every return path.
pub fn transform_env_file(input: &Path, output: &Path) -> Result<TransformStats> {
    let reader = File::open(input)
        .map(BufReader::new)
        .with_context(|| format!("opening input file failed: {}", input.display()))?;

    let file = File::create(output)
        .with_context(|| format!("creating output file failed: {}", output.display()))?;
    let mut writer = BufWriter::new(file);

    let stats = transform_lines(reader, &mut writer).with_context(|| {
        format!(
            "transforming {} to {} failed",
            input.display(),
            output.display()
        )
    })?;

    // Flush explicitly; a BufWriter drop would swallow the error.
    writer
        .flush()
        .with_context(|| format!("writing output file failed: {}", output.display()))?;

    Ok(stats)
}

// Stream lines from `reader`, writing one `KEY='VALUE'` line per pair in encounter order.
// Stops at the first read or write error.
pub fn transform_lines<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<TransformStats> {
    let mut stats = TransformStats::default();

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading input line {} failed", line_idx + 1))?;

        match Record::parse(&line) {
            Record::Blank => stats.blank += 1,
            Record::Comment => stats.comments += 1,
            Record::Malformed => stats.malformed += 1,
            Record::Pair(pair) => {
                writeln!(writer, "{pair}").with_context(|| {
                    format!("writing output for input line {} failed", line_idx + 1)
                })?;
                stats.pairs += 1;
            }
        }
    }

    Ok(stats)
}
