//! Render the alias catalogue as a Markdown reference page

use std::fs;

use anyhow::{Context, Result};
use shalias_core::collector::AliasCollector;
use shalias_core::AliasesProcessor;
use shalias_report::MarkdownReport;

use crate::cli::ReportArgs;
use crate::output;

pub fn run(args: ReportArgs) -> Result<()> {
    let source = fs::read_to_string(&args.aliases)
        .with_context(|| format!("failed to read alias definitions from '{}'", args.aliases))?;

    let processor = AliasesProcessor::new(&source)
        .with_context(|| format!("invalid alias definitions in '{}'", args.aliases))?;
    let mut report = MarkdownReport::new();
    processor
        .process(&mut [&mut report as &mut dyn AliasCollector])
        .with_context(|| format!("invalid alias definitions in '{}'", args.aliases))?;

    let page = report.render();
    if args.stdout {
        print!("{page}");
    } else {
        fs::write(&args.output, &page)
            .with_context(|| format!("failed to write report '{}'", args.output))?;
        output::success(&format!("wrote {}", args.output));
    }

    Ok(())
}
