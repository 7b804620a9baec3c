//! Link graph inspection command

use crate::app::{LinksArgs, OutputFormat};
use crate::crawl::crawl;
use crate::output::format_links;
use anyhow::Result;

/// Print the pages of a corpus with the links extracted from each
pub fn run(args: LinksArgs, format: OutputFormat) -> Result<()> {
    let graph = crawl(&args.corpus)?;
    print!("{}", format_links(&graph, format));
    Ok(())
}
