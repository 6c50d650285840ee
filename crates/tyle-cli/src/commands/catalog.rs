//! Catalog command implementation
//!
//! Resolves every style at one weight with default flags.

use crate::cli::{CatalogArgs, OutputFormat};
use crate::output::{text_header, text_row, to_json, StyleReport};
use tyle_core::{error::Result, StyleKind};

pub fn run(args: &CatalogArgs) -> Result<()> {
    let reports: Vec<StyleReport> = StyleKind::ALL
        .into_iter()
        .map(|kind| {
            let variant = kind.with_weight(args.weight);
            StyleReport::new(&variant, &variant.resolve())
        })
        .collect();

    match args.format {
        OutputFormat::Json => println!("{}", to_json(&reports, args.pretty)?),
        OutputFormat::Text => {
            println!("{}", text_header());
            for report in &reports {
                println!("{}", text_row(report));
            }
        },
    }

    Ok(())
}
