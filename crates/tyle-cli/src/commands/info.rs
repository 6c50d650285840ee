//! Info command implementation
//!
//! Lists the styles and weights the catalog knows about.

use crate::cli::InfoArgs;
use tyle_core::{error::Result, font_name_for, StyleKind, Weight};

pub fn run(args: &InfoArgs) -> Result<()> {
    // If no specific flags, show all info
    let show_all = !args.styles && !args.weights;

    println!("Tyle v{}", env!("CARGO_PKG_VERSION"));
    println!();

    if show_all || args.styles {
        print_styles();
        if show_all {
            println!();
        }
    }

    if show_all || args.weights {
        print_weights();
    }

    Ok(())
}

fn print_styles() {
    println!("Styles:");
    for kind in StyleKind::ALL {
        let sample = kind.with_weight(Weight::Regular);
        let flag = match kind {
            StyleKind::Body2 => "  [--long]",
            StyleKind::Caption1 => "  [--underline]",
            StyleKind::Button2 => "  [--bold]",
            _ => "",
        };
        println!(
            "  {:<10} {:>3}pt / {:>3}pt{}",
            kind.name(),
            sample.point_size(),
            sample.line_height(),
            flag
        );
    }
}

fn print_weights() {
    println!("Weights:");
    for weight in Weight::NAMED {
        println!(
            "  {:<10} {:>3}  -> {}",
            weight.to_string(),
            weight.to_number(),
            font_name_for(weight)
        );
    }
}
