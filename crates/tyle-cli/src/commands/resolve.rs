//! Resolve command implementation
//!
//! Resolves one style, selects its font, and prints the result.

use crate::cli::{OutputFormat, ResolveArgs};
use crate::output::{text_header, text_row, to_json, StyleReport};
use tyle_core::{
    error::{Result, TyleError},
    StyleKind, StyleVariant, TextAttributes,
};
use tyle_fontdb::{FontDatabase, FontDbConfig};

pub fn run(args: &ResolveArgs) -> Result<()> {
    let variant = build_variant(args)?;
    let style = variant.resolve();

    let mut config: FontDbConfig = FontDbConfig::global().clone();
    config.search_dirs.extend(args.font_dirs.iter().cloned());
    let db = FontDatabase::with_config(&config);

    let attrs = TextAttributes::assemble(&style, &db);
    log::info!("Resolved {} with {} font", variant, font_source(&attrs));

    let report = StyleReport::new(&variant, &style).with_font(&attrs.font);
    match args.format {
        OutputFormat::Json => println!("{}", to_json(&report, args.pretty)?),
        OutputFormat::Text => {
            println!("{}", text_header());
            println!("{}", text_row(&report));
            if let Some(font) = &report.font {
                println!("font: {} ({})", font.name, font.source);
            }
        },
    }

    Ok(())
}

fn font_source(attrs: &TextAttributes) -> &'static str {
    if attrs.font.is_fallback() {
        "fallback"
    } else {
        "named"
    }
}

/// Turn parsed arguments into a variant.
///
/// Each flag belongs to exactly one style; passing it with any other style
/// is rejected instead of silently ignored.
pub fn build_variant(args: &ResolveArgs) -> Result<StyleVariant> {
    let flags = [
        ("long", args.long, StyleKind::Body2),
        ("underline", args.underline, StyleKind::Caption1),
        ("bold", args.bold, StyleKind::Button2),
    ];
    for (flag, set, owner) in flags {
        if set && args.style != owner {
            return Err(TyleError::InvalidFlag {
                flag: flag.to_string(),
                style: args.style.to_string(),
            });
        }
    }

    let weight = args.weight;
    Ok(match args.style {
        StyleKind::Body2 => StyleVariant::body2_with(weight, args.long),
        StyleKind::Caption1 => StyleVariant::caption1_with(weight, args.underline),
        StyleKind::Button2 => StyleVariant::button2_with(weight, args.bold),
        other => other.with_weight(weight),
    })
}
