use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use parts_cli::pipeline::{ConvertOptions, OutputTarget, convert_file};
use parts_cli::types::ConversionSummary;
use parts_model::{CanonicalField, FieldKind, SynthesisOptions};

use crate::cli::ConvertArgs;
use crate::summary::apply_table_style;

pub fn run_fields() {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Kind", "Accepted headers"]);
    apply_table_style(&mut table);
    for field in CanonicalField::ALL {
        let kind = match field.kind() {
            FieldKind::Decimal => "decimal",
            FieldKind::Count => "count",
            FieldKind::Text => "text",
        };
        table.add_row(vec![
            field.to_string(),
            kind.to_string(),
            field.accepted_headers().join(", "),
        ]);
    }
    println!("{table}");
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConversionSummary> {
    let _span = info_span!("convert", input = %args.input.display()).entered();
    convert_file(&args.input, &convert_options(args))
}

fn convert_options(args: &ConvertArgs) -> ConvertOptions {
    let output = match (&args.output, &args.output_dir) {
        (Some(path), _) => OutputTarget::File(path.clone()),
        (None, Some(dir)) => OutputTarget::Directory(dir.clone()),
        (None, None) => OutputTarget::Directory(PathBuf::from(".")),
    };
    let synthesis = SynthesisOptions::new()
        .with_list_price_markup(args.list_price_markup)
        .with_tax_code(args.tax_code.clone())
        .with_fulfillment_channel(args.fulfillment_channel.clone());
    ConvertOptions::new()
        .with_output(output)
        .with_emit_canonical(args.emit_canonical.clone())
        .with_dry_run(args.dry_run)
        .with_synthesis(synthesis)
}
