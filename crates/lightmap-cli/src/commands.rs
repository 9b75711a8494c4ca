use anyhow::Result;
use lightmap_cli::demo::run_demo;
use lightmap_cli::logging::redact_value;
use lightmap_cli::render::{render_json, render_table};
use lightmap_cli::run::{MapRequest, parse_replacement, run_map};
use lightmap_model::Record;
use tracing::{info_span, trace};

use crate::cli::{DemoArgs, MapArgs, OutputFormatArg};

pub fn run_map_command(args: &MapArgs) -> Result<()> {
    let span = info_span!("map", specs = %args.specs.display(), source = %args.source.display());
    let _guard = span.enter();
    let replacements = args
        .replace
        .iter()
        .map(String::as_str)
        .map(parse_replacement)
        .collect::<Result<Vec<_>>>()?;
    let request = MapRequest {
        specs: args.specs.clone(),
        source: args.source.clone(),
        exclude: args.exclude.clone(),
        replacements,
    };
    let record = run_map(&request)?;
    print_record(&record, args.format)
}

pub fn run_demo_command(args: &DemoArgs) -> Result<()> {
    let target = run_demo()?;
    print_record(&target.to_record(), args.format)
}

fn print_record(record: &Record, format: OutputFormatArg) -> Result<()> {
    let json = render_json(record)?;
    trace!(record = redact_value(&json), "mapped record");
    match format {
        OutputFormatArg::Json => println!("{json}"),
        OutputFormatArg::Table => println!("{}", render_table(record)),
    }
    Ok(())
}
