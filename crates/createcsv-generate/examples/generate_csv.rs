use std::env;
use std::path::PathBuf;

use createcsv_generate::{GenerateOptions, RecordGenerator};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut out: Option<PathBuf> = None;
    let mut options = GenerateOptions {
        record_threshold: 10,
        ..GenerateOptions::default()
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => out = args.next().map(PathBuf::from),
            "--rows" => {
                options.record_threshold = args.next().ok_or("missing --rows value")?.parse()?
            }
            "--cols" => options.columns = args.next().ok_or("missing --cols value")?.parse()?,
            _ => return Err(format!("unexpected argument: {arg}").into()),
        }
    }

    let out = out.ok_or("missing --out path")?;
    let summary = RecordGenerator::new(options).write_file(&out)?;

    println!("records={} bytes={}", summary.records, summary.bytes);
    Ok(())
}
