// src/cli.rs
use std::{
    env,
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use crate::config::options::SheetsConfig;
use crate::csv::{self, Delim};
use crate::data::{FilterView, RawData};
use crate::filter::{self, FilterState};
use crate::progress::Progress;
use crate::sheets;

pub struct Params {
    pub filters: FilterState,
    pub list_sectors: bool,    // print distinct sectors then exit
    pub out: Option<PathBuf>,  // output path; None = stdout
    pub format: Delim,
    pub quiet: bool,           // suppress stderr progress
}

impl Params {
    pub fn new() -> Self {
        Self {
            filters: FilterState::default(),
            list_sectors: false,
            out: None,
            format: Delim::Csv,
            quiet: false,
        }
    }
}

/// Prints fetch status to stderr so stdout stays machine-readable.
struct StderrProgress;
impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) { eprintln!("{}", msg); }
    fn item_done(&mut self, sheet: &str) { eprintln!("  {} done", sheet); }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let config = SheetsConfig::from_env();
    let mut prog = StderrProgress;
    let progress: Option<&mut dyn Progress> =
        if params.quiet { None } else { Some(&mut prog) };
    let records = sheets::fetch_assessment_data(&config, progress);
    let raw = RawData::new(records);

    if params.list_sectors {
        for sector in filter::sector_values(raw.records()) {
            println!("{}", sector);
        }
        return Ok(());
    }

    let view = FilterView::from_raw(&raw, &params.filters);
    let selected: Vec<_> = view.row_ix.iter().map(|&ix| &raw.records()[ix]).collect();

    match &params.out {
        Some(path) => {
            let mut w = BufWriter::new(File::create(path)?);
            csv::write_records(&mut w, &selected, params.format)?;
            w.flush()?;
            eprintln!("Wrote {} of {} records to {}", selected.len(), raw.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut w = stdout.lock();
            csv::write_records(&mut w, &selected, params.format)?;
        }
    }

    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-q" | "--qualification" => {
                let v = args.next().ok_or("Missing value for --qualification")?;
                params.filters.qualification = Some(v); }
            "-t" | "--type" => {
                let v = args.next().ok_or("Missing value for --type")?;
                params.filters.exam_type = match v.to_ascii_lowercase().as_str() {
                    "exam" => Some(s!("Exam")),
                    "task" => Some(s!("Task")),
                    other => return Err(format!("Unknown assessment type: {}", other).into()),
                };}
            "--sector" => {
                params.filters.sector = Some(args.next().ok_or("Missing value for --sector")?); }
            "-s" | "--search" => {
                params.filters.search = args.next().ok_or("Missing value for --search")?; }
            "--list-sectors" => params.list_sectors = true,
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--quiet" => params.quiet = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
