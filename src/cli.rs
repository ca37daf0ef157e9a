// src/cli.rs
use std::{env, error::Error, path::{Path, PathBuf}};

use crate::config::options::{BuildOptions, LookupOptions, SortMode};
use crate::core::sanitize::format_currency;
use crate::lookup::{self, TierView};
use crate::model::Dataset;
use crate::progress::Progress;
use crate::{onet, runner, store};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Build(BuildOptions),
    Years(LookupOptions),
    Search { opts: LookupOptions, query: String },
    Lookup { opts: LookupOptions, code: String, salary: String },
    Check(LookupOptions),
    OnetDiff(PathBuf, PathBuf),
    Help,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let cmd = parse_args(env::args().skip(1))?;
    execute(cmd)
}

pub fn execute(cmd: Command) -> Result<(), Box<dyn Error>> {
    match cmd {
        Command::Help => { eprintln!("{HELP}"); Ok(()) }
        Command::Build(opts) => build(&opts),
        Command::Years(opts) => years(&opts),
        Command::Search { opts, query } => search(&opts, &query),
        Command::Lookup { opts, code, salary } => lookup(&opts, &code, &salary),
        Command::Check(opts) => check(&opts),
        Command::OnetDiff(a, b) => onet_diff(&a, &b),
    }
}

/* ---------------- Parsing ---------------- */

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, Box<dyn Error>> {
    let mut args = args.into_iter();
    let Some(sub) = args.next() else { return Ok(Command::Help) };

    let mut build = BuildOptions::default();
    let mut opts = LookupOptions::default();
    let mut positional: Vec<String> = Vec::new();

    while let Some(a) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| format!("Missing value for {flag}"));
        match a.as_str() {
            "--input" => build.input_dir = PathBuf::from(value("--input")?),
            "--out" => build.data_dir = PathBuf::from(value("--out")?),
            "--prefix" => build.prefix = value("--prefix")?,
            "--data" => opts.data_dir = PathBuf::from(value("--data")?),
            "--year" => opts.year = Some(value("--year")?),
            "--filter" => opts.filter = value("--filter")?,
            "--sort" => {
                let v = value("--sort")?;
                opts.sort = SortMode::parse(&v).ok_or_else(|| format!("Unknown sort: {v}"))?;
            }
            "--level" => {
                let v: u8 = value("--level")?.parse()?;
                if v > 4 { return Err(format!("Level out of range (0..4): {v}").into()); }
                opts.level = Some(v);
            }
            "-h" | "--help" => return Ok(Command::Help),
            s if s.starts_with("--") => return Err(format!("Unknown arg: {s}").into()),
            _ => positional.push(a),
        }
    }

    let mut pos = positional.into_iter();
    let mut need = |what: &str| pos.next().ok_or_else(|| format!("Missing {what}"));

    let cmd = match sub.as_str() {
        "build" => Command::Build(build),
        "years" => Command::Years(opts),
        "search" => Command::Search { query: need("search query")?, opts },
        "lookup" => Command::Lookup { code: need("occupation code")?, salary: need("salary")?, opts },
        "check" => Command::Check(opts),
        "onet-diff" => Command::OnetDiff(PathBuf::from(need("first archive")?), PathBuf::from(need("second archive")?)),
        "-h" | "--help" | "help" => Command::Help,
        other => return Err(format!("Unknown command: {other}").into()),
    };
    Ok(cmd)
}

/* ---------------- Commands ---------------- */

struct ConsoleProgress {
    done: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { println!("{msg}"); }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        println!("  [{}/{}] {label} done", self.done, self.total);
    }
    fn item_skipped(&mut self, label: &str, reason: &str) {
        eprintln!("  Skipped {label}: {reason}");
    }
}

fn build(opts: &BuildOptions) -> Result<(), Box<dyn Error>> {
    let mut prog = ConsoleProgress { done: 0, total: 0 };
    let summary = runner::run(opts, Some(&mut prog))?;
    if let Some(m) = &summary.manifest {
        println!("\n{} year(s) written, {} skipped → {}", summary.built.len(), summary.skipped.len(), m.display());
    }
    Ok(())
}

fn load(opts: &LookupOptions) -> Result<Dataset, Box<dyn Error>> {
    let manifest = store::load_manifest(&opts.data_dir)?;
    Ok(store::load_by_label(&opts.data_dir, &manifest, opts.year.as_deref())?)
}

fn years(opts: &LookupOptions) -> Result<(), Box<dyn Error>> {
    let manifest = store::load_manifest(&opts.data_dir)?;
    for y in manifest.sorted_desc() {
        println!("FY {}\t{}", y.label, y.file);
    }
    Ok(())
}

fn search(opts: &LookupOptions, query: &str) -> Result<(), Box<dyn Error>> {
    let ds = load(opts)?;
    let hits = lookup::search(&ds, query);
    if hits.is_empty() {
        println!("No occupations match \"{query}\"");
    }
    for occ in hits {
        println!("{:<12} {}", occ.display_code(), occ.title);
    }
    Ok(())
}

fn lookup(opts: &LookupOptions, code: &str, salary: &str) -> Result<(), Box<dyn Error>> {
    let ds = load(opts)?;
    let occ = lookup::find_occupation(&ds, code)
        .ok_or_else(|| format!("No occupation with code {code} in FY {}", ds.year))?;
    let result = lookup::evaluate(&ds, occ, salary)?;

    println!("{} ({})", result.occupation.title, result.occupation.display_code());
    println!("{}\n", result.summary_line());

    let tiers: Vec<u8> = match opts.level {
        Some(l) => vec![l],
        None => vec![4, 3, 2, 1],
    };
    for tier in tiers {
        let view = TierView::new(&result, tier, &opts.filter, opts.sort);
        let heading = lookup::wage_level(tier).map(|w| w.label).unwrap_or("Below Level 1");
        println!("== {heading} ({} of {})", view.len(), view.tier_len());
        if view.is_empty() {
            println!("   {}", view.empty_message());
        }
        for loc in view.iter() {
            println!("   {:<60} {}", loc.area, loc.range_label(tier));
        }
        println!();
    }
    if opts.level.is_none() {
        if let Some(line) = result.below_threshold_line() {
            println!("{line}");
        }
    }
    Ok(())
}

fn check(opts: &LookupOptions) -> Result<(), Box<dyn Error>> {
    let ds = load(opts)?;
    println!(
        "FY {}: {} occupations, {} areas, {} wage records",
        ds.year, ds.occupations.len(), ds.areas.len(), ds.wages.len()
    );

    let dups = ds.duplicate_keys();
    println!("Duplicate codes found: {}", dups.len());
    for k in dups.iter().take(5) { println!("   {k}"); }

    let titles = ds.repeated_titles();
    println!("Titles appearing multiple times: {}", titles.len());
    for (t, codes) in titles.iter().take(5) {
        println!("   \"{t}\" appears with codes: {}", codes.join(", "));
    }

    let highest = ds.wages.iter().map(|w| w.l4).max().unwrap_or(0);
    println!("Highest Level 4 wage: {}", format_currency(highest as f64));
    Ok(())
}

fn onet_diff(a: &Path, b: &Path) -> Result<(), Box<dyn Error>> {
    let first = runner::onet_map_of(a)?;
    let second = runner::onet_map_of(b)?;
    let d = onet::diff_codes(&first, &second);

    println!("{}: {} O*NET codes", a.display(), first.len());
    println!("{}: {} O*NET codes", b.display(), second.len());
    println!("\nCommon codes: {}", d.common);
    println!("Only in first: {}", d.only_first.len());
    println!("Only in second: {}", d.only_second.len());
    println!("Retitled: {}", d.retitled.len());
    if !d.only_first.is_empty() {
        println!("\nRemoved (sample): {:?}", &d.only_first[..d.only_first.len().min(5)]);
    }
    if !d.only_second.is_empty() {
        println!("\nNew (sample): {:?}", &d.only_second[..d.only_second.len().min(5)]);
    }
    Ok(())
}
