/*
cargo lawdmap

Derives the district-name -> 5-digit LAWD code map used by the front-end
from the raw legal district code registry (web/LAWD_CD.txt, tab-separated
download from the government code service).
*/

use std::fs;

use anyhow::{Context, Result};
use chrono::Local;
use indexmap::IndexMap;
use log::info;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

const INPUT_PATH: &str = "web/LAWD_CD.txt";
const OUTPUT_PATH: &str = "web/lawd_cd_map.json";

// Registry status of a district that is currently in force
const STATUS_ACTIVE: &str = "존재";

// 10-digit codes ending in five zeros are city/county level units;
// finer units (읍/면/동) keep nonzero trailing digits
const CITY_LEVEL_SUFFIX: &str = "00000";

// A LAWD code is the first five digits of the legal district code
const LAWD_LEN: usize = 5;

fn main() -> Result<()> {
    // logging setup
    fs::create_dir_all("logs")?;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        fs::File::create(format!("logs/build_lawd_map_{ts}.log"))?,
    )?;
    info!("Reading registry from {INPUT_PATH}");

    let raw = fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("reading {INPUT_PATH}"))?;

    let (lawd_map, stats) = build_lawd_map(&raw);
    info!(
        "Registry parsed: {} entries, {} short lines skipped, {} duplicate names overwritten",
        lawd_map.len(),
        stats.skipped_short,
        stats.overwritten
    );

    // write pretty JSON object
    let pretty = serde_json::to_string_pretty(&lawd_map)?;
    fs::write(OUTPUT_PATH, pretty)
        .with_context(|| format!("writing {OUTPUT_PATH}"))?;

    println!("Wrote {} district codes → {}", lawd_map.len(), OUTPUT_PATH);
    Ok(())
}

// Aggregate counts surfaced in the log; the artifact itself is unaffected
#[derive(Debug, Default)]
struct ParseStats {
    skipped_short: usize,
    overwritten: usize,
}

// Build name -> LAWD code from the raw registry text. The first line is a
// header. Rows need at least code, name and status fields; shorter rows are
// tolerated and skipped. On duplicate names the later row wins.
fn build_lawd_map(raw: &str) -> (IndexMap<String, String>, ParseStats) {
    let mut map = IndexMap::new();
    let mut stats = ParseStats::default();

    for line in raw.lines().skip(1) {
        let fields: Vec<&str> = line.trim().split('\t').collect();
        if fields.len() < 3 {
            stats.skipped_short += 1;
            continue;
        }
        let (code, name, status) = (fields[0], fields[1], fields[2]);
        if status != STATUS_ACTIVE || !code.ends_with(CITY_LEVEL_SUFFIX) {
            continue;
        }

        let lawd: String = code.chars().take(LAWD_LEN).collect();
        if map.insert(name.to_owned(), lawd).is_some() {
            stats.overwritten += 1;
        }
    }

    (map, stats)
}
