/*
cargo regioncodes

Joins the hand-maintained sido/sigungu hierarchy (web/regions.json) with
the map produced by build_lawd_map (web/lawd_cd_map.json) and writes
web/regions_with_lawdcd.json, where every sigungu entry carries its LAWD
code ("" when the registry has no match).
*/

use std::fs;

use anyhow::{Context, Result};
use chrono::Local;
use indexmap::IndexMap;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

const REGIONS_PATH: &str = "web/regions.json";
const LAWD_MAP_PATH: &str = "web/lawd_cd_map.json";
const OUTPUT_PATH: &str = "web/regions_with_lawdcd.json";

// Input sigungu entry; everything besides the name is dropped on output
#[derive(Debug, Deserialize)]
struct SigunguIn {
    name: String,
}

// Both top-level keys are required; a regions.json missing either is malformed
#[derive(Debug, Deserialize)]
struct RegionsIn {
    sido: Vec<String>,
    sigungu: IndexMap<String, Vec<SigunguIn>>,
}

#[derive(Debug, Serialize)]
struct SigunguOut {
    name: String,
    code: String,
}

#[derive(Debug, Serialize)]
struct RegionsOut {
    sido: Vec<String>,
    sigungu: IndexMap<String, Vec<SigunguOut>>,
}

fn main() -> Result<()> {
    // logging setup
    fs::create_dir_all("logs")?;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        fs::File::create(format!("logs/enrich_regions_{ts}.log"))?,
    )?;

    // load both inputs
    let regions: RegionsIn = read_json(REGIONS_PATH)?;
    let lawd_map: IndexMap<String, String> = read_json(LAWD_MAP_PATH)?;
    info!(
        "Loaded {} sido, {} sigungu groups, {} LAWD codes",
        regions.sido.len(),
        regions.sigungu.len(),
        lawd_map.len()
    );

    let (result, unresolved) = attach_codes(regions, &lawd_map);
    if unresolved > 0 {
        warn!("{unresolved} sigungu entries have no LAWD code");
    }

    let pretty = serde_json::to_string_pretty(&result)?;
    fs::write(OUTPUT_PATH, pretty)
        .with_context(|| format!("writing {OUTPUT_PATH}"))?;

    println!("Wrote enriched region list → {OUTPUT_PATH}");
    Ok(())
}

// Attach a LAWD code to every sigungu entry, preserving document order.
// The lookup key is "<sido> <sigungu>", the shape the map was built with.
fn attach_codes(
    regions: RegionsIn,
    lawd_map: &IndexMap<String, String>,
) -> (RegionsOut, usize) {
    let mut unresolved = 0usize;
    let mut sigungu = IndexMap::with_capacity(regions.sigungu.len());

    for (sido, entries) in regions.sigungu {
        let mut rows = Vec::with_capacity(entries.len());
        for entry in entries {
            let key = format!("{sido} {}", entry.name);
            let code = match lawd_map.get(&key) {
                Some(code) => code.clone(),
                None => {
                    unresolved += 1;
                    String::new()
                }
            };
            rows.push(SigunguOut {
                name: entry.name,
                code,
            });
        }
        sigungu.insert(sido, rows);
    }

    (
        RegionsOut {
            sido: regions.sido,
            sigungu,
        },
        unresolved,
    )
}

// helpers
fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))
}
