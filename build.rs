use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

const CATALOG_PATH: &str = "data/distributions.json";
const CATEGORY_NAMES: [&str; 5] = ["Desktop", "Server", "Advanced", "Beginner", "Gaming"];

#[derive(Deserialize)]
struct CatalogFile {
    distributions: Vec<CatalogEntry>,
}

#[derive(Deserialize)]
struct CatalogEntry {
    id: String,
    name: String,
    description: String,
    logo: String,
    rank: u32,
    rating: f64,
    downloads: String,
    last_update: String,
    category: String,
    popularity: u8,
    website: String,
    package_type: Vec<String>,
    architecture: Vec<String>,
    based_on: String,
    release_model: String,
    features: Vec<String>,
}

fn main() {
    println!("cargo:rustc-check-cfg=cfg(distrohub_skip_gresource)");
    println!("cargo:rerun-if-changed={CATALOG_PATH}");
    generate_catalog();

    if env::var_os("SKIP_GRESOURCE").is_some() {
        println!("cargo:rustc-cfg=distrohub_skip_gresource");
        let out_dir = env::var("OUT_DIR").expect("OUT_DIR set by Cargo");
        let out_path = Path::new(&out_dir).join("distrohub.gresource");
        if !out_path.exists() {
            fs::write(&out_path, []).expect("create placeholder resource");
        }
        return;
    }

    glib_build_tools::compile_resources(
        &["src/resources"],
        "src/resources/distrohub.gresource.xml",
        "distrohub.gresource",
    );
}

fn generate_catalog() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR set by Cargo"));
    let dest_path = out_dir.join("catalog_data.rs");

    let raw = fs::read_to_string(CATALOG_PATH)
        .unwrap_or_else(|err| panic!("Failed to read catalog file {CATALOG_PATH}: {err}"));
    let catalog: CatalogFile = serde_json::from_str(&raw)
        .unwrap_or_else(|err| panic!("Failed to parse catalog file {CATALOG_PATH}: {err}"));

    let mut seen_ids = HashSet::new();
    let mut seen_ranks = HashSet::new();
    let mut records = String::new();
    let mut index_builder = phf_codegen::Map::new();

    for (position, entry) in catalog.distributions.iter().enumerate() {
        if entry.id.trim().is_empty() {
            panic!("Catalog entry #{position} has an empty id");
        }
        if !seen_ids.insert(entry.id.clone()) {
            panic!("Duplicate catalog id {:?}", entry.id);
        }
        if entry.rank == 0 || !seen_ranks.insert(entry.rank) {
            panic!("Catalog entry {:?} has a zero or duplicate rank {}", entry.id, entry.rank);
        }
        if !CATEGORY_NAMES.contains(&entry.category.as_str()) {
            panic!("Catalog entry {:?} has unknown category {:?}", entry.id, entry.category);
        }
        if !(0.0..=5.0).contains(&entry.rating) {
            panic!("Catalog entry {:?} has rating {} outside 0-5", entry.id, entry.rating);
        }
        if entry.popularity > 100 {
            panic!("Catalog entry {:?} has popularity {} above 100", entry.id, entry.popularity);
        }
        let date = NaiveDate::parse_from_str(&entry.last_update, "%Y-%m-%d").unwrap_or_else(|err| {
            panic!(
                "Catalog entry {:?} has invalid last_update {:?}: {err}",
                entry.id, entry.last_update
            )
        });

        writeln!(records, "    RawDistribution {{").unwrap();
        writeln!(records, "        id: {:?},", entry.id).unwrap();
        writeln!(records, "        name: {:?},", entry.name).unwrap();
        writeln!(records, "        description: {:?},", entry.description).unwrap();
        writeln!(records, "        logo: {:?},", entry.logo).unwrap();
        writeln!(records, "        rank: {},", entry.rank).unwrap();
        writeln!(records, "        rating: {:?},", entry.rating).unwrap();
        writeln!(records, "        downloads: {:?},", entry.downloads).unwrap();
        writeln!(
            records,
            "        last_update: ({}, {}, {}),",
            date.year(),
            date.month(),
            date.day()
        )
        .unwrap();
        writeln!(records, "        category: {:?},", entry.category).unwrap();
        writeln!(records, "        popularity: {},", entry.popularity).unwrap();
        writeln!(records, "        website: {:?},", entry.website).unwrap();
        writeln!(records, "        package_type: &{:?},", entry.package_type).unwrap();
        writeln!(records, "        architecture: &{:?},", entry.architecture).unwrap();
        writeln!(records, "        based_on: {:?},", entry.based_on).unwrap();
        writeln!(records, "        release_model: {:?},", entry.release_model).unwrap();
        writeln!(records, "        features: &{:?},", entry.features).unwrap();
        writeln!(records, "    }},").unwrap();

        index_builder.entry(entry.id.clone(), position.to_string());
    }

    let mut file = File::create(&dest_path).expect("create catalog_data.rs");
    writeln!(
        &mut file,
        "pub(super) static RAW_DISTRIBUTIONS: &[RawDistribution] = &[\n{records}];\n"
    )
    .expect("write catalog_data.rs");
    writeln!(
        &mut file,
        "pub(super) static DISTRIBUTION_INDEX: phf::Map<&'static str, usize> = {};",
        index_builder.build()
    )
    .expect("write catalog_data.rs");
}
