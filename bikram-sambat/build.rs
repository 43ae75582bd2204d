use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use flate2::write::DeflateEncoder;
use flate2::Compression;
use rustc_version::{version_meta, Channel};

use bs_month_table::{MonthLengthTable, YearLengths, MONTHS_PER_YEAR};

fn detect_build_channel() {
    let channel = match version_meta().unwrap().channel {
        Channel::Stable => "CHANNEL_STABLE",
        Channel::Beta => "CHANNEL_BETA",
        Channel::Nightly => "CHANNEL_NIGHTLY",
        Channel::Dev => "CHANNEL_DEV",
    };

    println!("cargo:rustc-cfg={}", channel)
}

fn load_month_table(in_path: &str) -> Result<MonthLengthTable, Box<dyn std::error::Error>> {
    let mut first_year = None;
    let mut years = Vec::new();
    let lines = BufReader::new(File::open(in_path)?).lines();

    for (line_num, line) in (1..).zip(lines) {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let year: i32 = fields.next().expect("empty line").parse()?;

        let months: Vec<u8> = fields.map(str::parse::<u8>).collect::<Result<_, _>>()?;
        let months: [u8; MONTHS_PER_YEAR] = months.try_into().map_err(|months: Vec<_>| {
            format!(
                "{in_path}:{line_num}: expected {MONTHS_PER_YEAR} months, found {}",
                months.len()
            )
        })?;

        let expected_year = *first_year.get_or_insert(year) + years.len() as i32;

        if year != expected_year {
            return Err(format!("{in_path}:{line_num}: expected year {expected_year}").into());
        }

        let year = YearLengths::new(months).map_err(|err| format!("{in_path}:{line_num}: {err}"))?;
        years.push(year);
    }

    let first_year = first_year.ok_or_else(|| format!("{in_path}: no year found"))?;
    Ok(MonthLengthTable::new(first_year, years)?)
}

fn generate_month_table(out_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    const IN_PATH: &str = "bikram-sambat/data/month_lengths.txt";
    let table = load_month_table(IN_PATH)?;

    // Encoded table
    let out_path = out_dir.join("month_lengths.bin");

    let mut output = DeflateEncoder::new(
        BufWriter::new(File::create(&out_path)?),
        Compression::best(),
    );

    table.serialize(&mut output)?;
    output.finish()?;

    // Supported range, which must be known at compile time
    let bounds_path = out_dir.join("month_table_bounds.rs");

    std::fs::write(
        &bounds_path,
        format!(
            "/// First year supported by the built-in table.\n\
             pub const MIN_YEAR: i32 = {};\n\
             /// Last year supported by the built-in table.\n\
             pub const MAX_YEAR: i32 = {};\n",
            table.first_year(),
            table.last_year(),
        ),
    )?;

    println!("cargo::rerun-if-changed={IN_PATH}");

    // Export path values
    println!(
        "cargo::rustc-env=BS_MONTH_TABLE_FILE={}",
        out_path.display()
    );

    println!(
        "cargo::rustc-env=BS_MONTH_TABLE_BOUNDS={}",
        bounds_path.display()
    );

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir: PathBuf = env::var_os("OUT_DIR")
        .expect("cargo build didn't specify an `OUT_DIR` variable")
        .into();

    generate_month_table(&out_dir)?;
    detect_build_channel();
    println!("cargo::rerun-if-changed=bikram-sambat/build.rs");
    Ok(())
}
