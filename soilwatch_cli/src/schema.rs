use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use soilwatch_core::normalized_reading::NormalizedReading;
use tracing::info;

pub fn run(output: Option<PathBuf>) -> Result<(), anyhow::Error> {
    let schema = schemars::schema_for!(Vec<NormalizedReading>);
    let json = serde_json::to_string_pretty(&schema)?;

    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(&path)?);
            writer.write_all(json.as_bytes())?;
            writer.flush()?;
            info!("Schema has been written to {:?}", path);
        }
        None => println!("{json}"),
    }

    Ok(())
}
