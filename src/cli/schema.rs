use crate::config::Config;
use schemars::schema_for;

pub fn execute() -> anyhow::Result<()> {
    println!("{}", schema_json()?);
    Ok(())
}

fn schema_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&schema_for!(Config))
}
