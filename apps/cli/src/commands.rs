use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use cobalt_format::{diff, parse_json, render, Style};
use cobalt_models::{FhirR4Parser, ParserConfig, Preset, Resource, ResourceType};
use serde_json::Value;
use tracing::info;

fn read_json(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_json(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn decode(parser: &FhirR4Parser, path: &Path) -> Result<(Value, Resource)> {
    let value = read_json(path)?;
    let resource = parser
        .parse_resource_value(&value)
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    Ok((value, resource))
}

pub fn summary(resource: &Resource) -> String {
    let mut line = format!(
        "{}/{}",
        resource.resource_type(),
        resource.id().unwrap_or("<no id>")
    );
    if let Some(domain) = resource.as_domain_resource() {
        line.push_str(&format!(
            ": {} contained, {} extension(s)",
            domain.contained().len(),
            domain.extension().len() + domain.modifier_extension().len()
        ));
    }
    if let Some(updated) = resource
        .meta()
        .and_then(|meta| meta.last_updated.as_ref())
        .and_then(|instant| instant.value.as_ref())
    {
        line.push_str(&format!(", last updated {}", updated));
    }
    line
}

pub fn parse(config: &ParserConfig, file: &Path, expected: Option<&str>) -> Result<()> {
    let expected = expected
        .map(|name| {
            ResourceType::from_name_ignore_case(name)
                .with_context(|| format!("Unsupported resource type '{}'", name))
        })
        .transpose()?;

    let parser = FhirR4Parser::with_config(config.clone());
    let (_, resource) = decode(&parser, file)?;
    if let Some(expected) = expected {
        if resource.resource_type() != expected {
            bail!(
                "{}: expected {}, found {}",
                file.display(),
                expected,
                resource.resource_type()
            );
        }
    }
    println!("{}", summary(&resource));
    Ok(())
}

pub fn roundtrip(config: &ParserConfig, files: &[PathBuf]) -> Result<()> {
    if !config.is_lossless() {
        tracing::warn!("configuration drops input, round-trips may report differences");
    }
    let parser = FhirR4Parser::with_config(config.clone());

    let mut failed = 0;
    for file in files {
        match decode(&parser, file) {
            Ok((original, resource)) => {
                let encoded = parser.from_fhir_value(&resource);
                let differences = diff(&original, &encoded);
                if differences.is_empty() {
                    println!("ok    {}", file.display());
                } else {
                    failed += 1;
                    println!("FAIL  {}", file.display());
                    for difference in &differences {
                        println!("      {}", difference);
                    }
                }
            }
            Err(err) => {
                failed += 1;
                println!("FAIL  {}", file.display());
                println!("      {:#}", err);
            }
        }
    }

    info!(total = files.len(), failed, "round-trip finished");
    if failed > 0 {
        bail!("{} of {} file(s) did not round-trip", failed, files.len());
    }
    Ok(())
}

pub fn format(config: &ParserConfig, file: &Path, pretty: bool) -> Result<()> {
    let parser = FhirR4Parser::with_config(config.clone());
    let (_, resource) = decode(&parser, file)?;
    let style = if pretty || config.pretty {
        Style::Pretty
    } else {
        Style::Compact
    };
    println!("{}", render(&parser.from_fhir_value(&resource), style)?);
    Ok(())
}

pub fn types() -> Result<()> {
    for resource_type in ResourceType::ALL {
        if resource_type.is_domain_resource() {
            println!("{}", resource_type);
        } else {
            println!("{} (resource)", resource_type);
        }
    }
    Ok(())
}

pub fn config(config: &ParserConfig, preset: Option<Preset>) -> Result<()> {
    let config = match preset {
        Some(preset) => ParserConfig::preset(preset),
        None => config.clone(),
    };
    print!("{}", config.to_yaml()?);
    Ok(())
}
