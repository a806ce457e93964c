use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use iolyzer::profile::{DeviceProfile, PdLayout};
use iolyzer::settings::DecoderSettings;
use iolyzer::{seed_settings, AnalyzerError};

use crate::cmd::{InspectArgs, OutputFormat};

pub fn run(args: InspectArgs) -> Result<(), AnalyzerError> {
    let profile = DeviceProfile::from_path(&args.profile)?;
    let variant = profile.select_process_data(args.condition)?.clone();
    let settings = seed_settings(&profile, args.condition)?.get();

    match args.format {
        OutputFormat::Json => print_json(&profile, &settings),
        OutputFormat::Table => print_tables(&profile, &variant.input, &variant.output, &settings),
    }
    Ok(())
}

fn print_json(profile: &DeviceProfile, settings: &DecoderSettings) {
    let out = serde_json::json!({
        "document": profile.document,
        "settings": settings,
        "process_data_conditions": profile.condition_values(),
        "variables": profile.variables,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
    );
}

fn print_tables(
    profile: &DeviceProfile,
    input: &PdLayout,
    output: &PdLayout,
    settings: &DecoderSettings,
) {
    if let Some(vendor) = &profile.document.vendor {
        println!("Vendor:  {vendor}");
    }
    if let Some(device) = &profile.document.device {
        println!("Device:  {device}");
    }
    if let Some(version) = &profile.document.version {
        println!("Version: {version}");
    }

    println!("\nM-Sequence payload sizes");
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["STAGE", "OD", "PD IN", "PD OUT"]);
    table.add_row(vec![
        "Startup".to_string(),
        settings.startup.od.to_string(),
        "-".to_string(),
        "-".to_string(),
    ]);
    table.add_row(vec![
        "Preoperate".to_string(),
        settings.preoperate.od.to_string(),
        "-".to_string(),
        "-".to_string(),
    ]);
    table.add_row(vec![
        "Operate".to_string(),
        settings.operate.od.to_string(),
        settings.operate.pd_in.to_string(),
        settings.operate.pd_out.to_string(),
    ]);
    println!("{table}");

    println!("\nProcess data layout");
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["DIR", "FIELD", "OFFSET", "BITS", "TYPE"]);
    for (direction, layout) in [("in", input), ("out", output)] {
        for field in &layout.fields {
            table.add_row(vec![
                direction.to_string(),
                field.name.clone(),
                field.bit_offset.to_string(),
                field.bit_length.to_string(),
                field.datatype.to_string(),
            ]);
        }
    }
    println!("{table}");

    if !profile.variables.is_empty() {
        println!("\nDevice-specific variables");
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["INDEX", "NAME"]);
        for variable in &profile.variables {
            table.add_row(vec![
                format!("0x{:04x}", variable.index),
                variable.name.clone(),
            ]);
        }
        println!("{table}");
    }
}
