use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use iolyzer::dispatch::AnalyzerMode;

use crate::cmd::{ModesArgs, OutputFormat};

pub fn run(args: ModesArgs) {
    match args.format {
        OutputFormat::Json => {
            let out: Vec<_> = AnalyzerMode::ALL
                .into_iter()
                .map(|mode| {
                    serde_json::json!({
                        "name": mode.name(),
                        "description": mode.description(),
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&out).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["MODE", "DESCRIPTION"]);
            for mode in AnalyzerMode::ALL {
                table.add_row(vec![mode.name().to_string(), mode.description().to_string()]);
            }
            println!("{table}");
        }
    }
}
