use anyhow::Result;
use clap::Parser;
use customer_transform::utils::logger;
use customer_transform::{transform, CliConfig};
use std::io::Read;

fn main() -> Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting customer-transform CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 讀取輸入記錄
    let raw = match read_input(config.input.as_deref()) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!("❌ Failed to read input: {}", e);
            eprintln!("❌ Failed to read input: {}", e);
            std::process::exit(1);
        }
    };

    let value: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("❌ Input is not valid JSON: {}", e);
            eprintln!("❌ Input is not valid JSON: {}", e);
            std::process::exit(1);
        }
    };

    // 驗證並轉換
    match transform(&value) {
        Ok(profile) => {
            let json = if config.pretty {
                serde_json::to_string_pretty(&profile)?
            } else {
                serde_json::to_string(&profile)?
            };

            // 輸出結果
            if let Err(e) = write_output(config.output.as_deref(), &json) {
                tracing::error!("❌ Failed to write output: {}", e);
                eprintln!("❌ Failed to write output: {}", e);
                std::process::exit(1);
            }

            tracing::info!("✅ Customer record transformed successfully!");
            if let Some(path) = &config.output {
                tracing::info!("📁 Profile saved to: {}", path);
                println!("✅ Profile saved to: {}", path);
            }
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!("❌ Transform failed on field '{}': {}", e.field(), e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            std::process::exit(1);
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&str>, json: &str) -> std::io::Result<()> {
    match path {
        Some(path) => std::fs::write(path, format!("{}\n", json)),
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}
