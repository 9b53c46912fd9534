use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;

use freightgate::scaffold::{render_extension, Feature, ScaffoldContext};

#[derive(Parser)]
#[command(name = "freightgate-cli")]
#[command(about = "Management CLI for the Shipping Gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[arg(short, long, default_value = "")]
    key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check gateway health
    Status,
    /// List configured carriers
    Carriers,
    /// List scheduled pickups
    Pickups,
    /// Render boilerplate for a new carrier extension
    Scaffold {
        /// Carrier identifier, e.g. freight_express
        id: String,

        /// Display name, e.g. "Freight Express"
        #[arg(long)]
        name: String,

        /// Features to enable (rating, tracking, shipping, pickup, address_validation)
        #[arg(long, value_delimiter = ',', default_values_t = [
            "rating".to_string(), "tracking".to_string(),
            "shipping".to_string(), "pickup".to_string(),
        ])]
        features: Vec<String>,

        /// Generate JSON API plumbing instead of XML
        #[arg(long)]
        json_api: bool,

        /// Directory the extension files are written under
        #[arg(long, default_value = "src/carriers")]
        out_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    if !cli.key.is_empty() {
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", cli.key))?,
        );
    }

    match cli.command {
        Commands::Status => {
            let res = client
                .get(format!("{}/health", cli.url))
                .headers(headers)
                .send()
                .await?;
            println!("{} {}", res.status(), res.text().await?);
        }
        Commands::Carriers => {
            let res = client
                .get(format!("{}/v1/carriers", cli.url))
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Pickups => {
            let res = client
                .get(format!("{}/v1/pickups", cli.url))
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Scaffold {
            id,
            name,
            features,
            json_api,
            out_dir,
        } => {
            let features = features
                .iter()
                .map(|f| f.parse::<Feature>())
                .collect::<Result<Vec<_>, _>>()?;

            let ctx = ScaffoldContext {
                id,
                name,
                features,
                is_xml_api: !json_api,
            };

            for file in render_extension(&ctx) {
                let path = out_dir.join(&file.path);
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&path, &file.contents)?;
                println!("wrote {}", path.display());
            }
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
