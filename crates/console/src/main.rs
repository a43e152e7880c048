//! `storefront-console` -- interactive product form.
//!
//! Reads commands from stdin, one per line, and runs them against the
//! product service. After each command the status slot is printed; after a
//! search the result table is printed too. Logs go to stderr.
//!
//! # Environment variables
//!
//! | Variable             | Required | Default                 | Description                    |
//! |----------------------|----------|-------------------------|--------------------------------|
//! | `PRODUCTS_API_URL`   | no       | `http://localhost:8080` | Product service origin         |
//! | `PRODUCTS_BASE_PATH` | no       | `/products`             | Path of the product collection |
//! | `RUST_LOG`           | no       | `storefront_console=info,storefront_client=info` | Log filter |

mod command;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_client::{ClientConfig, FormController, Operation, ProductApi};

use command::{Command, HELP};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront_console=info,storefront_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(url = %config.collection_url(), "Loaded client configuration");

    let mut controller = FormController::new(ProductApi::new(&config));
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            Command::Set { field, value } => controller.form_mut().set_field(field, &value),
            Command::Run(operation) => {
                controller.run(operation).await;
                println!("{}", controller.status());
                if operation == Operation::Search {
                    if let Some(table) = controller.results() {
                        print!("{table}");
                    }
                }
            }
            Command::Clear => controller.clear(),
            Command::Show => print!("{}", controller.form()),
            Command::Html => match controller.results() {
                Some(table) => println!("{}", table.render_html()),
                None => println!("No search results yet"),
            },
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    tracing::info!("Console closed");
    Ok(())
}
