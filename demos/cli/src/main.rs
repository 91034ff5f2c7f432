use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use messages_render::{render_request, RenderRequest};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "messages-cli",
    about = "Render thông báo theo mức độ nghiêm trọng từ file request JSON."
)]
struct Args {
    /// Đường dẫn tới file JSON request.
    #[arg(short, long)]
    input: PathBuf,

    /// Bật metadata client-side validation (data-*) trên container.
    #[arg(long)]
    client_validation: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!(input = ?args.input, "rendering request");
    let data = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Không đọc được file {:?}", args.input))?;

    let mut request: RenderRequest = serde_json::from_str(&data)
        .with_context(|| format!("Request không hợp lệ trong {:?}", args.input))?;
    if args.client_validation {
        request.environment.client_side_validation = true;
    }

    let rendered = render_request(&request)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered.html)?;

    eprintln!(
        "Generated at: {}\nMessages in request: {}\nDisplayed: {}",
        rendered.receipt.generated_at,
        request.messages.len(),
        rendered.receipt.len()
    );

    Ok(())
}
