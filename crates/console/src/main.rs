//! Demo driver: log in against the demo accounts, optionally navigate, load
//! dashboard statistics when the role may see them, and print the result as
//! JSON.

use anyhow::Context;

use claimdesk_auth::{Action, Credentials, ModuleId, Session};
use claimdesk_console::demo::{demo_directory, demo_statistics};
use claimdesk_console::{Console, ConsoleConfig, load_statistics};

const USAGE: &str = "usage: claimdesk <email> <password> [module-id] [sub-view]";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env().context("failed to read configuration")?;
    claimdesk_observability::init_with(config.log_format);

    let mut args = std::env::args().skip(1);
    let (Some(email), Some(password)) = (args.next(), args.next()) else {
        anyhow::bail!(USAGE);
    };

    let mut console = Console::new(Session::new(demo_directory()?));
    console
        .login(&Credentials::new(email, password))
        .context("login failed")?;

    if let Some(module) = args.next() {
        let module: ModuleId = module.parse()?;
        let sub_view = args.next().unwrap_or_else(|| "Overview".to_string());
        let outcome = console.change_view(module, sub_view);
        tracing::info!(?outcome, "requested navigation");
    }

    let statistics = if console.session().permits(ModuleId::Statistics, &Action::VIEW) {
        let stats = load_statistics(&demo_statistics(), &config.retry)
            .await
            .context("failed to load dashboard statistics")?;
        Some(stats)
    } else {
        None
    };

    let output = serde_json::json!({
        "console": console.snapshot(),
        "statistics": statistics,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
