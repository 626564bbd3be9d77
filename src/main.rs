use ceo_mailer::domain::ports::ConfigProvider;
use ceo_mailer::utils::logger;
use ceo_mailer::{
    CliConfig, ConsoleTerminal, EmailGenerator, EmailSession, MailerError, OpenAiClient, Settings,
};
use clap::Parser;

fn report(e: &MailerError) {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_format);
    tracing::info!("Starting ceo-mailer");

    // Configuration problems surface before the first question is asked.
    let settings = match Settings::load(&config) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed");
            report(&e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Resolved settings: {:?}", settings);

    let client = match OpenAiClient::from_config(&settings) {
        Ok(client) => client,
        Err(e) => {
            report(&e);
            std::process::exit(1);
        }
    };
    let generator = EmailGenerator::new(client, settings.model());
    let mut session = EmailSession::new(ConsoleTerminal::stdio(), generator);

    match session.run().await {
        Ok(Some(_)) => tracing::info!("✅ Email generated"),
        Ok(None) => tracing::info!("Email generation failed; failure message shown"),
        Err(e) => {
            report(&e);
            std::process::exit(1);
        }
    }

    Ok(())
}
