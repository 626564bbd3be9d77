use crate::core::generator::EmailGenerator;
use crate::core::prompt::FIRM_NAME;
use crate::domain::model::CompanyProfile;
use crate::domain::ports::{CompletionClient, Terminal};
use crate::utils::error::Result;

pub const CEO_NAME_QUESTION: &str = "Enter the CEO's name: ";
pub const COMPANY_NAME_QUESTION: &str = "Enter the company name: ";
pub const DESCRIPTION_QUESTION: &str = "Enter a short description of the company: ";
pub const GENERATING_NOTICE: &str = "\nGenerating email...\n";
pub const EMAIL_HEADER: &str = "Generated Email:";
pub const EMAIL_RULE: &str = "----------------";
pub const FAILURE_MESSAGE: &str = "Failed to generate email. Please try again.";

pub fn welcome_banner() -> String {
    format!("Welcome to the Email Generator for {}", FIRM_NAME)
}

/// One interactive run: three questions, one completion call, one answer.
pub struct EmailSession<T: Terminal, C: CompletionClient> {
    terminal: T,
    generator: EmailGenerator<C>,
}

impl<T: Terminal, C: CompletionClient> EmailSession<T, C> {
    pub fn new(terminal: T, generator: EmailGenerator<C>) -> Self {
        Self {
            terminal,
            generator,
        }
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Runs the conversation. The terminal is closed before this returns, whatever the outcome.
    pub async fn run(&mut self) -> Result<Option<String>> {
        let outcome = self.converse().await;
        self.terminal.close();
        outcome
    }

    async fn converse(&mut self) -> Result<Option<String>> {
        self.terminal.say(&welcome_banner())?;

        let profile = self.collect_profile()?;
        tracing::info!("Collected details for {}", profile.company_name);

        self.terminal.say(GENERATING_NOTICE)?;

        let email = self.generator.generate(&profile).await;
        match &email {
            Some(text) => {
                self.terminal.say(EMAIL_HEADER)?;
                self.terminal.say(EMAIL_RULE)?;
                self.terminal.say(text)?;
            }
            None => {
                tracing::warn!("No email generated for {}", profile.company_name);
                self.terminal.say(FAILURE_MESSAGE)?;
            }
        }

        Ok(email)
    }

    fn collect_profile(&mut self) -> Result<CompanyProfile> {
        let ceo_name = self.terminal.ask(CEO_NAME_QUESTION)?;
        let company_name = self.terminal.ask(COMPANY_NAME_QUESTION)?;
        let description = self.terminal.ask(DESCRIPTION_QUESTION)?;
        Ok(CompanyProfile {
            ceo_name,
            company_name,
            description,
        })
    }
}
