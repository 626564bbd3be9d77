use crate::core::prompt;
use crate::domain::model::CompanyProfile;
use crate::domain::ports::CompletionClient;

pub struct EmailGenerator<C: CompletionClient> {
    client: C,
    model: String,
}

impl<C: CompletionClient> EmailGenerator<C> {
    pub fn new(client: C, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn with_default_model(client: C) -> Self {
        Self::new(client, prompt::DEFAULT_MODEL)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the trimmed email text, or `None` if the completion call failed or came back blank.
    pub async fn generate(&self, profile: &CompanyProfile) -> Option<String> {
        let request = prompt::build_request(profile, &self.model);
        tracing::debug!(
            "Requesting email for {} (model: {}, software clause: {})",
            profile.company_name,
            self.model,
            prompt::is_software_company(&profile.description)
        );

        match self.client.complete(&request).await {
            Ok(content) => {
                tracing::debug!("Received {} characters from completion API", content.len());
                let email = content.trim();
                if email.is_empty() {
                    tracing::error!("Error generating email: completion API returned empty content");
                    return None;
                }
                Some(email.to_string())
            }
            Err(e) => {
                tracing::error!("Error generating email: {}", e);
                None
            }
        }
    }
}
