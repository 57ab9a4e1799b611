use common::config::Validate;
use common::games::snake::ShareTemplate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ShareConfig {
    /// `{score}` is replaced with the score being shared.
    pub message_template: String,
    pub target_url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        let template = ShareTemplate::default();
        Self {
            message_template: template.message_template,
            target_url: template.target_url,
        }
    }
}

impl ShareConfig {
    pub fn to_template(&self) -> ShareTemplate {
        ShareTemplate {
            message_template: self.message_template.clone(),
            target_url: self.target_url.clone(),
        }
    }
}

impl Validate for ShareConfig {
    fn validate(&self) -> Result<(), String> {
        self.to_template().validate()
    }
}
