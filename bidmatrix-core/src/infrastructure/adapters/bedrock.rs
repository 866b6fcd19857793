// bidmatrix-core/src/infrastructure/adapters/bedrock.rs
//
// Amazon Bedrock through the Converse API. Credentials come from the
// default AWS chain (environment, ~/.aws/credentials, instance role).

use async_trait::async_trait;
use aws_sdk_bedrockruntime::{
    Client,
    types::{ContentBlock, ConversationRole, InferenceConfiguration, Message},
};
use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::error::BidMatrixError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::{CompletionRequest, ModelCaller};

pub struct BedrockModelCaller {
    client: Client,
    model_id: String,
}

impl BedrockModelCaller {
    pub async fn new(region: &str, model_id: &str) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()))
            .load()
            .await;
        Self {
            client: Client::new(&config),
            model_id: model_id.to_string(),
        }
    }
}

fn call_failed(reason: impl Into<String>) -> BidMatrixError {
    BidMatrixError::Infrastructure(InfrastructureError::ModelCall(reason.into()))
}

#[async_trait]
impl ModelCaller for BedrockModelCaller {
    #[instrument(skip(self, request), fields(model = %self.model_id, kind = %request.kind))]
    async fn complete(&self, request: &CompletionRequest) -> Result<String, BidMatrixError> {
        let start = Instant::now();

        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(request.prompt.clone()))
            .build()
            .map_err(|e| call_failed(format!("Failed to build message: {e}")))?;

        let max_tokens = i32::try_from(request.max_tokens).unwrap_or(i32::MAX);
        debug!(prompt_chars = request.prompt.chars().count(), max_tokens, "Calling Bedrock");

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .messages(message)
            .inference_config(InferenceConfiguration::builder().max_tokens(max_tokens).build())
            .send()
            .await
            .map_err(|e| call_failed(format!("Bedrock API error: {e:?}")))?;

        let output = response
            .output()
            .ok_or_else(|| call_failed("No output in response"))?;
        let message = output
            .as_message()
            .map_err(|_| call_failed("Output is not a message"))?;

        // Long answers can arrive split over several text blocks
        let text = message
            .content()
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n");

        if text.trim().is_empty() {
            return Err(call_failed("No text content in response"));
        }

        let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        match response.usage() {
            Some(usage) => info!(
                input_tokens = usage.input_tokens(),
                output_tokens = usage.output_tokens(),
                latency_ms,
                "Model call finished"
            ),
            None => info!(latency_ms, "Model call finished"),
        }

        Ok(text)
    }
}
