use axum::{body::Bytes, extract::State, Json};

use crate::{
  assistant::{
      model::{AssistantRequest, AssistantResponse},
      prompt::build_prompt,
      service::AssistantService,
  },
  error::AppError,
  models::parse_body,
};

pub async fn complete(
  State(service): State<AssistantService>,
  body: Bytes,
) -> Result<Json<AssistantResponse>, AppError> {
  let request: AssistantRequest = parse_body(&body)?;
  let messages = request
      .messages
      .as_ref()
      .and_then(|messages| messages.as_array())
      .ok_or_else(|| AppError::ValidationError("Invalid messages parameter".into()))?;

  tracing::info!(
      message_count = messages.len(),
      has_context = request.context.is_some(),
      "Assistant completion requested"
  );

  let prompt = build_prompt(messages, request.context.as_ref());
  let generation = service.generate(&prompt).await?;

  Ok(Json(AssistantResponse::from(generation)))
}
