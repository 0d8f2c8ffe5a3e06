//! Member API endpoints.

use axum::extract::State;
use serde_json::Value;

use super::{created, no_content, success, ApiResult, JsonBody, MemberId};
use crate::models::StatusMessage;
use crate::serializers::MemberSerializer;
use crate::AppState;

/// GET /members - List all members.
pub async fn list_members(State(state): State<AppState>) -> ApiResult<Vec<Value>> {
    let members = state.members.list_members().await?;
    success(
        members
            .iter()
            .map(MemberSerializer::to_representation)
            .collect(),
    )
}

/// POST /members - Create a new member.
pub async fn create_member(
    State(state): State<AppState>,
    JsonBody(data): JsonBody,
) -> ApiResult<Value> {
    let member = state.members.create_member(&data).await?;
    created(MemberSerializer::to_representation(&member))
}

/// GET /members/{id} - Get a single member.
pub async fn get_member(State(state): State<AppState>, MemberId(id): MemberId) -> ApiResult<Value> {
    let member = state.members.get_member(id).await?;
    success(MemberSerializer::to_representation(&member))
}

/// PUT /members/{id} - Replace a member's fields.
pub async fn update_member(
    State(state): State<AppState>,
    MemberId(id): MemberId,
    JsonBody(data): JsonBody,
) -> ApiResult<Value> {
    let member = state.members.update_member(id, &data).await?;
    success(MemberSerializer::to_representation(&member))
}

/// DELETE /members/{id} - Delete a member.
pub async fn delete_member(State(state): State<AppState>, MemberId(id): MemberId) -> ApiResult<()> {
    state.members.delete_member(id).await?;
    no_content()
}

/// POST /members/{id}/activate - Mark a member as active.
pub async fn activate_member(
    State(state): State<AppState>,
    MemberId(id): MemberId,
) -> ApiResult<StatusMessage> {
    state.members.activate_member(id).await?;
    success(StatusMessage::new("member activated"))
}
