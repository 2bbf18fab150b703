use async_graphql::{Context, Object};

use crate::{
    app_state::AppState,
    graphql::helpers::to_graphql,
    models::dto::{
        request::{
            AbandonSessionRequest, AdvanceSessionRequest, CompleteSessionRequest,
            StartSessionRequest,
        },
        response::AssessmentSessionDto,
    },
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn start_assessment(
        &self,
        ctx: &Context<'_>,
        input: StartSessionRequest,
    ) -> async_graphql::Result<AssessmentSessionDto> {
        let state = ctx.data::<AppState>()?;
        let session = to_graphql(state.session_service.start(input).await)?;
        Ok(session.into())
    }

    async fn advance_assessment(
        &self,
        ctx: &Context<'_>,
        token: String,
        input: AdvanceSessionRequest,
    ) -> async_graphql::Result<AssessmentSessionDto> {
        let state = ctx.data::<AppState>()?;
        let session = to_graphql(state.session_service.advance(&token, input).await)?;
        Ok(session.into())
    }

    async fn complete_assessment(
        &self,
        ctx: &Context<'_>,
        token: String,
        input: CompleteSessionRequest,
    ) -> async_graphql::Result<AssessmentSessionDto> {
        let state = ctx.data::<AppState>()?;
        let session = to_graphql(state.session_service.complete(&token, input).await)?;
        Ok(session.into())
    }

    async fn finish_assessment(
        &self,
        ctx: &Context<'_>,
        token: String,
    ) -> async_graphql::Result<AssessmentSessionDto> {
        let state = ctx.data::<AppState>()?;
        let session = to_graphql(state.session_service.finish(&token).await)?;
        Ok(session.into())
    }

    async fn abandon_assessment(
        &self,
        ctx: &Context<'_>,
        token: String,
        input: Option<AbandonSessionRequest>,
    ) -> async_graphql::Result<AssessmentSessionDto> {
        let state = ctx.data::<AppState>()?;
        let session = to_graphql(
            state
                .session_service
                .abandon(&token, input.unwrap_or_default())
                .await,
        )?;
        Ok(session.into())
    }
}
