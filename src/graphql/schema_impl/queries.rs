use async_graphql::{Context, Object};

use crate::{
    app_state::AppState,
    graphql::helpers::to_graphql,
    models::dto::{
        request::SummaryFilterRequest,
        response::{AssessmentSessionDto, AssessmentSummary},
    },
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn assessment_session(
        &self,
        ctx: &Context<'_>,
        token: String,
    ) -> async_graphql::Result<AssessmentSessionDto> {
        let state = ctx.data::<AppState>()?;
        let session = to_graphql(state.session_service.get(&token).await)?;
        Ok(session.into())
    }

    async fn assessment_summary(
        &self,
        ctx: &Context<'_>,
        filter: Option<SummaryFilterRequest>,
    ) -> async_graphql::Result<Vec<AssessmentSummary>> {
        let state = ctx.data::<AppState>()?;
        to_graphql(
            state
                .analytics_service
                .summarize(filter.unwrap_or_default())
                .await,
        )
    }
}
