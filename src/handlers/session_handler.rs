use actix_web::{get, patch, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{
            AbandonSessionRequest, AdvanceSessionRequest, CompleteSessionRequest,
            StartSessionRequest, SummaryFilterRequest, UpdateSubjectNameRequest,
        },
        response::AssessmentSessionDto,
    },
};

#[post("/api/assessments/sessions")]
pub async fn start_session(
    state: web::Data<AppState>,
    request: web::Json<StartSessionRequest>,
) -> Result<HttpResponse, AppError> {
    let session = state.session_service.start(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(AssessmentSessionDto::from(session)))
}

#[get("/api/assessments/sessions/{token}")]
pub async fn get_session(
    state: web::Data<AppState>,
    token: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let session = state.session_service.get(&token).await?;
    Ok(HttpResponse::Ok().json(AssessmentSessionDto::from(session)))
}

#[put("/api/assessments/sessions/{token}/progress")]
pub async fn advance_session(
    state: web::Data<AppState>,
    token: web::Path<String>,
    request: web::Json<AdvanceSessionRequest>,
) -> Result<HttpResponse, AppError> {
    let session = state
        .session_service
        .advance(&token, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(AssessmentSessionDto::from(session)))
}

#[post("/api/assessments/sessions/{token}/complete")]
pub async fn complete_session(
    state: web::Data<AppState>,
    token: web::Path<String>,
    request: web::Json<CompleteSessionRequest>,
) -> Result<HttpResponse, AppError> {
    let session = state
        .session_service
        .complete(&token, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(AssessmentSessionDto::from(session)))
}

#[post("/api/assessments/sessions/{token}/finish")]
pub async fn finish_session(
    state: web::Data<AppState>,
    token: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let session = state.session_service.finish(&token).await?;
    Ok(HttpResponse::Ok().json(AssessmentSessionDto::from(session)))
}

#[post("/api/assessments/sessions/{token}/abandon")]
pub async fn abandon_session(
    state: web::Data<AppState>,
    token: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    // The reason is optional, so an empty body is accepted; anything else must parse.
    let request: AbandonSessionRequest = if body.iter().all(u8::is_ascii_whitespace) {
        AbandonSessionRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|err| AppError::ValidationError(format!("Invalid request body: {}", err)))?
    };
    let session = state.session_service.abandon(&token, request).await?;
    Ok(HttpResponse::Ok().json(AssessmentSessionDto::from(session)))
}

#[get("/api/assessments/analytics")]
pub async fn assessment_summary(
    state: web::Data<AppState>,
    query: web::Query<SummaryFilterRequest>,
) -> Result<HttpResponse, AppError> {
    let summaries = state
        .analytics_service
        .summarize(query.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(summaries))
}

// Administrative routes; access control sits in front of this service.

#[get("/api/admin/assessments/sessions")]
pub async fn list_sessions(
    state: web::Data<AppState>,
    query: web::Query<SummaryFilterRequest>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner().into_filter()?;
    let sessions = state.session_service.list(&filter).await?;
    Ok(HttpResponse::Ok().json(sessions))
}

#[patch("/api/admin/assessments/sessions/{id}/subject")]
pub async fn rename_subject(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateSubjectNameRequest>,
) -> Result<HttpResponse, AppError> {
    let session = state
        .session_service
        .rename_subject(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(session))
}
