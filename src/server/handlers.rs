use super::*;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::error::InternalError;
use actix_web::error::QueryPayloadError;

/// Status for each failure kind.
fn reject(e: &JankenError) -> HttpResponse {
    let body = ApiError::from(e);
    match e {
        JankenError::MissingHand | JankenError::UnknownHand(_) => {
            HttpResponse::BadRequest().json(body)
        }
        JankenError::RecordNotFound(_) => HttpResponse::NotFound().json(body),
        JankenError::StorageUnavailable => HttpResponse::ServiceUnavailable().json(body),
        JankenError::InvalidHandCode(_) => HttpResponse::InternalServerError().json(body),
    }
}

/// Query strings that fail to deserialize get the same payload as bad hands.
pub fn malformed(e: QueryPayloadError, _: &HttpRequest) -> actix_web::Error {
    log::warn!("rejected query: {}", e);
    let body = ApiError {
        error: e.to_string(),
    };
    InternalError::from_response(e, HttpResponse::BadRequest().json(body)).into()
}

pub async fn greet(greeting: web::Data<Greeting>) -> impl Responder {
    HttpResponse::Ok().json(ApiGreeting {
        message: format!("{} World!", greeting.0),
    })
}

pub async fn play(janken: web::Data<Janken>, query: web::Query<PlayRequest>) -> impl Responder {
    match janken
        .play(query.hand.as_deref(), query.user.as_deref())
        .await
    {
        Ok(record) => HttpResponse::Created().json(ApiMatch::from(&record)),
        Err(e) => reject(&e),
    }
}

pub async fn lookup(janken: web::Data<Janken>, path: web::Path<String>) -> impl Responder {
    match janken.lookup(&path.into_inner()).await {
        Ok(record) => HttpResponse::Ok().json(ApiMatch::from(&record)),
        Err(e) => reject(&e),
    }
}

pub async fn health(janken: web::Data<Janken>) -> impl Responder {
    match janken
        .store()
        .backend()
        .ping()
        .await
        .inspect_err(|e| log::error!("health check failed: {:#}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("storage unavailable"),
    }
}
