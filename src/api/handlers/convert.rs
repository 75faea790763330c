// src/api/handlers/convert.rs
use actix_web::{web, HttpResponse, Result};
use crate::converter::convert_st_to_python;
use crate::errors::ConvertError;
use crate::models::{ConvertRequest, ConvertResponse, ErrorResponse};

/// `POST /convert`: Structured Text in, Python out.
pub async fn convert(req: web::Json<ConvertRequest>) -> Result<HttpResponse> {
    let st_code = req.into_inner().st_code;

    if st_code.is_empty() {
        log::warn!("Rejecting conversion request with empty input");
        return Ok(HttpResponse::BadRequest().json(ErrorResponse {
            error: ConvertError::EmptyInput.to_string(),
        }));
    }

    let converted_code = convert_st_to_python(&st_code);
    log::info!(
        "Converted {} bytes of ST into {} bytes of Python",
        st_code.len(),
        converted_code.len()
    );

    Ok(HttpResponse::Ok().json(ConvertResponse { converted_code }))
}
