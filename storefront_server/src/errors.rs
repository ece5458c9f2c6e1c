use actix_web::{
    error::ResponseError,
    http::{
        header::{self, ContentType},
        StatusCode,
    },
    HttpResponse,
};
use storefront_engine::{CatalogError, PaymentIntentError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("Method Not Allowed")]
    MethodNotAllowed { allowed: &'static str },
    #[error("{0}")]
    UpstreamError(String),
    #[error("Could not encode the response. {0}")]
    EncodingError(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::UpstreamError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::EncodingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut res = HttpResponse::build(self.status_code());
        res.insert_header(ContentType::plaintext());
        if let Self::MethodNotAllowed { allowed } = self {
            res.insert_header((header::ALLOW, *allowed));
        }
        res.body(format!("{self}\n"))
    }
}

impl From<PaymentIntentError> for ServerError {
    fn from(e: PaymentIntentError) -> Self {
        match e {
            PaymentIntentError::MalformedCart(_) => Self::BadRequest(e.to_string()),
            PaymentIntentError::AmountOverflow(_) => Self::BadRequest(e.to_string()),
            PaymentIntentError::ProcessorError(e) => Self::UpstreamError(e.to_string()),
        }
    }
}

impl From<CatalogError> for ServerError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::ProcessorError(e) => Self::UpstreamError(e.to_string()),
        }
    }
}
