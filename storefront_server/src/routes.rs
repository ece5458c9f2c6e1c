//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. The business logic of the storefront
//! lives in `storefront_engine`, so the handlers here only decode requests, call the engine, and encode responses.
//!
//! A note about performance:
//! Each worker thread processes its requests on a single thread. Handlers must not block that thread: every call to
//! the payment processor is awaited, so the worker keeps serving other requests while a handler waits for Stripe.
use actix_web::{get, http::header::ContentType, web, HttpRequest, HttpResponse, Responder};
use log::*;
use storefront_engine::{helpers::parse_cart, CatalogApi, PaymentIntentApi, PaymentProcessor};

use crate::errors::ServerError;

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro.
// Requests with a method other than the route's own are answered with a 405 by `method_not_allowed`.
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .route(actix_web::Route::new().guard(actix_web::guard::$method()).to($name::< $( [< T $bounds:camel >], )+>))
                    .default_service(actix_web::web::to(|req: actix_web::HttpRequest| {
                        $crate::routes::method_not_allowed(req, $crate::routes::[< $method:upper >])
                    }));
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

pub const GET: &str = "GET";
pub const POST: &str = "POST";

/// The fallback for every route registered with `route!`.
pub async fn method_not_allowed(req: HttpRequest, allowed: &'static str) -> Result<HttpResponse, ServerError> {
    info!("💻️ Rejected {} {}. Only {allowed} is allowed.", req.method(), req.path());
    Err(ServerError::MethodNotAllowed { allowed })
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Payment intents  ----------------------------------------------------
route!(create_payment_intent => Post "/create-payment-intent" impl PaymentProcessor);
/// Route handler for creating a payment intent.
///
/// The body must be a JSON array of cart items (`{id, name, price, image, category}`, with `price` in cents). The
/// response holds the client secret the storefront needs to confirm the payment, and the payment intent's id:
/// `{"clientSecret": "...", "paymentintentid": "..."}`.
pub async fn create_payment_intent<B: PaymentProcessor>(
    req: HttpRequest,
    body: web::Bytes,
    api: web::Data<PaymentIntentApi<B>>,
) -> Result<HttpResponse, ServerError> {
    debug!("💻️ {} {} ({} bytes)", req.method(), req.uri(), body.len());
    let cart = parse_cart(&body).map_err(|e| {
        info!("💻️ {} received a malformed cart. {e}", req.path());
        ServerError::from(e)
    })?;
    let result = api.create_payment_intent(&cart).await.map_err(|e| {
        warn!("💻️ {} failed for a cart of {} items. {e}", req.path(), cart.len());
        ServerError::from(e)
    })?;
    Ok(HttpResponse::Ok().json(result))
}

//----------------------------------------------   Catalog  ----------------------------------------------------
route!(products => Get "/products" impl PaymentProcessor);
/// Route handler for the product catalog. Returns a JSON array of `{id, name, price, image, category}`.
pub async fn products<B: PaymentProcessor>(
    req: HttpRequest,
    api: web::Data<CatalogApi<B>>,
) -> Result<HttpResponse, ServerError> {
    trace!("💻️ Received catalog request");
    let items = api.list_products().await.map_err(|e| {
        warn!("💻️ {} failed. No catalog will be returned. {e}", req.path());
        ServerError::from(e)
    })?;
    let body = serde_json::to_string(&items).map_err(|e| {
        error!("💻️ Could not encode the product catalog. This is a bug. {e}");
        ServerError::EncodingError(e.to_string())
    })?;
    Ok(HttpResponse::Ok().content_type(ContentType::json()).body(body))
}
