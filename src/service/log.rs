use colored::Colorize;
use env_logger::Builder;
use log::{info, Level};
use std::io::Write;
use std::future::{ready, Ready};
use std::time::Instant;
use actix_web::{
   dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
   Error,
};
use futures_util::future::LocalBoxFuture;

/// Logs every request line and the status it was answered with.
pub struct LoggerMiddleware;

impl<S, B> Transform<S, ServiceRequest> for LoggerMiddleware
where
   S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
   S::Future: 'static,
   B: 'static,
{
   type Response = ServiceResponse<B>;
   type Error = Error;
   type InitError = ();
   type Transform = LoggerMiddlewareService<S>;
   type Future = Ready<Result<Self::Transform, Self::InitError>>;

   fn new_transform(&self, service: S) -> Self::Future {
      ready(Ok(LoggerMiddlewareService { service }))
   }
}

pub struct LoggerMiddlewareService<S> {
   service: S
}

impl<S, B> Service<ServiceRequest> for LoggerMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
   type Response = ServiceResponse<B>;
   type Error = Error;
   type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

   forward_ready!(service);

   fn call(&self, req: ServiceRequest) -> Self::Future {
      let started = Instant::now();
      let line = format!("{} {}", req.method(), req.uri());
      info!("request: {}", line);
      let fut = self.service.call(req);

      Box::pin(async move {
         let res = fut.await?;
         info!("response: {} -> {} in {:?}", line, res.status(), started.elapsed());
         Ok(res)
      })
   }
}

fn colored_level(level: Level) -> colored::ColoredString {
   let label = level.as_str();
   match level {
      Level::Error => label.red().bold(),
      Level::Warn => label.yellow().bold(),
      Level::Info => label.green().bold(),
      Level::Debug => label.blue().bold(),
      Level::Trace => label.magenta().bold(),
   }
}

/// `RUST_LOG` drives the filter; defaults to `info` when unset.
pub fn init_logger() {
   Builder::from_env(env_logger::Env::default().default_filter_or("info"))
   .format(|buf, record| {
      writeln!(
         buf,
         "{} {} [{}] {}",
         chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
         colored_level(record.level()),
         record.target(),
         record.args()
      )
   })
   .init()
}

#[cfg(test)]
mod tests {
   use super::*;
   use actix_web::{http::StatusCode, test, web, App, HttpResponse};

   #[actix_rt::test]
   async fn responses_pass_through_unchanged() {
      let app = test::init_service(
         App::new()
            .wrap(LoggerMiddleware)
            .route("/ping", web::get().to(|| async { HttpResponse::Ok().body("pong") }))
            .route("/teapot", web::get().to(|| async { HttpResponse::ImATeapot().finish() })),
      )
      .await;

      let resp = test::call_service(&app, test::TestRequest::get().uri("/ping").to_request()).await;
      assert_eq!(resp.status(), StatusCode::OK);
      assert_eq!(test::read_body(resp).await, "pong");

      let resp = test::call_service(&app, test::TestRequest::get().uri("/teapot").to_request()).await;
      assert_eq!(resp.status(), StatusCode::IM_A_TEAPOT);

      let resp = test::call_service(&app, test::TestRequest::get().uri("/missing").to_request()).await;
      assert_eq!(resp.status(), StatusCode::NOT_FOUND);
   }

   #[::core::prelude::v1::test]
   fn level_labels_survive_coloring() {
      for level in [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace] {
         assert!(colored_level(level).to_string().contains(level.as_str()));
      }
   }
}
