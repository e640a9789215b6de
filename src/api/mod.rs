mod inputs;

use axum::{
    Router,
    extract::{Json, Query},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::core::{build_scenarios, compare_robo_advisor, compare_strategies};
use crate::error::{AppError, InputError};

pub use inputs::{
    AmortizationArgs, AmortizationPayload, AmortizationRequest, CliFrequency, MortgageArgs,
    MortgagePayload, PayoffArgs, PayoffPayload, RoboArgs, RoboPayload,
    amortization_request_from_payload, build_amortization_request, build_mortgage_inputs,
    build_payoff_inputs, build_robo_inputs, mortgage_inputs_from_payload,
    payoff_inputs_from_payload, robo_inputs_from_payload,
};

#[derive(Parser, Debug)]
#[command(
    name = "smart_savings",
    about = "Personal finance calculators: mortgage payoff strategies, robo-advisor fees, pay off vs invest"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the calculators over HTTP.
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Run a single loan amortization.
    Amortize(AmortizationArgs),
    /// Compare extra-principal, extra-escrow and bi-weekly payoff scenarios.
    Mortgage(MortgageArgs),
    /// Weigh robo-advisor fees against time savings and tax-loss harvesting.
    Robo(RoboArgs),
    /// Compare paying the mortgage down early against investing the difference.
    PayoffVsInvest(PayoffArgs),
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

pub async fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Serve { port } => run_http_server(port).await?,
        Command::Amortize(args) => print_json(&build_amortization_request(args)?.simulate())?,
        Command::Mortgage(args) => print_json(&build_scenarios(&build_mortgage_inputs(args)?))?,
        Command::Robo(args) => print_json(&compare_robo_advisor(&build_robo_inputs(args)?))?,
        Command::PayoffVsInvest(args) => {
            print_json(&compare_strategies(&build_payoff_inputs(args)?))?
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(AppError::Encode)?;
    println!("{json}");
    Ok(())
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/amortization",
            get(amortization_get_handler).post(amortization_post_handler),
        )
        .route(
            "/api/mortgage",
            get(mortgage_get_handler).post(mortgage_post_handler),
        )
        .route(
            "/api/robo-advisor",
            get(robo_get_handler).post(robo_post_handler),
        )
        .route(
            "/api/payoff-vs-invest",
            get(payoff_get_handler).post(payoff_post_handler),
        )
        .fallback(not_found_handler)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "smart savings API listening");
    info!("local access: http://127.0.0.1:{port}/health");

    axum::serve(listener, router()).await
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn amortization_get_handler(Query(payload): Query<AmortizationPayload>) -> Response {
    calculate("amortization", payload, amortization_request_from_payload, |request| {
        request.simulate()
    })
}

async fn amortization_post_handler(Json(payload): Json<AmortizationPayload>) -> Response {
    calculate("amortization", payload, amortization_request_from_payload, |request| {
        request.simulate()
    })
}

async fn mortgage_get_handler(Query(payload): Query<MortgagePayload>) -> Response {
    calculate("mortgage", payload, mortgage_inputs_from_payload, build_scenarios)
}

async fn mortgage_post_handler(Json(payload): Json<MortgagePayload>) -> Response {
    calculate("mortgage", payload, mortgage_inputs_from_payload, build_scenarios)
}

async fn robo_get_handler(Query(payload): Query<RoboPayload>) -> Response {
    calculate("robo-advisor", payload, robo_inputs_from_payload, compare_robo_advisor)
}

async fn robo_post_handler(Json(payload): Json<RoboPayload>) -> Response {
    calculate("robo-advisor", payload, robo_inputs_from_payload, compare_robo_advisor)
}

async fn payoff_get_handler(Query(payload): Query<PayoffPayload>) -> Response {
    calculate("payoff-vs-invest", payload, payoff_inputs_from_payload, compare_strategies)
}

async fn payoff_post_handler(Json(payload): Json<PayoffPayload>) -> Response {
    calculate("payoff-vs-invest", payload, payoff_inputs_from_payload, compare_strategies)
}

/// Resolves a payload against the defaults and runs one calculator over it.
fn calculate<P, I, R>(
    calculator: &'static str,
    payload: P,
    resolve: impl FnOnce(P) -> Result<I, InputError>,
    compute: impl FnOnce(&I) -> R,
) -> Response
where
    P: std::fmt::Debug,
    R: Serialize,
{
    debug!(calculator, ?payload, "calculation requested");
    match resolve(payload) {
        Ok(inputs) => json_response(StatusCode::OK, compute(&inputs)),
        Err(err) => {
            warn!(calculator, %err, "rejected calculator input");
            error_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
