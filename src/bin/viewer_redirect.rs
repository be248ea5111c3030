use edge_redirect::{
    edge::{self, RedirectResponse, ViewerEvent},
    RedirectRule,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .without_time()
        .init();

    // Resolved once at cold start, fixed for the lifetime of the function.
    let rule = RedirectRule::from_env()?;

    tracing::info!(
        "Redirecting viewer requests to {} ({})",
        rule.destination(),
        if rule.is_static() { "static" } else { "path preserving" }
    );

    run(service_fn(|event| redirect_handler(&rule, event))).await
}

async fn redirect_handler(
    rule: &RedirectRule,
    event: LambdaEvent<ViewerEvent>,
) -> Result<RedirectResponse, Error> {
    Ok(edge::handle(rule, event.payload))
}
