use std::{env, sync::Arc};

use edge_redirect::{router, RedirectRule};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::fmt()
        .with_file(true)
        .init();

    let rule = Arc::new(RedirectRule::from_env().unwrap());

    tracing::info!(
        "Redirecting every request to {} ({})",
        rule.destination(),
        if rule.is_static() { "static" } else { "path preserving" }
    );

    let app = router(rule).layer(TraceLayer::new_for_http());

    let addr = format!("[::]:{}", env::var("PORT").unwrap_or("3000".to_owned()))
        .parse()
        .unwrap();

    tracing::info!("Listening on: {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
