use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let status = match std::env::var("MOCK_STATUS") {
        Ok(raw) => mock_server::parse_status(&raw)?,
        Err(_) => mock_server::StatusCode::OK,
    };
    let mut state = mock_server::MockState::new(status);
    if let Ok(location) = std::env::var("MOCK_LOCATION") {
        state = state.with_location(&location);
    }
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("listening on {addr}, answering {}", status.as_u16());
    mock_server::run(listener, state).await
}
