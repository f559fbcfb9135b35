pub const HOME_MESSAGE: &str = "QA Bot server is running!";

pub async fn home() -> &'static str {
    HOME_MESSAGE
}

pub async fn ping() -> &'static str {
    "pong"
}
