use tessera_derive::api_model;

#[api_model]
struct StatusResponse {
    status: &'static str,
    uptime_secs: u64,
}

fn main() {
    let body = StatusResponse { status: "up", uptime_secs: 3 };
    let json = serde_json::to_string(&body).unwrap();
    assert_eq!(json, r#"{"status":"up","uptimeSecs":3}"#);
}
