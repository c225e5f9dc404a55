use meal_planner::api_connection::{ApiConnectionError, GenerateContentRequest, Provider};
use meal_planner::config::{GeminiConfig, API_KEY_ENV_VAR};
use meal_planner::plan_fetcher::{fetch_remote_plan, PlanFetchError};
use meal_planner::plan_request::{DietType, HealthGoal, PlanDuration, PlanRequest};
use meal_planner::planner::{generate_meal_plan, PlanSource};
use serde_json::json;
use std::env;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

const PLAN_TEXT: &str = r#"```json
{
  "days": [
    {
      "day": 1,
      "meals": {
        "breakfast": {"dish": "Masala Oats", "description": "Savory oats", "nutrition": {"calories": 310, "carbs": 44, "protein": 11, "fat": 9}, "cost": 30, "ingredients": ["Oats", "Onions"]},
        "lunch": {"dish": "Rajma Chawal", "description": "Kidney beans with rice", "nutrition": {"calories": 480, "carbs": 70, "protein": 19, "fat": 10}, "cost": 45, "ingredients": ["Rajma", "Rice"]},
        "dinner": {"dish": "Palak Paneer with Roti", "description": "Spinach and paneer", "nutrition": {"calories": 450, "carbs": 40, "protein": 22, "fat": 18}, "cost": 60},
        "snack": {"dish": "Roasted Makhana", "description": "Fox nuts", "nutrition": {"calories": 120, "carbs": 18, "protein": 4, "fat": 3}, "cost": 15}
      }
    }
  ],
  "totalCost": 2000,
  "groceryList": [{"item": "Rice", "quantity": "2kg", "price": 120}]
}
```"#;

fn sample_request() -> PlanRequest {
    PlanRequest {
        family_members: 4,
        location: "Pune, India".to_string(),
        budget: 2000,
        diet_type: DietType::Vegetarian,
        allergies: vec![],
        diseases: vec!["Diabetes".to_string()],
        health_goal: HealthGoal::WeightLoss,
        plan_duration: PlanDuration::OneWeek,
    }
}

fn provider_for(endpoint: String) -> Provider {
    Provider::gemini(GeminiConfig {
        api_key: Some("test-key".to_string()),
        endpoint,
        timeout: None,
    })
}

fn gemini_reply(text: &str) -> String {
    json!({
        "candidates": [{"content": {"parts": [{"text": text}], "role": "model"}, "finishReason": "STOP"}]
    })
    .to_string()
}

fn content_length(headers: &str) -> usize {
    headers
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Serves exactly one HTTP response on a loopback port and hands back the raw request.
async fn serve_once(status_line: &'static str, body: String) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        let mut buf = [0u8; 8192];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            received.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&received);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let needed = header_end + 4 + content_length(&text[..header_end]);
                if received.len() >= needed {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(String::from_utf8_lossy(&received).into_owned());
    });

    (format!("http://{}/v1/models/gemini-pro:generateContent", addr), rx)
}

/// An endpoint on a port nobody listens on.
async fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/generate", addr)
}

#[tokio::test]
async fn test_missing_api_key_error() {
    let provider = Provider::gemini(GeminiConfig::default());
    let result = provider
        .call_generate_content(&GenerateContentRequest::from_prompt("Hello"))
        .await;
    assert!(matches!(result, Err(ApiConnectionError::MissingApiKey(_))));
    if let Err(ApiConnectionError::MissingApiKey(key_name)) = result {
        assert_eq!(key_name, API_KEY_ENV_VAR);
    }
}

#[tokio::test]
async fn test_fetches_and_parses_fenced_plan() {
    let (endpoint, captured) = serve_once("200 OK", gemini_reply(PLAN_TEXT)).await;
    let plan = fetch_remote_plan(&provider_for(endpoint), &sample_request())
        .await
        .expect("plan should parse");

    assert_eq!(plan.day_count(), 1);
    assert_eq!(plan.days[0].meals.dinner.dish, "Palak Paneer with Roti");
    assert_eq!(plan.total_cost, 2000.0);

    let raw_request = captured.await.unwrap();
    let request_line = raw_request.lines().next().unwrap();
    assert!(request_line.starts_with("POST /v1/models/gemini-pro:generateContent?key=test-key"));

    let body_start = raw_request.find("\r\n\r\n").unwrap() + 4;
    let body: serde_json::Value = serde_json::from_str(&raw_request[body_start..]).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("- Location: Pune, India"));
    assert!(prompt.contains("- Health Conditions: Diabetes"));
}

#[tokio::test]
async fn test_non_success_status_is_api_error() {
    let (endpoint, _captured) = serve_once(
        "503 Service Unavailable",
        json!({"error": {"code": 503, "message": "overloaded"}}).to_string(),
    )
    .await;
    let result = fetch_remote_plan(&provider_for(endpoint), &sample_request()).await;
    match result {
        Err(PlanFetchError::Connection(ApiConnectionError::ApiError { status, error_body })) => {
            assert_eq!(status, reqwest::StatusCode::SERVICE_UNAVAILABLE);
            assert!(error_body.contains("overloaded"));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_reply_without_candidates() {
    let (endpoint, _captured) = serve_once("200 OK", json!({"candidates": []}).to_string()).await;
    let result = fetch_remote_plan(&provider_for(endpoint), &sample_request()).await;
    assert!(matches!(result, Err(PlanFetchError::NoCandidate)));
}

#[tokio::test]
async fn test_generate_uses_remote_plan_when_valid() {
    let (endpoint, _captured) = serve_once("200 OK", gemini_reply(PLAN_TEXT)).await;
    let generated = generate_meal_plan(&provider_for(endpoint), &sample_request()).await;
    assert_eq!(generated.source, PlanSource::Remote);
    assert_eq!(generated.plan.days[0].meals.breakfast.dish, "Masala Oats");
}

#[tokio::test]
async fn test_generate_falls_back_on_malformed_reply() {
    let (endpoint, _captured) =
        serve_once("200 OK", gemini_reply("Sorry, I can only answer in prose today.")).await;
    let generated = generate_meal_plan(&provider_for(endpoint), &sample_request()).await;
    assert_eq!(generated.source, PlanSource::Fallback);
    assert_eq!(generated.plan.day_count(), 7);
    assert_eq!(generated.plan.days[0].meals.breakfast.dish, "Vegetable Poha");
}

#[tokio::test]
async fn test_generate_falls_back_on_http_error() {
    let (endpoint, _captured) = serve_once("500 Internal Server Error", "{}".to_string()).await;
    let generated = generate_meal_plan(&provider_for(endpoint), &sample_request()).await;
    assert_eq!(generated.source, PlanSource::Fallback);
}

#[tokio::test]
async fn test_generate_falls_back_when_unreachable() {
    let provider = provider_for(closed_endpoint().await);
    let generated = generate_meal_plan(&provider, &sample_request()).await;
    assert_eq!(generated.source, PlanSource::Fallback);
    assert_eq!(generated.plan.total_cost, 2000.0);
}

#[tokio::test]
async fn test_generate_falls_back_without_api_key() {
    let generated = generate_meal_plan(&Provider::gemini(GeminiConfig::default()), &sample_request()).await;
    assert_eq!(generated.source, PlanSource::Fallback);
}

#[tokio::test]
#[ignore]
async fn test_live_gemini_plan() {
    dotenv::dotenv().ok();
    if env::var(API_KEY_ENV_VAR).is_err() {
        println!("Skipping test_live_gemini_plan: {} not set.", API_KEY_ENV_VAR);
        return;
    }

    let provider = Provider::gemini(GeminiConfig::from_env());
    let result = fetch_remote_plan(&provider, &sample_request()).await;
    assert!(result.is_ok(), "API call failed: {:?}", result.err());
    let plan = result.unwrap();
    assert!(plan.day_count() > 0);
}
