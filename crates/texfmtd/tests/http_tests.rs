use serde_json::{Value, json};
use texfmtd::{FormatResponse, HealthResponse};
use tokio::net::TcpListener;

async fn spawn_server() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(texfmtd::serve(listener));
    Ok(format!("http://{}", addr))
}

#[tokio::test]
async fn test_format_endpoint() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/format"))
        .json(&json!({
            "latex_code": "\\section{A}\nSection content\n\\subsection{B}\nSubsection content\n\\section{C}\nMore"
        }))
        .send()
        .await?;
    assert_eq!(response.status(), 200);

    let body: FormatResponse = response.json().await?;
    assert_eq!(
        body.formatted_code,
        "\\section{A}\n    Section content\n    \\subsection{B}\n        Subsection content\n\\section{C}\n    More"
    );
    Ok(())
}

#[tokio::test]
async fn test_format_endpoint_custom_indent() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let client = reqwest::Client::new();

    let body: FormatResponse = client
        .post(format!("{base}/format"))
        .json(&json!({
            "latex_code": "\\begin{document}\n\\section{Section}\nContent\n\\end{document}",
            "indent_str": "\t"
        }))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(
        body.formatted_code,
        "\\begin{document}\n\t\\section{Section}\n\t\tContent\n\\end{document}"
    );
    Ok(())
}

#[tokio::test]
async fn test_format_endpoint_missing_code() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/format"))
        .json(&json!({ "indent_str": "  " }))
        .send()
        .await?;
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await?;
    assert_eq!(body, json!({ "error": "No LaTeX code provided" }));
    Ok(())
}

#[tokio::test]
async fn test_format_endpoint_wrong_type() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/format"))
        .json(&json!({ "latex_code": ["not", "a", "string"] }))
        .send()
        .await?;
    assert_eq!(response.status(), 500);

    let body: Value = response.json().await?;
    let message = body["error"].as_str().unwrap_or_default();
    assert!(message.starts_with("Error formatting code: "), "{message}");
    Ok(())
}

#[tokio::test]
async fn test_health() -> anyhow::Result<()> {
    let base = spawn_server().await?;

    let body: HealthResponse = reqwest::get(format!("{base}/health")).await?.json().await?;
    assert_eq!(body.status, "ok");
    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    Ok(())
}

#[tokio::test]
async fn test_format_endpoint_large_document() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let client = reqwest::Client::new();

    let latex_code = "\\section{A}\nline of body text here\n".repeat(80_000);
    assert!(latex_code.len() > 2 * 1024 * 1024);

    let response = client
        .post(format!("{base}/format"))
        .json(&json!({ "latex_code": latex_code }))
        .send()
        .await?;
    assert_eq!(response.status(), 200);

    let body: FormatResponse = response.json().await?;
    assert_eq!(
        body.formatted_code.split('\n').count(),
        latex_code.split('\n').count()
    );
    assert!(body.formatted_code.starts_with("\\section{A}\n    line of body text here\n"));
    Ok(())
}

#[tokio::test]
async fn test_index_page() -> anyhow::Result<()> {
    let base = spawn_server().await?;

    let response = reqwest::get(format!("{base}/")).await?;
    assert_eq!(response.status(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "{content_type}");

    let page = response.text().await?;
    assert!(page.contains("<textarea id=\"input\""));
    assert!(page.contains("id=\"indent\""));
    assert!(page.contains("fetch(\"/format\""));
    Ok(())
}

#[test]
fn test_default_address() {
    assert_eq!(texfmtd::DEFAULT_ADDR, "0.0.0.0:8080");
}
