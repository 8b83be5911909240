// tests/common.rs

use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn reposim_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("reposim"));
    // Keep a developer's real token out of the tests.
    cmd.env_remove("GITHUB_TOKEN");
    cmd
}

/// A canned GitHub REST API on an ephemeral local port.
///
/// Fixtures:
/// - `alice/left`: Rust, default branch `main`, three code files plus noise.
/// - `bob/right`: no description or language; only a `master` branch.
/// - `carol/limited`: every request answers 403.
/// - `dave/flaky`: `src/broken.rs` answers 500, `src/ok.rs` is fine.
/// - `gina/odd`: file names containing `#`, `?` and a space.
/// - `/search/repositories`: `alice/left` and two others, most stars first.
#[cfg(feature = "web")]
#[allow(dead_code)]
pub mod fake_github {
    use axum::{
        extract::{Path, Query},
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::get,
        Json, Router,
    };
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use tokio::net::TcpListener;

    pub const LEFT_LIB: &str = concat!(
        "pub fn pad(s: &str, n: usize) -> String {\n",
        "    // left pad\n",
        "    format!(\"{:>n$}\", s, n = n)\n",
        "}\n",
    );
    pub const RIGHT_LIB: &str = concat!(
        "pub fn pad(s: &str, n: usize) -> String {\n",
        "    format!(\"{:>n$}\", s, n = n)\n",
        "}\n",
    );

    fn repo_json(
        full_name: &str,
        description: Value,
        language: Value,
        stars: u64,
        branch: &str,
    ) -> Value {
        let name = full_name.rsplit('/').next().unwrap();
        json!({
            "id": 1,
            "name": name,
            "full_name": full_name,
            "description": description,
            "language": language,
            "stargazers_count": stars,
            "default_branch": branch,
            "html_url": format!("https://github.com/{}", full_name),
        })
    }

    fn blob(path: &str, size: u64) -> Value {
        json!({"path": path, "mode": "100644", "type": "blob", "sha": "0", "size": size})
    }

    fn tree(path: &str) -> Value {
        json!({"path": path, "mode": "040000", "type": "tree", "sha": "0"})
    }

    fn not_found() -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Not Found"})),
        )
            .into_response()
    }

    fn rate_limited() -> Response {
        (
            StatusCode::FORBIDDEN,
            Json(json!({"message": "API rate limit exceeded"})),
        )
            .into_response()
    }

    async fn repository(Path((owner, repo)): Path<(String, String)>) -> Response {
        match format!("{}/{}", owner, repo).as_str() {
            "alice/left" => Json(repo_json(
                "alice/left",
                json!("A tiny string padding library for terminals"),
                json!("Rust"),
                120,
                "main",
            ))
            .into_response(),
            "bob/right" => {
                Json(repo_json("bob/right", Value::Null, Value::Null, 7, "master")).into_response()
            }
            "carol/limited" => rate_limited(),
            "dave/flaky" => {
                Json(repo_json("dave/flaky", json!("Flaky"), json!("Rust"), 1, "main"))
                    .into_response()
            }
            "gina/odd" => {
                Json(repo_json("gina/odd", json!("Odd names"), json!("Rust"), 2, "main"))
                    .into_response()
            }
            _ => not_found(),
        }
    }

    async fn git_tree(Path((owner, repo, branch)): Path<(String, String, String)>) -> Response {
        let entries = match (format!("{}/{}", owner, repo).as_str(), branch.as_str()) {
            ("alice/left", "main") => vec![
                tree("src"),
                blob("src/lib.rs", LEFT_LIB.len() as u64),
                blob("src/main.rs", 12),
                blob("web/app.ts", 10),
                blob("README.md", 5),
                blob("node_modules/dep/index.js", 3),
            ],
            ("bob/right", "master") => vec![
                blob("lib.rs", RIGHT_LIB.len() as u64),
                blob("other.rs", 10),
                blob("dist/bundle.js", 3),
            ],
            ("carol/limited", _) => return rate_limited(),
            ("dave/flaky", "main") => vec![blob("src/broken.rs", 1), blob("src/ok.rs", 1)],
            ("gina/odd", "main") => vec![
                blob("src/issue#12.rs", 1),
                blob("src/what?.rs", 1),
                blob("src/two words.rs", 1),
            ],
            _ => return not_found(),
        };
        Json(json!({"sha": "0", "tree": entries, "truncated": false})).into_response()
    }

    fn file_text(full_name: &str, path: &str) -> Option<&'static str> {
        match (full_name, path) {
            ("alice/left", "src/lib.rs") => Some(LEFT_LIB),
            ("alice/left", "src/main.rs") => Some("fn main() {}"),
            ("alice/left", "web/app.ts") => Some("export {};"),
            ("bob/right", "lib.rs") => Some(RIGHT_LIB),
            ("bob/right", "other.rs") => Some("fn other() {}"),
            ("dave/flaky", "src/ok.rs") => Some("fn ok() {}"),
            ("gina/odd", "src/issue#12.rs") => Some("fn hash() {}"),
            ("gina/odd", "src/what?.rs") => Some("fn question() {}"),
            ("gina/odd", "src/two words.rs") => Some("fn space() {}"),
            _ => None,
        }
    }

    async fn contents(Path((owner, repo, path)): Path<(String, String, String)>) -> Response {
        let full_name = format!("{}/{}", owner, repo);
        if full_name == "carol/limited" {
            return rate_limited();
        }
        if full_name == "dave/flaky" && path == "src/broken.rs" {
            return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
        }
        match file_text(&full_name, &path) {
            Some(text) => {
                // GitHub wraps base64 at 60 columns.
                let encoded = STANDARD
                    .encode(text)
                    .as_bytes()
                    .chunks(60)
                    .map(|c| String::from_utf8_lossy(c).into_owned())
                    .collect::<Vec<_>>()
                    .join("\n");
                Json(json!({
                    "type": "file",
                    "path": path,
                    "size": text.len(),
                    "encoding": "base64",
                    "content": encoded,
                }))
                .into_response()
            }
            None => not_found(),
        }
    }

    async fn search(Query(params): Query<HashMap<String, String>>) -> Response {
        let per_page: usize = params
            .get("per_page")
            .and_then(|p| p.parse().ok())
            .unwrap_or(30);
        let items = vec![
            json!({
                "name": "padkit", "full_name": "erin/padkit", "description": "Padding toolkit",
                "language": "Rust", "stargazers_count": 900,
                "html_url": "https://github.com/erin/padkit", "topics": ["strings", "cli"]
            }),
            json!({
                "name": "left", "full_name": "alice/left", "description": null,
                "language": "Rust", "stargazers_count": 120,
                "html_url": "https://github.com/alice/left", "topics": []
            }),
            json!({
                "name": "spacer", "full_name": "frank/spacer", "description": null,
                "language": null, "stargazers_count": 11,
                "html_url": "https://github.com/frank/spacer"
            }),
        ];
        let items: Vec<Value> = items.into_iter().take(per_page).collect();
        Json(json!({"total_count": items.len(), "incomplete_results": false, "items": items}))
            .into_response()
    }

    fn router() -> Router {
        Router::new()
            .route("/repos/:owner/:repo", get(repository))
            .route("/repos/:owner/:repo/git/trees/:branch", get(git_tree))
            .route("/repos/:owner/:repo/contents/*path", get(contents))
            .route("/search/repositories", get(search))
    }

    /// Starts the fake API on a background thread and returns its base URL.
    ///
    /// The server runs on its own runtime so blocking clients can call it
    /// from plain `#[test]` functions.
    pub fn spawn() -> String {
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async move {
                let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
                tx.send(listener.local_addr().unwrap().port()).unwrap();
                axum::serve(listener, router()).await.unwrap();
            });
        });
        let port = rx.recv().unwrap();
        format!("http://127.0.0.1:{}", port)
    }
}
