//! Development server with live reload and form endpoints

use anyhow::Result;
use axum::{
    async_trait,
    extract::{
        ws::{Message, WebSocket},
        FromRequest, Request, State, WebSocketUpgrade,
    },
    http::{header::CONTENT_TYPE, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use serde::de::DeserializeOwned;
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::submit::{
    self, CommentDraft, ContactMessage, FormController, NewsletterSignup, Submission, Submitter,
};
use crate::TechBlog;

/// Live reload script injected into HTML pages
const LIVE_RELOAD_SCRIPT: &str = r#"
<script>
(function() {
    var ws = new WebSocket('ws://' + location.host + '/__livereload');
    ws.onmessage = function(msg) {
        if (msg.data === 'reload') {
            location.reload();
        }
    };
    ws.onclose = function() {
        console.log('Live reload disconnected. Attempting to reconnect...');
        setTimeout(function() { location.reload(); }, 1000);
    };
})();
</script>
</body>
"#;

/// Server state
pub struct ServerState {
    public_dir: PathBuf,
    reload_tx: broadcast::Sender<()>,
    live_reload: bool,
    contact: FormController,
    newsletter: FormController,
    comments: FormController,
}

impl ServerState {
    /// State for serving `public_dir`, with every form delivered through
    /// `submitter`
    pub fn new(public_dir: PathBuf, submitter: Arc<dyn Submitter>, live_reload: bool) -> Self {
        let (reload_tx, _) = broadcast::channel::<()>(16);
        Self {
            public_dir,
            reload_tx,
            live_reload,
            contact: FormController::new(submitter.clone()),
            newsletter: FormController::new(submitter.clone()),
            comments: FormController::new(submitter),
        }
    }
}

/// Build the application router
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/__livereload", get(livereload_handler))
        .route("/api/contact", post(contact_handler))
        .route("/api/newsletter", post(newsletter_handler))
        .route("/api/comments", post(comment_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the development server
pub async fn start(site: &TechBlog, ip: &str, port: u16, watch: bool, open: bool) -> Result<()> {
    let submitter = submit::from_config(&site.config.contact, &site.base_dir);
    tracing::info!("Form submissions use the {} transport", submitter.name());

    let state = Arc::new(ServerState::new(site.public_dir.clone(), submitter, watch));
    let reload_tx = state.reload_tx.clone();
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    if watch {
        println!("Live reload enabled. Watching for changes...");
    }
    println!("Press Ctrl+C to stop.");

    // Open browser if requested
    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    // Start file watcher if watch mode is enabled
    if watch {
        let site = site.clone();
        tokio::spawn(async move {
            if let Err(e) = watch_and_reload(site, reload_tx).await {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Watch for file changes and trigger reload
async fn watch_and_reload(site: TechBlog, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();

    // Create debouncer to avoid multiple rapid rebuilds
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    if site.source_dir.exists() {
        debouncer
            .watcher()
            .watch(&site.source_dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", site.source_dir);
    }

    let config_path = site.base_dir.join("_config.yml");
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    // The std receiver blocks, keep it off the async workers
    tokio::task::spawn_blocking(move || {
        for result in rx {
            match result {
                Ok(events) => {
                    let relevant = events.iter().any(|e| is_relevant_change(&e.path));
                    if !relevant {
                        continue;
                    }

                    tracing::info!("Change detected, regenerating...");
                    match site.generate() {
                        Ok(_) => {
                            // Notify all connected clients to reload
                            let _ = reload_tx.send(());
                        }
                        Err(e) => tracing::error!("Generation failed: {:#}", e),
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            }
        }
        drop(debouncer);
    })
    .await?;

    Ok(())
}

/// Editor droppings and VCS metadata never trigger a rebuild
pub(crate) fn is_relevant_change(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    !path_str.contains(".git")
        && !path_str.contains(".DS_Store")
        && !path_str.ends_with('~')
        && !path_str.ends_with(".swp")
}

/// WebSocket handler for live reload
async fn livereload_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    let reload_rx = state.reload_tx.subscribe();
    ws.on_upgrade(move |socket| handle_livereload_socket(socket, reload_rx))
}

/// Handle WebSocket connection for live reload
async fn handle_livereload_socket(mut socket: WebSocket, mut reload_rx: broadcast::Receiver<()>) {
    tracing::debug!("Live reload client connected");

    loop {
        tokio::select! {
            result = reload_rx.recv() => {
                match result {
                    Ok(_) => {
                        if socket.send(Message::Text("reload".to_string())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                }
            }
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
        }
    }

    tracing::debug!("Live reload client disconnected");
}

/// Request body accepted as JSON or as an urlencoded HTML form
struct FormBody<T>(T);

#[async_trait]
impl<S, T> FromRequest<S> for FormBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        if is_json {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(FormBody(value)),
                Err(rejection) => Err(bad_request(&rejection.body_text())),
            }
        } else {
            match Form::<T>::from_request(req, state).await {
                Ok(Form(value)) => Ok(FormBody(value)),
                Err(rejection) => Err(bad_request(&rejection.body_text())),
            }
        }
    }
}

fn bad_request(reason: &str) -> Response {
    tracing::debug!("Rejected form body: {}", reason);
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "ok": false, "error": reason })),
    )
        .into_response()
}

async fn contact_handler(
    State(state): State<Arc<ServerState>>,
    FormBody(message): FormBody<ContactMessage>,
) -> Response {
    submit_form(&state.contact, Submission::Contact(message)).await
}

async fn newsletter_handler(
    State(state): State<Arc<ServerState>>,
    FormBody(signup): FormBody<NewsletterSignup>,
) -> Response {
    submit_form(&state.newsletter, Submission::Newsletter(signup)).await
}

async fn comment_handler(
    State(state): State<Arc<ServerState>>,
    FormBody(draft): FormBody<CommentDraft>,
) -> Response {
    submit_form(&state.comments, Submission::Comment(draft)).await
}

async fn submit_form(controller: &FormController, submission: Submission) -> Response {
    match controller.submit(submission).await {
        Ok(notification) => (StatusCode::OK, Json(notification)).into_response(),
        Err(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "ok": false, "errors": errors })),
        )
            .into_response(),
    }
}

/// Fallback handler that serves files and injects live reload script
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request,
) -> Response {
    let path = request.uri().path();
    if !stays_inside(path) {
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    }

    // Determine the file path
    let file_path = if path == "/" {
        state.public_dir.join("index.html")
    } else {
        let clean_path = path.trim_start_matches('/');
        let candidate = state.public_dir.join(clean_path);

        // If it's a directory, look for index.html
        if candidate.is_dir() {
            candidate.join("index.html")
        } else if candidate.exists() {
            candidate
        } else {
            // Try adding .html extension
            let with_html = state.public_dir.join(format!("{}.html", clean_path));
            if with_html.exists() {
                with_html
            } else {
                candidate
            }
        }
    };

    let is_html = file_path
        .extension()
        .map(|ext| ext == "html" || ext == "htm")
        .unwrap_or(false);

    if is_html && state.live_reload {
        match tokio::fs::read_to_string(&file_path).await {
            Ok(content) => Html(inject_live_reload(&content)).into_response(),
            Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
        }
    } else {
        // Serve static file using tower-http
        let mut service = ServeDir::new(&state.public_dir).append_index_html_on_directories(true);
        match service.try_call(request).await {
            Ok(response) => response.into_response(),
            Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
        }
    }
}

/// Whether a request path only names entries below the public dir
fn stays_inside(path: &str) -> bool {
    Path::new(path.trim_start_matches('/'))
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Inject live reload script into HTML content
fn inject_live_reload(html: &str) -> String {
    if html.contains("</body>") {
        html.replace("</body>", LIVE_RELOAD_SCRIPT)
    } else {
        format!("{}{}", html, LIVE_RELOAD_SCRIPT)
    }
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
