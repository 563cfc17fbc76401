use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    pub title: String,
    pub body: String,
    pub user_id: i64,
}

/// In-memory store. Posts keep insertion order; ids are sequential
/// starting at 1 and are never reused.
pub struct Store {
    posts: Vec<Post>,
    next_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            next_id: 1,
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let store = db.read().await;
    Json(store.posts.clone())
}

async fn create_post(State(db): State<Db>, Json(input): Json<CreatePost>) -> (StatusCode, Json<Post>) {
    let mut store = db.write().await;
    let post = Post {
        user_id: input.user_id,
        id: store.next_id,
        title: input.title,
        body: input.body,
    };
    store.next_id += 1;
    store.posts.push(post.clone());
    (StatusCode::CREATED, Json(post))
}
