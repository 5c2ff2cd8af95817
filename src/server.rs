use std::sync::Arc;

use ntex::web;
use spdlog::{error, info};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::content::PostKey;
use crate::feed::PostFeed;
use crate::source::{ContentSource, HttpContentSource, SourceError};
use crate::templates;
use crate::view::list_renderer::ListRenderer;
use crate::view::post_renderer::{DetailView, PostRenderer};

struct AppState {
    feed: Mutex<PostFeed>,
    source: HttpContentSource,
}

fn redirect_to_list() -> web::HttpResponse {
    web::HttpResponse::SeeOther()
        .header("Location", "/")
        .content_type("text/html; charset=utf-8")
        .finish()
}

// Begin: Redirect region --------
#[web::get("/post/{post}")]
async fn view_wo_slash(path: web::types::Path<String>) -> web::HttpResponse {
    web::HttpResponse::TemporaryRedirect()
        .header("Location", path.into_inner() + "/")
        .content_type("text/html; charset=utf-8")
        .finish()
}
// End: Redirect region --------

#[web::get("/")]
async fn list(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let (posts, show_load_more) = {
        let feed = state.feed.lock().await;
        (feed.items().to_vec(), feed.has_more())
    };

    let renderer = match ListRenderer::new(templates::LIST) {
        Ok(renderer) => renderer,
        Err(e) => {
            return web::HttpResponse::InternalServerError()
                .body(format!("Error listing posts: {}", e));
        }
    };

    web::HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(renderer.render(&posts, show_load_more))
}

#[web::get("/load-more")]
async fn load_more(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    // The lock is held across the fetch, so concurrent load-mores queue up
    // and pages append in issue order. Without a cursor this is a no-op.
    let mut feed = state.feed.lock().await;

    match feed.load_more(&state.source).await {
        Ok(added) => {
            info!("Appended {} posts to the feed", added);
            redirect_to_list()
        }
        Err(e) => {
            // Feed state is untouched, so the affordance stays and a
            // fresh request retries from the same cursor.
            error!("Error loading more posts: {}", e);
            web::HttpResponse::BadGateway()
                .body(format!("Error loading more posts: {}", e))
        }
    }
}

#[web::get("/post/{post}/")]
async fn view(path: web::types::Path<String>, state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let key = PostKey(path.into_inner());
    fetch_and_render_post(&state.source, &key).await
}

async fn fetch_and_render_post<S: ContentSource>(source: &S, key: &PostKey) -> web::HttpResponse {
    let document = match source.fetch_post_by_key(key).await {
        Ok(document) => document,
        Err(SourceError::NotFound) => {
            return web::HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(templates::NOT_FOUND);
        }
        Err(e) => {
            error!("Error loading post {}: {}", key.0, e);
            return web::HttpResponse::BadGateway()
                .body(format!("Error loading post {}: {}", key.0, e));
        }
    };

    let renderer = match PostRenderer::new(templates::POST) {
        Ok(renderer) => renderer,
        Err(e) => {
            return web::HttpResponse::InternalServerError()
                .body(format!("Error loading post {}: {}", key.0, e));
        }
    };

    web::HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(renderer.render(&DetailView::Ready(document)))
}

pub async fn server_run(config: Config) -> anyhow::Result<()> {
    let source = HttpContentSource::new(&config.content_api)?;

    // Seed the feed with the first page before accepting requests
    let first_page = source.query_posts_page(config.content_api.page_size).await?;
    info!("Fetched initial page with {} posts", first_page.items.len());

    let bind_addr = config.server.address.clone();
    let bind_port = config.server.port;
    let app_state = Arc::new(AppState {
        feed: Mutex::new(PostFeed::new(first_page)),
        source,
    });

    web::HttpServer::new(move || {
        web::App::new()
            .state(app_state.clone())
            .service(list)
            .service(load_more)
            .service(view)
            .service(view_wo_slash)
    })
        .bind((bind_addr, bind_port))?
        .run()
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use ntex::http::StatusCode;

    use crate::content::{Cursor, PostDocument, PostPage, Section, TextBlock};

    use super::*;

    /// Knows a single post; every other key is missing upstream.
    struct SingleDocSource {
        known: PostKey,
        document: PostDocument,
    }

    impl ContentSource for SingleDocSource {
        async fn query_posts_page(&self, _page_size: u32) -> Result<PostPage, SourceError> {
            unreachable!("the detail view never issues page queries");
        }

        async fn fetch_page_at(&self, _cursor: &Cursor) -> Result<PostPage, SourceError> {
            unreachable!("the detail view never follows cursors");
        }

        async fn fetch_post_by_key(&self, key: &PostKey) -> Result<PostDocument, SourceError> {
            if *key == self.known {
                Ok(self.document.clone())
            } else {
                Err(SourceError::NotFound)
            }
        }
    }

    fn source() -> SingleDocSource {
        SingleDocSource {
            known: PostKey("how-to-use-hooks".to_string()),
            document: PostDocument {
                publication_date: None,
                title: "How to use hooks".to_string(),
                banner_url: "https://images.example.dev/banner.png".to_string(),
                author: "Joseph Oliveira".to_string(),
                sections: vec![Section {
                    heading: "Starting out".to_string(),
                    body: vec![TextBlock("Hooks let you use state.".to_string())],
                }],
            },
        }
    }

    #[ntex::test]
    async fn test_unknown_post_renders_not_found() {
        let source = source();
        let known = source.known.clone();

        // An unknown key is a distinct 404 outcome, never a ready render
        let response = fetch_and_render_post(&source, &PostKey("missing".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = fetch_and_render_post(&source, &known).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
