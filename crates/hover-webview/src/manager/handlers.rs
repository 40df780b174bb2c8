use std::borrow::Cow;
use std::sync::Arc;

use hover_common::ViewId;
use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::content::{ContentProvider, NavigationPolicy, SCHEME};
use crate::events::{PageLoadState, WebViewEvent};

use super::{push_event, EventSink, WebViewManager};

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(%view, body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(%view, body_len = body.len(), "IPC message from JS");
            push_event(&events, WebViewEvent::IpcMessage { view, body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(%view, ?state, url = %url, "page load");
            push_event(&events, WebViewEvent::PageLoad { view, state, url });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            push_event(&events, WebViewEvent::TitleChanged { view, title });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view: ViewId,
        policy: NavigationPolicy,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !policy.allows(&url) {
                warn!(%view, url = %url, "navigation blocked");
                push_event(&events, WebViewEvent::NavigationBlocked { view, url });
                return false;
            }
            true
        })
    }

    pub(super) fn attach_custom_protocol<'a>(
        builder: WebViewBuilder<'a>,
        provider: Arc<ContentProvider>,
    ) -> WebViewBuilder<'a> {
        builder.with_custom_protocol(SCHEME.to_string(), move |_id, request| {
            let uri = request.uri().to_string();
            let path = ContentProvider::request_path(&uri);

            let response = match provider.resolve(path) {
                Some((mime, data)) => wry::http::Response::builder()
                    .status(200)
                    .header("Content-Type", mime.as_ref())
                    .body(Cow::from(data.into_owned())),
                None => {
                    warn!(path = %path, "custom protocol: asset not found");
                    wry::http::Response::builder()
                        .status(404)
                        .body(Cow::from(b"Not Found".to_vec()))
                }
            };
            response.unwrap_or_else(|e| {
                warn!("custom protocol: bad response: {e}");
                wry::http::Response::new(Cow::from(Vec::new()))
            })
        })
    }
}
