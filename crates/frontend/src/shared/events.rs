//! Server-push collaborator: a persistent `EventSource` on `/api/events`.
//!
//! The stream is a one-way heads-up channel (`{type, data, time}` payloads)
//! used for live updates. Reconnects are the browser's business; malformed
//! events are dropped on the floor.

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventSource, MessageEvent};

use crate::shared::api_utils::api_url;

#[derive(Debug, Clone, Deserialize)]
pub struct PushEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub time: Option<String>,
}

/// Opens the event stream and hands every well-formed payload to
/// `on_event`. Returns `None` when the browser refuses the connection.
pub fn connect(on_event: impl Fn(PushEvent) + 'static) -> Option<EventSource> {
    let source = EventSource::new(&api_url("/api/events")).ok()?;

    let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
        let Some(text) = event.data().as_string() else {
            return;
        };
        match serde_json::from_str::<PushEvent>(&text) {
            Ok(payload) => on_event(payload),
            Err(_) => {} // ignore malformed events
        }
    });
    source.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
    on_message.forget();

    let on_error = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
        log::warn!("event stream error; browser will reconnect");
    });
    source.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();

    Some(source)
}
