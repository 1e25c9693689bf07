//! 全局消息提示
//!
//! 消息进入队列后在 [`MESSAGE_DURATION_MS`] 毫秒后自动移除。

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::MESSAGE_DURATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    fn alert_class(&self) -> &'static str {
        match self {
            MessageKind::Success => "alert alert-success shadow-lg",
            MessageKind::Error => "alert alert-error shadow-lg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub kind: MessageKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy)]
pub struct Messages {
    queue: RwSignal<Vec<Message>>,
    next_id: StoredValue<u64>,
}

impl Default for Messages {
    fn default() -> Self {
        Self::new()
    }
}

impl Messages {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(MessageKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(MessageKind::Error, text.into());
    }

    fn push(&self, kind: MessageKind, text: String) {
        let id = self.enqueue(kind, text);
        let messages = *self;
        Timeout::new(MESSAGE_DURATION_MS, move || messages.dismiss(id)).forget();
    }

    fn enqueue(&self, kind: MessageKind, text: String) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.queue.update(|queue| queue.push(Message { id, kind, text }));
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| queue.retain(|m| m.id != id));
    }

    pub fn list(&self) -> Vec<Message> {
        self.queue.get()
    }
}

/// 消息出口，挂在应用根部
#[component]
pub fn MessageHost(messages: Messages) -> impl IntoView {
    view! {
        <div class="toast toast-top toast-center z-50">
            <For
                each=move || messages.list()
                key=|m| m.id
                children=move |message| {
                    let id = message.id;
                    view! {
                        <div class=message.kind.alert_class() on:click=move |_| messages.dismiss(id)>
                            <span>{message.text}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
