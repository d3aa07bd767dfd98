//! Splitting a request into provider-sized batches.

use std::collections::HashMap;
use std::time::Duration;

use push_core::{AndroidConfig, AndroidNotification, Priority, PushRequest};

/// Fields shared by every batch of a request, computed once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTemplate {
    /// Payload data, every value stringified.
    pub data: HashMap<String, String>,
    pub android: AndroidConfig,
}

impl MessageTemplate {
    /// Project the request's shared fields.
    pub fn from_request(req: &PushRequest) -> Self {
        let android = AndroidConfig {
            priority: (req.priority == Some(Priority::High)).then_some(Priority::High),
            collapse_key: req.collapse_key.clone().filter(|key| !key.is_empty()),
            ttl: req
                .time_to_live
                .filter(|&ttl| ttl > 0)
                .map(|ttl| Duration::from_secs(ttl.into())),
            notification: merge_notification(req),
        };

        let data = req
            .data
            .iter()
            .map(|(key, value)| (key.clone(), stringify(value)))
            .collect();

        Self { data, android }
    }

    /// Partition `recipients` into batches of at most `limit` tokens.
    ///
    /// A topic produces exactly one batch with no tokens.
    pub fn batches<'a>(
        &'a self,
        recipients: &'a [String],
        topic: Option<&'a str>,
        limit: usize,
    ) -> Batches<'a> {
        Batches {
            template: self,
            remaining: if topic.is_some() { &[] } else { recipients },
            offset: 0,
            topic,
            limit: limit.max(1),
        }
    }
}

/// Explicit request fields win over the structured override.
fn merge_notification(req: &PushRequest) -> Option<AndroidNotification> {
    let mut is_set = req.notification.is_some();
    let mut notification = req.notification.clone().unwrap_or_default();

    if !req.message.is_empty() {
        is_set = true;
        notification.body = req.message.clone();
    }

    if !req.title.is_empty() {
        is_set = true;
        notification.title = req.title.clone();
    }

    if !req.image.is_empty() {
        is_set = true;
        notification.image_url = req.image.clone();
    }

    if let Some(sound) = req.sound_name() {
        is_set = true;
        notification.sound = sound.to_string();
    }

    is_set.then_some(notification)
}

fn stringify(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One provider call's worth of recipients.
#[derive(Debug, Clone, Copy)]
pub struct NotificationBatch<'a> {
    pub tokens: &'a [String],
    /// Position of `tokens[0]` in the attempt's recipient list.
    pub offset: usize,
    pub topic: Option<&'a str>,
    pub template: &'a MessageTemplate,
}

impl<'a> NotificationBatch<'a> {
    /// Recipients addressed by this batch: its tokens, or the topic.
    pub fn targets(&self) -> Vec<&'a str> {
        match self.topic {
            Some(topic) => vec![topic],
            None => self.tokens.iter().map(String::as_str).collect(),
        }
    }

    pub fn data(&self) -> &'a HashMap<String, String> {
        &self.template.data
    }

    pub fn android(&self) -> &'a AndroidConfig {
        &self.template.android
    }
}

/// Lazy iterator over a request's batches.
#[derive(Debug)]
pub struct Batches<'a> {
    template: &'a MessageTemplate,
    remaining: &'a [String],
    offset: usize,
    topic: Option<&'a str>,
    limit: usize,
}

impl<'a> Iterator for Batches<'a> {
    type Item = NotificationBatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(topic) = self.topic.take() {
            return Some(NotificationBatch {
                tokens: &[],
                offset: 0,
                topic: Some(topic),
                template: self.template,
            });
        }

        if self.remaining.is_empty() {
            return None;
        }

        let take = self.remaining.len().min(self.limit);
        let (tokens, rest) = self.remaining.split_at(take);
        let batch = NotificationBatch {
            tokens,
            offset: self.offset,
            topic: None,
            template: self.template,
        };

        self.remaining = rest;
        self.offset += take;
        Some(batch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.topic.is_some()) + self.remaining.len().div_ceil(self.limit);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Batches<'_> {}

impl std::iter::FusedIterator for Batches<'_> {}
