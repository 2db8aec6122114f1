//! Push request and response payloads for the `/api/push` endpoint.

use serde::{Deserialize, Serialize};

use crate::Error;

/// Body of a push request: who receives it, what they see, and on which platforms.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Push {
    pub audience: Audience,
    pub notification: Notification,
    pub device_types: Vec<DeviceType>,
}

impl Push {
    /// Builds a push request, rejecting an empty audience, an empty alert, or
    /// an empty device type list.
    pub fn new(
        audience: Audience,
        notification: Notification,
        device_types: Vec<DeviceType>,
    ) -> Result<Self, Error> {
        if audience.is_empty() {
            return Err(Error::Validation("missing audience"));
        }
        if notification.alert.is_empty() {
            return Err(Error::Validation("missing notification"));
        }
        if device_types.is_empty() {
            return Err(Error::Validation("missing device types"));
        }

        Ok(Self {
            audience,
            notification,
            device_types,
        })
    }
}

/// Channel identifiers targeted by a push, grouped by platform.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Audience {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ios_channel: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub android_channel: Vec<String>,
}

impl Audience {
    /// Adds an iOS channel identifier.
    pub fn with_ios_channel(mut self, channel: impl Into<String>) -> Self {
        self.ios_channel.push(channel.into());
        self
    }

    /// Adds an Android channel identifier.
    pub fn with_android_channel(mut self, channel: impl Into<String>) -> Self {
        self.android_channel.push(channel.into());
        self
    }

    /// True when no channel of any platform is targeted.
    pub fn is_empty(&self) -> bool {
        self.ios_channel.is_empty() && self.android_channel.is_empty()
    }
}

/// Alert text plus an optional action run when the notification is opened.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub alert: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Actions>,
}

impl Notification {
    pub fn new(alert: impl Into<String>) -> Self {
        Self {
            alert: alert.into(),
            actions: None,
        }
    }

    /// Opens the given deep link when the notification is tapped.
    pub fn with_deep_link(self, content: impl Into<String>) -> Self {
        self.with_open_action(OpenType::DeepLink, content)
    }

    /// Opens the given URL when the notification is tapped.
    pub fn with_url(self, content: impl Into<String>) -> Self {
        self.with_open_action(OpenType::Url, content)
    }

    pub fn with_open_action(mut self, kind: OpenType, content: impl Into<String>) -> Self {
        self.actions = Some(Actions {
            open: OpenAction {
                kind,
                content: content.into(),
            },
        });
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Actions {
    pub open: OpenAction,
}

/// What the device does when the user opens the notification.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OpenAction {
    #[serde(rename = "type")]
    pub kind: OpenType,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OpenType {
    Url,
    DeepLink,
    LandingPage,
}

/// Platform a push is delivered to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Ios,
    Android,
    Amazon,
    Web,
}

/// Successful response of the push endpoint (HTTP 202).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PushResponse {
    pub ok: bool,

    #[serde(default)]
    pub operation_id: String,

    #[serde(default)]
    pub push_ids: Vec<String>,

    #[serde(default)]
    pub message_ids: Vec<serde_json::Value>,

    #[serde(default)]
    pub content_urls: Vec<serde_json::Value>,
}
