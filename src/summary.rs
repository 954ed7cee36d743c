//! Diagnostic summaries emitted by agents for external reporting.
//!
//! Agents produce a fresh batch of summaries after each `update` or `act`
//! call (losses, Q-value histograms, attention maps, rollout videos, ...).
//! The core does not persist them; the caller consumes each batch once and
//! forwards it to whatever logging backend the harness uses.

use serde::{Deserialize, Serialize};

/// The default frame rate attached to video summaries.
pub const DEFAULT_VIDEO_FPS: u32 = 30;

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// A single named diagnostic value of one of five kinds.
///
/// Non-scalar payloads are carried as opaque [`serde_json::Value`]s; their
/// shape is a contract between the emitting agent and the reporting backend,
/// not something this core interprets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Summary {
    /// A single scalar, e.g. a loss or a success rate.
    Scalar { name: String, value: f64 },
    /// A distribution of values, e.g. Q-values over a batch.
    Histogram { name: String, value: serde_json::Value },
    /// An image, e.g. an attention heatmap.
    Image { name: String, value: serde_json::Value },
    /// Free-form text, e.g. a language instruction.
    Text { name: String, value: String },
    /// A video clip, e.g. a rollout recording, with its frame rate.
    Video {
        name: String,
        value: serde_json::Value,
        fps: u32,
    },
}

impl Summary {
    /// Create a scalar summary.
    pub fn scalar(name: impl Into<String>, value: f64) -> Self {
        Self::Scalar {
            name: name.into(),
            value,
        }
    }

    /// Create a histogram summary.
    pub fn histogram(name: impl Into<String>, value: serde_json::Value) -> Self {
        Self::Histogram {
            name: name.into(),
            value,
        }
    }

    /// Create an image summary.
    pub fn image(name: impl Into<String>, value: serde_json::Value) -> Self {
        Self::Image {
            name: name.into(),
            value,
        }
    }

    /// Create a text summary.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create a video summary at the default frame rate
    /// ([`DEFAULT_VIDEO_FPS`]).
    pub fn video(name: impl Into<String>, value: serde_json::Value) -> Self {
        Self::video_with_fps(name, value, DEFAULT_VIDEO_FPS)
    }

    /// Create a video summary with an explicit frame rate.
    pub fn video_with_fps(name: impl Into<String>, value: serde_json::Value, fps: u32) -> Self {
        Self::Video {
            name: name.into(),
            value,
            fps,
        }
    }

    /// The name this summary is reported under.
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar { name, .. }
            | Self::Histogram { name, .. }
            | Self::Image { name, .. }
            | Self::Text { name, .. }
            | Self::Video { name, .. } => name,
        }
    }
}
