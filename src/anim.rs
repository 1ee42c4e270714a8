use std::time::Duration;

use serde::Deserialize;

/// The decorative header animation shown above the dashboard title.
pub const LOTTIE_URL: &str = "https://assets2.lottiefiles.com/packages/lf20_kkflmtur.json";

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

// ---------------------------------------------------------------------------
// Lottie descriptor metadata
// ---------------------------------------------------------------------------

/// The handful of top-level Lottie fields the header drawing needs.
/// The layer/shape payload is ignored; only timing and canvas metadata
/// drive the procedural animation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnimationMeta {
    /// Composition name (`nm`).
    #[serde(rename = "nm", default)]
    pub name: Option<String>,
    /// Frames per second (`fr`).
    #[serde(rename = "fr")]
    pub frame_rate: f64,
    /// First frame (`ip`).
    #[serde(rename = "ip", default)]
    pub in_point: f64,
    /// Last frame (`op`).
    #[serde(rename = "op")]
    pub out_point: f64,
    #[serde(rename = "w", default)]
    pub width: Option<u32>,
    #[serde(rename = "h", default)]
    pub height: Option<u32>,
}

impl AnimationMeta {
    /// Loop duration in seconds; falls back to one second when the
    /// descriptor's timing fields are degenerate.
    pub fn cycle_secs(&self) -> f64 {
        let frames = self.out_point - self.in_point;
        if self.frame_rate > 0.0 && frames > 0.0 {
            frames / self.frame_rate
        } else {
            1.0
        }
    }
}

// ---------------------------------------------------------------------------
// One-shot best-effort fetch
// ---------------------------------------------------------------------------

/// Fetch the Lottie descriptor once, blocking, before the UI starts.
///
/// Any failure (transport error, non-2xx status, malformed body) is
/// logged and degrades to `None`; the dashboard renders without the
/// header animation. No retries.
pub fn fetch_animation(url: &str) -> Option<AnimationMeta> {
    let client = match reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Could not build HTTP client for animation fetch: {e}");
            return None;
        }
    };

    let response = match client.get(url).send() {
        Ok(r) => r,
        Err(e) => {
            log::warn!("Animation fetch failed: {e}");
            return None;
        }
    };

    if !response.status().is_success() {
        log::warn!("Animation fetch returned HTTP {}", response.status());
        return None;
    }

    let text = match response.text() {
        Ok(t) => t,
        Err(e) => {
            log::warn!("Animation body could not be read: {e}");
            return None;
        }
    };

    parse_descriptor(&text)
}

/// Parse a Lottie JSON document into [`AnimationMeta`]; `None` when
/// the body is not a Lottie descriptor.
fn parse_descriptor(text: &str) -> Option<AnimationMeta> {
    match serde_json::from_str::<AnimationMeta>(text) {
        Ok(meta) => Some(meta),
        Err(e) => {
            log::warn!("Animation descriptor did not parse: {e}");
            None
        }
    }
}
