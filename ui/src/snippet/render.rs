//! Sandbox frame description for rendering a raw HTML fragment.

/// Fixed frame height in CSS pixels.
pub const FRAME_HEIGHT_PX: u32 = 400;

pub const FRAME_TITLE: &str = "Plotly Visualization";

/// Capabilities granted to the sandboxed frame.
///
/// Scripts always run (the fragment draws itself). Same-origin access is only
/// granted when the fragment's source is trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SandboxPolicy {
    pub allow_same_origin: bool,
}

impl SandboxPolicy {
    pub const TRUSTED: Self = Self {
        allow_same_origin: true,
    };

    pub const STRICT: Self = Self {
        allow_same_origin: false,
    };

    pub fn from_trust(trusted: bool) -> Self {
        if trusted {
            Self::TRUSTED
        } else {
            Self::STRICT
        }
    }

    /// Value for the iframe `sandbox` attribute.
    pub fn tokens(&self) -> &'static str {
        if self.allow_same_origin {
            "allow-scripts allow-same-origin"
        } else {
            "allow-scripts"
        }
    }
}

impl Default for SandboxPolicy {
    fn default() -> Self {
        Self::TRUSTED
    }
}

/// Everything needed to mount a fragment in an isolated iframe.
#[derive(Debug, Clone, PartialEq)]
pub struct SandboxFrame {
    pub srcdoc: String,
    pub sandbox: &'static str,
    pub title: &'static str,
    pub style: String,
}

impl SandboxFrame {
    /// `None` for an empty or whitespace-only fragment: nothing is rendered.
    pub fn for_snippet(html: &str, policy: SandboxPolicy) -> Option<Self> {
        if html.trim().is_empty() {
            return None;
        }
        Some(Self {
            srcdoc: html.to_string(),
            sandbox: policy.tokens(),
            title: FRAME_TITLE,
            style: format!(
                "width: 100%; height: {FRAME_HEIGHT_PX}px; border: none; background: white;"
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fragment_renders_nothing() {
        assert!(SandboxFrame::for_snippet("", SandboxPolicy::default()).is_none());
        assert!(SandboxFrame::for_snippet(" \n\t", SandboxPolicy::default()).is_none());
    }

    #[test]
    fn frame_carries_raw_fragment_untouched() {
        let html = "<div>not even a plot</div><script>Plotly.newPlot(</script>";
        let frame = SandboxFrame::for_snippet(html, SandboxPolicy::default()).unwrap();
        assert_eq!(frame.srcdoc, html);
        assert_eq!(frame.title, "Plotly Visualization");
        assert!(frame.style.contains("width: 100%"));
        assert!(frame.style.contains("height: 400px"));
        assert!(frame.style.contains("border: none"));
        assert!(frame.style.contains("background: white"));
    }

    #[test]
    fn policy_controls_same_origin_grant() {
        let trusted = SandboxFrame::for_snippet("<p>x</p>", SandboxPolicy::TRUSTED).unwrap();
        assert_eq!(trusted.sandbox, "allow-scripts allow-same-origin");

        let strict = SandboxFrame::for_snippet("<p>x</p>", SandboxPolicy::from_trust(false)).unwrap();
        assert_eq!(strict.sandbox, "allow-scripts");
    }
}
