//! Device capability gate.
//!
//! The embedded capture UI needs camera and microphone access to do
//! its job; the host environment consults the gate whenever the
//! content surface raises a device-permission prompt. Pure decision
//! logic — no side effects, no caching, each prompt is evaluated on
//! its own.

/// Kind of device capability a prompt is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Camera,
    Microphone,
    Other,
}

impl Capability {
    /// Map a prompt's kind string onto the gate's vocabulary.
    /// Anything unrecognized collapses to `Other`.
    pub fn parse(kind: &str) -> Self {
        match kind.trim().to_ascii_lowercase().as_str() {
            "camera" => Self::Camera,
            "microphone" => Self::Microphone,
            _ => Self::Other,
        }
    }
}

/// Outcome of a capability prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Grant the capability.
    Allow,
    /// Refuse the capability.
    Deny,
    /// Leave the host platform's baseline policy in charge.
    Default,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
            Self::Default => "default",
        }
    }
}

/// Decide a single capability prompt.
///
/// Camera and microphone are always granted. Every other kind falls
/// through to the platform default.
pub fn decide(capability: Capability) -> Decision {
    match capability {
        Capability::Camera | Capability::Microphone => Decision::Allow,
        Capability::Other => Decision::Default,
    }
}
