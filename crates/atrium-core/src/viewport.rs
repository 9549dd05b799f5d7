//! Device classification and visibility policy
//!
//! Mobile and desktop get different treatment in three places: the touch
//! volume control is enlarged, playback starts on the first touch instead
//! of relying on autoplay, and the devtools heuristics are skipped. The
//! visibility policy is asymmetric on purpose: backgrounding pauses on
//! mobile only, regaining visibility resumes everywhere.

/// Identification tokens that classify a platform string as mobile
/// (matched case-insensitively)
const MOBILE_TOKENS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }
}

/// Classify a user-agent-style identification string
pub fn classify_device(ident: &str) -> DeviceClass {
    let lowered = ident.to_lowercase();
    if MOBILE_TOKENS.iter().any(|token| lowered.contains(token)) {
        DeviceClass::Mobile
    } else {
        DeviceClass::Desktop
    }
}

/// What the playback layer should do after a visibility change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackDirective {
    /// Request playback again
    Resume,
    /// Re-apply the current volume setting
    ReassertVolume,
    /// Pause playback
    Pause,
}

/// Visibility policy
///
/// Nothing happens while the landing surface is still up. Once content
/// has begun, regaining visibility resumes playback and reasserts the
/// volume; losing visibility pauses on mobile and is ignored on desktop.
pub fn on_visibility_change(
    visible: bool,
    content_begun: bool,
    device: DeviceClass,
) -> Vec<PlaybackDirective> {
    if !content_begun {
        return Vec::new();
    }
    if visible {
        vec![PlaybackDirective::Resume, PlaybackDirective::ReassertVolume]
    } else if device.is_mobile() {
        vec![PlaybackDirective::Pause]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_mobile_idents() {
        assert_eq!(classify_device("Android 14; Pixel"), DeviceClass::Mobile);
        assert_eq!(classify_device("iPhone OS 17_2"), DeviceClass::Mobile);
        assert_eq!(classify_device("OPERA MINI/9.80"), DeviceClass::Mobile);
    }

    #[test]
    fn test_classify_desktop_idents() {
        assert_eq!(classify_device("linux x86_64"), DeviceClass::Desktop);
        assert_eq!(classify_device("macos aarch64"), DeviceClass::Desktop);
        assert_eq!(classify_device(""), DeviceClass::Desktop);
    }

    #[test]
    fn test_background_pauses_on_mobile_only() {
        // Same inputs, only the device class differs
        assert_eq!(
            on_visibility_change(false, true, DeviceClass::Mobile),
            vec![PlaybackDirective::Pause]
        );
        assert_eq!(on_visibility_change(false, true, DeviceClass::Desktop), vec![]);
    }

    #[test]
    fn test_regaining_visibility_resumes_and_reasserts() {
        for device in [DeviceClass::Mobile, DeviceClass::Desktop] {
            assert_eq!(
                on_visibility_change(true, true, device),
                vec![PlaybackDirective::Resume, PlaybackDirective::ReassertVolume]
            );
        }
    }

    #[test]
    fn test_no_directives_before_content_phase() {
        assert_eq!(on_visibility_change(true, false, DeviceClass::Desktop), vec![]);
        assert_eq!(on_visibility_change(false, false, DeviceClass::Mobile), vec![]);
    }
}
