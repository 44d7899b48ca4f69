// SPDX-License-Identifier: MPL-2.0
//! Media kind inference from display names.
//!
//! The gallery labels an exported asset with a MIME type derived purely from
//! the display name's extension. Inference is total: an unrecognized or
//! missing extension falls back to the generic video type rather than
//! failing.

/// Video container kinds the gallery distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// MPEG-4 container (`.mp4`).
    Mp4,
    /// Apple QuickTime container (`.mov`).
    QuickTime,
    /// Matroska container (`.mkv`).
    Matroska,
    /// Fallback for any other or missing extension.
    GenericVideo,
}

/// Recognized extensions in match order; first match wins.
const KIND_TABLE: &[(&str, MediaKind)] = &[
    (".mp4", MediaKind::Mp4),
    (".mov", MediaKind::QuickTime),
    (".mkv", MediaKind::Matroska),
];

impl MediaKind {
    /// Infers the media kind from a display name.
    ///
    /// Matching is by case-insensitive suffix against a fixed table. Pure
    /// and total; never fails.
    #[must_use]
    pub fn from_display_name(display_name: &str) -> Self {
        let lower = display_name.to_lowercase();
        for (suffix, kind) in KIND_TABLE {
            if lower.ends_with(suffix) {
                return *kind;
            }
        }
        MediaKind::GenericVideo
    }

    /// Returns the MIME type string the destination store is labeled with.
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            MediaKind::Mp4 => "video/mp4",
            MediaKind::QuickTime => "video/quicktime",
            MediaKind::Matroska => "video/x-matroska",
            MediaKind::GenericVideo => "video/*",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mp4_extension_is_case_insensitive() {
        assert_eq!(MediaKind::from_display_name("clip.mp4"), MediaKind::Mp4);
        assert_eq!(MediaKind::from_display_name("clip.MP4"), MediaKind::Mp4);
        assert_eq!(MediaKind::from_display_name("clip.Mp4"), MediaKind::Mp4);
    }

    #[test]
    fn mov_maps_to_quicktime() {
        assert_eq!(
            MediaKind::from_display_name("holiday.mov"),
            MediaKind::QuickTime
        );
    }

    #[test]
    fn mkv_maps_to_matroska() {
        assert_eq!(
            MediaKind::from_display_name("talk.MKV"),
            MediaKind::Matroska
        );
    }

    #[test]
    fn unknown_or_missing_extension_falls_back() {
        assert_eq!(
            MediaKind::from_display_name("clip"),
            MediaKind::GenericVideo
        );
        assert_eq!(
            MediaKind::from_display_name("clip.txt"),
            MediaKind::GenericVideo
        );
        assert_eq!(MediaKind::from_display_name(""), MediaKind::GenericVideo);
    }

    #[test]
    fn mime_types_match_store_labels() {
        assert_eq!(MediaKind::Mp4.mime_type(), "video/mp4");
        assert_eq!(MediaKind::QuickTime.mime_type(), "video/quicktime");
        assert_eq!(MediaKind::Matroska.mime_type(), "video/x-matroska");
        assert_eq!(MediaKind::GenericVideo.mime_type(), "video/*");
    }
}
