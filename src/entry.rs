//! Entry value type: one displayable row of the spec sheet.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::collector::SystemReport;

pub const DEFAULT_COLOR: &str = "#5f6264";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Cpu,
    Gpu,
    Disk,
    Ram,
    Motherboard,
    Display,
    Os,
    Kernel,
    Username,
    UserData,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Cpu => "CPU",
            EntryKind::Gpu => "GPU",
            EntryKind::Disk => "DISK",
            EntryKind::Ram => "RAM",
            EntryKind::Motherboard => "MOTHERBOARD",
            EntryKind::Display => "DISPLAY",
            EntryKind::Os => "OS",
            EntryKind::Kernel => "KERNEL",
            EntryKind::Username => "USERNAME",
            EntryKind::UserData => "USERDATA",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "CPU" => Some(EntryKind::Cpu),
            "GPU" => Some(EntryKind::Gpu),
            "DISK" => Some(EntryKind::Disk),
            "RAM" => Some(EntryKind::Ram),
            "MOTHERBOARD" => Some(EntryKind::Motherboard),
            "DISPLAY" => Some(EntryKind::Display),
            "OS" | "OPERATING SYSTEM" => Some(EntryKind::Os),
            "KERNEL" => Some(EntryKind::Kernel),
            "USERNAME" => Some(EntryKind::Username),
            "USERDATA" => Some(EntryKind::UserData),
            _ => None,
        }
    }
}

impl Serialize for EntryKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EntryKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        EntryKind::parse(&s).ok_or_else(|| D::Error::custom(format!("unknown entry kind: {}", s)))
    }
}

/// One row: either a collected system fact or a user-authored note.
/// `user_title`/`user_content` are `Some` exactly when `kind` is UserData;
/// loads are normalized to keep that invariant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub index: usize,
    #[serde(rename = "shown", default = "default_true")]
    pub visible: bool,
    #[serde(rename = "background-color", default = "default_color")]
    pub color: String,
    #[serde(
        rename = "user-title",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub user_title: Option<String>,
    #[serde(
        rename = "user-content",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub user_content: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Entry {
    pub fn collected(kind: EntryKind, index: usize) -> Self {
        Entry {
            kind,
            index,
            visible: true,
            color: default_color(),
            user_title: None,
            user_content: None,
        }
    }

    pub fn note(title: impl Into<String>, content: impl Into<String>) -> Self {
        Entry {
            kind: EntryKind::UserData,
            index: 0,
            visible: true,
            color: default_color(),
            user_title: Some(title.into()),
            user_content: Some(content.into()),
        }
    }

    pub fn title(&self) -> &str {
        match self.kind {
            EntryKind::Cpu => "CPU",
            EntryKind::Gpu => "GPU",
            EntryKind::Disk => "Disk",
            EntryKind::Ram => "RAM",
            EntryKind::Motherboard => "Motherboard",
            EntryKind::Display => "Display",
            EntryKind::Os => "Operating System",
            EntryKind::Kernel => "Kernel",
            EntryKind::Username => "Username",
            EntryKind::UserData => self.user_title.as_deref().unwrap_or(""),
        }
    }

    /// Resolves the display text against the latest report. Indexed kinds
    /// fall back to "Unknown" when the hardware changed under a saved layout.
    pub fn content<'a>(&'a self, report: &'a SystemReport) -> &'a str {
        match self.kind {
            EntryKind::Cpu => &report.cpu,
            EntryKind::Gpu => report
                .gpus
                .get(self.index)
                .map(String::as_str)
                .unwrap_or("Unknown"),
            EntryKind::Disk => report
                .disks
                .get(self.index)
                .map(String::as_str)
                .unwrap_or("Unknown"),
            EntryKind::Ram => &report.ram,
            EntryKind::Motherboard => &report.motherboard,
            EntryKind::Display => "Not yet implemented",
            EntryKind::Os => &report.os,
            EntryKind::Kernel => &report.kernel,
            EntryKind::Username => &report.username,
            EntryKind::UserData => self.user_content.as_deref().unwrap_or(""),
        }
    }

    /// Restores the user-field invariant after deserializing.
    pub fn normalize(&mut self) {
        if self.kind == EntryKind::UserData {
            if self.user_title.is_none() {
                self.user_title = Some(String::new());
            }
            if self.user_content.is_none() {
                self.user_content = Some(String::new());
            }
        } else {
            self.user_title = None;
            self.user_content = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parse_accepts_any_case_and_the_os_alias() {
        assert_eq!(EntryKind::parse("cpu"), Some(EntryKind::Cpu));
        assert_eq!(EntryKind::parse("OS"), Some(EntryKind::Os));
        assert_eq!(EntryKind::parse("Operating System"), Some(EntryKind::Os));
        assert_eq!(EntryKind::parse("USERDATA"), Some(EntryKind::UserData));
        assert_eq!(EntryKind::parse("FLUX CAPACITOR"), None);
    }

    #[test]
    fn kind_serde_uses_upper_case_names() {
        let json = serde_json::to_string(&EntryKind::Motherboard).unwrap();
        assert_eq!(json, "\"MOTHERBOARD\"");
        let back: EntryKind = serde_json::from_str("\"gpu\"").unwrap();
        assert_eq!(back, EntryKind::Gpu);
        assert!(serde_json::from_str::<EntryKind>("\"NOPE\"").is_err());
    }

    #[test]
    fn titles_match_display_names() {
        assert_eq!(Entry::collected(EntryKind::Os, 0).title(), "Operating System");
        assert_eq!(Entry::collected(EntryKind::Ram, 0).title(), "RAM");
        assert_eq!(Entry::note("My GPU notes", "runs hot").title(), "My GPU notes");
    }

    #[test]
    fn content_indexes_into_repeated_kinds_with_fallback() {
        let report = SystemReport {
            gpus: vec!["GPU A".into(), "GPU B".into()],
            ..SystemReport::default()
        };
        let first = Entry::collected(EntryKind::Gpu, 0);
        let second = Entry::collected(EntryKind::Gpu, 1);
        let gone = Entry::collected(EntryKind::Gpu, 7);
        assert_eq!(first.content(&report), "GPU A");
        assert_eq!(second.content(&report), "GPU B");
        assert_eq!(gone.content(&report), "Unknown");
    }

    #[test]
    fn entry_serializes_to_the_documented_shape() {
        let entry = Entry::collected(EntryKind::Cpu, 0);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "CPU");
        assert_eq!(value["shown"], true);
        assert_eq!(value["background-color"], DEFAULT_COLOR);
        assert!(value.get("user-title").is_none());

        let note = Entry::note("Note", "text");
        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(value["type"], "USERDATA");
        assert_eq!(value["user-title"], "Note");
        assert_eq!(value["user-content"], "text");
    }

    #[test]
    fn normalize_enforces_the_user_field_invariant() {
        let mut stray: Entry = serde_json::from_str(
            r##"{"type": "CPU", "index": 0, "shown": true, "background-color": "#111111", "user-title": "junk"}"##,
        )
        .unwrap();
        stray.normalize();
        assert_eq!(stray.user_title, None);

        let mut bare: Entry = serde_json::from_str(r#"{"type": "USERDATA"}"#).unwrap();
        bare.normalize();
        assert_eq!(bare.user_title.as_deref(), Some(""));
        assert_eq!(bare.user_content.as_deref(), Some(""));
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let entry: Entry = serde_json::from_str(r#"{"type": "RAM"}"#).unwrap();
        assert_eq!(entry.index, 0);
        assert!(entry.visible);
        assert_eq!(entry.color, DEFAULT_COLOR);
    }
}
