//! Document attachments
//!
//! The three documents collected on the final step: both sides of the ID and
//! the athlete portrait. Presence is the only thing the form checks; content
//! inspection belongs to whatever system eventually receives the submission.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// The three attachment slots of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttachmentSlot {
    /// Front of the ID document
    FrontId,
    /// Back of the ID document
    BackId,
    /// Athlete portrait
    AthletePhoto,
}

impl AttachmentSlot {
    /// All slots in form order
    pub const ALL: [AttachmentSlot; 3] = [Self::FrontId, Self::BackId, Self::AthletePhoto];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::FrontId => "Foto do Documento Frente",
            Self::BackId => "Foto do Documento Verso",
            Self::AthletePhoto => "Foto do Atleta",
        }
    }
}

impl fmt::Display for AttachmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A path-backed document handle, owned by the form until submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    path: PathBuf,
}

impl Attachment {
    /// Create an attachment from a filesystem path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The underlying path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name component, or the whole path when there is none
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

/// The three independent attachment slots of the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachments {
    front_id: Option<Attachment>,
    back_id: Option<Attachment>,
    athlete_photo: Option<Attachment>,
}

impl Attachments {
    /// Create an empty attachment set
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign or clear a slot
    pub fn set(&mut self, slot: AttachmentSlot, attachment: Option<Attachment>) {
        match slot {
            AttachmentSlot::FrontId => self.front_id = attachment,
            AttachmentSlot::BackId => self.back_id = attachment,
            AttachmentSlot::AthletePhoto => self.athlete_photo = attachment,
        }
    }

    /// Get the attachment in a slot, if any
    pub fn get(&self, slot: AttachmentSlot) -> Option<&Attachment> {
        match slot {
            AttachmentSlot::FrontId => self.front_id.as_ref(),
            AttachmentSlot::BackId => self.back_id.as_ref(),
            AttachmentSlot::AthletePhoto => self.athlete_photo.as_ref(),
        }
    }

    /// True when all three slots are filled
    pub fn is_complete(&self) -> bool {
        AttachmentSlot::ALL.iter().all(|s| self.get(*s).is_some())
    }

    /// Number of filled slots
    pub fn count(&self) -> usize {
        AttachmentSlot::ALL
            .iter()
            .filter(|s| self.get(**s).is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_is_incomplete() {
        let attachments = Attachments::new();
        assert!(!attachments.is_complete());
        assert_eq!(attachments.count(), 0);
    }

    #[test]
    fn test_set_and_clear() {
        let mut attachments = Attachments::new();
        attachments.set(
            AttachmentSlot::FrontId,
            Some(Attachment::new("/docs/rg-frente.jpg")),
        );
        assert_eq!(attachments.count(), 1);
        assert_eq!(
            attachments.get(AttachmentSlot::FrontId).unwrap().file_name(),
            "rg-frente.jpg"
        );

        attachments.set(AttachmentSlot::FrontId, None);
        assert!(attachments.get(AttachmentSlot::FrontId).is_none());
    }

    #[test]
    fn test_complete_requires_all_three() {
        let mut attachments = Attachments::new();
        attachments.set(AttachmentSlot::FrontId, Some(Attachment::new("frente.jpg")));
        attachments.set(AttachmentSlot::BackId, Some(Attachment::new("verso.jpg")));
        assert!(!attachments.is_complete());

        attachments.set(
            AttachmentSlot::AthletePhoto,
            Some(Attachment::new("atleta.jpg")),
        );
        assert!(attachments.is_complete());
    }

    #[test]
    fn test_slot_labels() {
        assert_eq!(AttachmentSlot::FrontId.label(), "Foto do Documento Frente");
        assert_eq!(AttachmentSlot::AthletePhoto.to_string(), "Foto do Atleta");
    }
}
