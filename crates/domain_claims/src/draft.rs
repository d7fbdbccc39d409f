//! Claim drafts accumulated by the intake wizard

use serde::{Deserialize, Serialize};

use core_kernel::InsuranceType;
use crate::error::ClaimError;

/// File extensions accepted as supporting documents
pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "pdf"];

/// An uploaded supporting document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Creates an attachment, rejecting unsupported file kinds
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, ClaimError> {
        let file_name = file_name.into();
        let accepted = file_name
            .rsplit_once('.')
            .map(|(_, ext)| {
                ACCEPTED_EXTENSIONS
                    .iter()
                    .any(|a| a.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false);
        if !accepted {
            return Err(ClaimError::UnsupportedFileType(file_name));
        }

        Ok(Self {
            file_name,
            content_type: content_type.into(),
            bytes,
        })
    }

    /// Whether this attachment should be run through image assessment
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image")
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Claim fields collected across the wizard steps
///
/// A draft belongs to exactly one wizard session and is discarded once the
/// claim is submitted or the session is abandoned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimDraft {
    pub name: String,
    /// Policy number exactly as entered
    pub policy_number: String,
    pub insurance_type: Option<InsuranceType>,
    pub description: String,
    pub attachments: Vec<Attachment>,
}

impl ClaimDraft {
    pub fn document_count(&self) -> usize {
        self.attachments.len()
    }

    /// Attachments that are images, in upload order
    pub fn images(&self) -> impl Iterator<Item = &Attachment> {
        self.attachments.iter().filter(|a| a.is_image())
    }
}
