//! Form Data Model
//!
//! Serde structures for the persisted receipt draft and its line items.
//! The JSON field names are the storage contract; absent fields fall back
//! to their defaults so older or partial snapshots still restore.

use serde::{Deserialize, Serialize};

/// Default quantity for a fresh or blank line item.
pub const DEFAULT_QUANTITY: &str = "1";

/// Condition values offered by the per-row select, in display order.
///
/// The persisted `condition` stays a plain string: values outside this set
/// restore as free text without validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemCondition {
    /// Brand new
    #[default]
    New,
    /// Used
    Used,
    /// Damaged
    Damaged,
    /// Incomplete
    Missing,
}

impl ItemCondition {
    /// Every selectable condition, in display order.
    pub const ALL: [ItemCondition; 4] = [
        ItemCondition::New,
        ItemCondition::Used,
        ItemCondition::Damaged,
        ItemCondition::Missing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCondition::New => "جديدة",
            ItemCondition::Used => "مستعملة",
            ItemCondition::Damaged => "تالفة",
            ItemCondition::Missing => "ناقصة",
        }
    }
}

fn default_quantity() -> String {
    DEFAULT_QUANTITY.to_string()
}

fn default_condition() -> String {
    ItemCondition::default().as_str().to_string()
}

/// One product row of the receipt.
///
/// A persisted item always carries a non-blank description; rows without
/// one are dropped at snapshot time (see `rows::ItemRows::snapshot`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_quantity")]
    pub quantity: String,
    #[serde(default = "default_condition")]
    pub condition: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

/// Sender block. `location` is fed by the supplier phone input on the page;
/// the persisted key keeps the historical name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SenderInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
}

impl SenderInfo {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.location.is_empty()
    }
}

/// Receiver block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceiverInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department: String,
}

impl ReceiverInfo {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.department.is_empty()
    }
}

/// Delivery block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryInfo {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

impl DeliveryInfo {
    pub fn is_empty(&self) -> bool {
        self.location.is_empty() && self.date.is_empty() && self.time.is_empty()
    }
}

/// One hand-written signature line (name + date).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignatureLine {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
}

impl SignatureLine {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.date.is_empty()
    }
}

/// Recipient + supplier signature block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignatureBlock {
    #[serde(default)]
    pub recipient: SignatureLine,
    #[serde(default)]
    pub supplier: SignatureLine,
}

impl SignatureBlock {
    pub fn is_empty(&self) -> bool {
        self.recipient.is_empty() && self.supplier.is_empty()
    }
}

/// The full persisted snapshot of the form.
///
/// Optional groups absent from a stored draft are simply not restored;
/// the corresponding form fields keep their current values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceiptDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<SenderInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<ReceiverInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<DeliveryInfo>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signatures: Option<SignatureBlock>,
}

impl ReceiptDraft {
    /// True when nothing worth persisting is present anywhere in the draft.
    /// Drives the save-or-delete policy in `storage::DraftRepository::persist`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
            && self.sender.as_ref().map_or(true, SenderInfo::is_empty)
            && self.receiver.as_ref().map_or(true, ReceiverInfo::is_empty)
            && self.delivery.as_ref().map_or(true, DeliveryInfo::is_empty)
            && self.notes.is_empty()
            && self.signatures.as_ref().map_or(true, SignatureBlock::is_empty)
    }
}
