//! Global Form State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! the single source of truth for the form; the DOM only mirrors it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{
    DeliveryInfo, ReceiptDraft, ReceiverInfo, SenderInfo, SignatureBlock,
};
use crate::rows::ItemRows;

/// Everything the receipt form renders and persists.
#[derive(Clone, Debug, Default, Store)]
pub struct FormState {
    /// Supplier name + phone
    pub sender: SenderInfo,
    /// Receiver name + department
    pub receiver: ReceiverInfo,
    /// Delivery location, date and time
    pub delivery: DeliveryInfo,
    /// Free-text additional notes
    pub notes: String,
    /// Recipient + supplier signature lines
    pub signatures: SignatureBlock,
    /// Products table rows
    pub rows: ItemRows,
}

impl FormState {
    /// Assemble the persisted snapshot from the current state.
    /// The signature block is only carried when something is written in it.
    pub fn to_draft(&self) -> ReceiptDraft {
        let signatures = if self.signatures.is_empty() {
            None
        } else {
            Some(self.signatures.clone())
        };
        ReceiptDraft {
            sender: Some(self.sender.clone()),
            receiver: Some(self.receiver.clone()),
            delivery: Some(self.delivery.clone()),
            notes: self.notes.clone(),
            items: self.rows.snapshot(),
            signatures,
        }
    }

    /// Write a restored draft into the state. Groups absent from the draft
    /// leave the corresponding fields untouched; the rows are always
    /// rebuilt so their ids restart from zero.
    pub fn apply_draft(&mut self, draft: &ReceiptDraft) {
        if let Some(sender) = &draft.sender {
            self.sender = sender.clone();
        }
        if let Some(receiver) = &draft.receiver {
            self.receiver = receiver.clone();
        }
        if let Some(delivery) = &draft.delivery {
            self.delivery = delivery.clone();
        }
        if !draft.notes.is_empty() {
            self.notes = draft.notes.clone();
        }
        if let Some(signatures) = &draft.signatures {
            self.signatures = signatures.clone();
        }
        self.rows.rebuild_from(&draft.items);
    }

    /// Blank every field and put the table back to header + one empty row.
    /// Returns the fresh row's id so the caller can focus it.
    pub fn reset(&mut self) -> u32 {
        self.sender = SenderInfo::default();
        self.receiver = ReceiverInfo::default();
        self.delivery = DeliveryInfo::default();
        self.notes.clear();
        self.signatures = SignatureBlock::default();
        self.rows.reset()
    }
}

/// Type alias for the store
pub type FormStore = Store<FormState>;

/// Get the form store from context
pub fn use_form_store() -> FormStore {
    expect_context::<FormStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineItem;
    use crate::storage::{
        DraftRepository, MemoryBackend, SaveOutcome, StorageBackend, STORAGE_KEY,
    };

    fn make_filled_state() -> FormState {
        let mut state = FormState::default();
        state.sender.name = "مؤسسة النور".to_string();
        state.sender.location = "0501234567".to_string();
        state.receiver.name = "خالد".to_string();
        state.receiver.department = "المشتريات".to_string();
        state.delivery.location = "المستودع".to_string();
        state.delivery.date = "2024-06-01".to_string();
        state.notes = "تسليم صباحي".to_string();
        state.rows.reset();
        state.rows.set_description(0, "Box A");
        state.rows.set_quantity(0, "3");
        state
    }

    #[test]
    fn test_to_draft_skips_blank_signatures() {
        let state = make_filled_state();
        let draft = state.to_draft();

        assert!(draft.signatures.is_none());
        assert_eq!(draft.sender.as_ref().unwrap().name, "مؤسسة النور");
        assert_eq!(draft.items.len(), 1);
    }

    #[test]
    fn test_to_draft_carries_written_signatures() {
        let mut state = make_filled_state();
        state.signatures.supplier.name = "سعيد".to_string();

        let draft = state.to_draft();
        assert_eq!(draft.signatures.unwrap().supplier.name, "سعيد");
    }

    #[test]
    fn test_apply_draft_keeps_fields_for_absent_groups() {
        let mut state = make_filled_state();
        let draft = ReceiptDraft {
            sender: Some(SenderInfo {
                name: "مورد آخر".to_string(),
                location: String::new(),
            }),
            items: vec![LineItem {
                description: "Box B".to_string(),
                quantity: "2".to_string(),
                condition: "تالفة".to_string(),
                notes: String::new(),
            }],
            ..ReceiptDraft::default()
        };

        state.apply_draft(&draft);

        assert_eq!(state.sender.name, "مورد آخر");
        // Receiver was not in the draft, so the typed value survives.
        assert_eq!(state.receiver.name, "خالد");
        assert_eq!(state.rows.item_ids(), vec![0]);
        assert_eq!(state.rows.row(0).unwrap().description, "Box B");
    }

    #[test]
    fn test_save_restore_round_trip_preserves_the_snapshot() {
        let state = make_filled_state();
        let repo = DraftRepository::new(MemoryBackend::new());
        repo.save(&state.to_draft()).unwrap();

        let mut restored = FormState::default();
        restored.apply_draft(&repo.load().unwrap().unwrap());

        assert_eq!(restored.to_draft(), state.to_draft());
    }

    #[test]
    fn test_save_with_blank_trailing_row_persists_the_filled_one() {
        let mut state = make_filled_state();
        state.rows.add_item_row();

        let repo = DraftRepository::new(MemoryBackend::new());
        let outcome = repo.persist(&state.to_draft()).unwrap();

        assert_eq!(outcome, SaveOutcome::Saved);
        let stored = repo.load().unwrap().unwrap();
        assert_eq!(stored.items.len(), 1);
        assert_eq!(stored.items[0].description, "Box A");
    }

    #[test]
    fn test_fresh_form_save_deletes_the_stored_key() {
        // The post-init shape: header plus one untouched row.
        let mut state = FormState::default();
        state.rows.add_header_row();
        state.rows.add_item_row();

        let repo = DraftRepository::new(MemoryBackend::new());
        repo.save(&make_filled_state().to_draft()).unwrap();

        let outcome = repo.persist(&state.to_draft()).unwrap();
        assert_eq!(outcome, SaveOutcome::Cleared);
        assert_eq!(repo.backend().get_item(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_restores_a_payload_with_omitted_item_keys() {
        // Older snapshots drop blank condition/notes keys per item.
        let repo = DraftRepository::new(MemoryBackend::new());
        repo.backend()
            .set_item(
                STORAGE_KEY,
                concat!(
                    r#"{"sender":{"name":"مؤسسة النور","location":"0501234567"},"#,
                    r#""receiver":{"name":"خالد","department":"المشتريات"},"#,
                    r#""delivery":{"location":"المستودع","date":"2024-06-01","time":"09:30"},"#,
                    r#""notes":"تسليم صباحي","#,
                    r#""items":[{"description":"Box A","quantity":"3"},"#,
                    r#"{"description":"Box B","quantity":"1","condition":"مستعملة","notes":"خدش"}]}"#,
                ),
            )
            .unwrap();

        let mut state = FormState::default();
        state.rows.reset();
        state.apply_draft(&repo.load().unwrap().unwrap());

        assert_eq!(state.sender.name, "مؤسسة النور");
        assert_eq!(state.delivery.time, "09:30");
        assert_eq!(state.rows.item_ids(), vec![0, 1]);
        assert_eq!(state.rows.row(0).unwrap().condition, "جديدة");
        assert_eq!(state.rows.row(1).unwrap().notes, "خدش");
    }

    #[test]
    fn test_restore_keeps_unknown_condition_text() {
        let mut state = FormState::default();
        state.apply_draft(&ReceiptDraft {
            items: vec![LineItem {
                description: "Box A".to_string(),
                quantity: "1".to_string(),
                condition: "مجددة".to_string(),
                notes: String::new(),
            }],
            ..ReceiptDraft::default()
        });

        assert_eq!(state.rows.row(0).unwrap().condition, "مجددة");
        // The free text survives the next snapshot untouched.
        assert_eq!(state.to_draft().items[0].condition, "مجددة");
    }

    #[test]
    fn test_reset_blanks_every_section() {
        let mut state = make_filled_state();
        state.signatures.recipient.name = "أحمد".to_string();

        let fresh = state.reset();

        assert!(state.sender.is_empty());
        assert!(state.receiver.is_empty());
        assert!(state.delivery.is_empty());
        assert!(state.notes.is_empty());
        assert!(state.signatures.is_empty());
        assert_eq!(state.rows.item_ids(), vec![fresh]);
        assert!(state.to_draft().is_empty());
    }
}
