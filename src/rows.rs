//! Item Row Store
//!
//! Ordered line-item rows behind the products table: identifier
//! allocation, the header pseudo-row, removal semantics, and the
//! snapshot/rebuild round trip with storage.
//!
//! Row identifiers are session-scoped and monotonic. Removing a row
//! retires its id for the rest of the session; only `rebuild_from`
//! restarts the counter, because restored rows replace the whole list.

use crate::models::{ItemCondition, LineItem, DEFAULT_QUANTITY};

/// One editable row of the products table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemRow {
    pub id: u32,
    pub description: String,
    pub quantity: String,
    pub condition: String,
    pub notes: String,
}

impl ItemRow {
    fn blank(id: u32) -> Self {
        Self {
            id,
            description: String::new(),
            quantity: DEFAULT_QUANTITY.to_string(),
            condition: ItemCondition::default().as_str().to_string(),
            notes: String::new(),
        }
    }

    /// Reset every field to its blank default, keeping the id.
    fn clear(&mut self) {
        *self = Self::blank(self.id);
    }

    /// Fill the fields from a restored item, substituting defaults for
    /// blank quantity/condition the same way a fresh row would.
    fn apply(&mut self, item: &LineItem) {
        self.description = item.description.clone();
        self.quantity = if item.quantity.is_empty() {
            DEFAULT_QUANTITY.to_string()
        } else {
            item.quantity.clone()
        };
        self.condition = if item.condition.is_empty() {
            ItemCondition::default().as_str().to_string()
        } else {
            item.condition.clone()
        };
        self.notes = item.notes.clone();
    }

    /// Field values as a persisted item, trimmed. `None` when the trimmed
    /// description is blank; such rows never reach storage.
    fn to_line_item(&self) -> Option<LineItem> {
        let description = self.description.trim();
        if description.is_empty() {
            return None;
        }
        let quantity = self.quantity.trim();
        let condition = self.condition.trim();
        Some(LineItem {
            description: description.to_string(),
            quantity: if quantity.is_empty() {
                DEFAULT_QUANTITY.to_string()
            } else {
                quantity.to_string()
            },
            condition: if condition.is_empty() {
                ItemCondition::default().as_str().to_string()
            } else {
                condition.to_string()
            },
            notes: self.notes.trim().to_string(),
        })
    }
}

/// Ordered collection of item rows plus the header pseudo-row flag.
#[derive(Debug, Clone, Default)]
pub struct ItemRows {
    has_header: bool,
    rows: Vec<ItemRow>,
    next_id: u32,
}

impl ItemRows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the column-label header and drop all data rows.
    pub fn add_header_row(&mut self) {
        self.rows.clear();
        self.has_header = true;
    }

    /// Append a blank row under the next session identifier.
    /// Returns the new row's id so the caller can move focus to it.
    pub fn add_item_row(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(ItemRow::blank(id));
        id
    }

    /// Remove a row by id. The sole remaining row is cleared in place
    /// instead, so the table never drops below one row. Unknown ids are
    /// ignored.
    pub fn remove_item_row(&mut self, id: u32) {
        if self.rows.len() == 1 {
            if self.rows[0].id == id {
                self.rows[0].clear();
            }
            return;
        }
        self.rows.retain(|row| row.id != id);
    }

    pub fn set_description(&mut self, id: u32, value: &str) {
        if let Some(row) = self.row_mut(id) {
            row.description = value.to_string();
        }
    }

    pub fn set_quantity(&mut self, id: u32, value: &str) {
        if let Some(row) = self.row_mut(id) {
            row.quantity = value.to_string();
        }
    }

    pub fn set_condition(&mut self, id: u32, value: &str) {
        if let Some(row) = self.row_mut(id) {
            row.condition = value.to_string();
        }
    }

    pub fn set_notes(&mut self, id: u32, value: &str) {
        if let Some(row) = self.row_mut(id) {
            row.notes = value.to_string();
        }
    }

    pub fn row(&self, id: u32) -> Option<&ItemRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    fn row_mut(&mut self, id: u32) -> Option<&mut ItemRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Row ids in display order, for keyed list rendering.
    pub fn item_ids(&self) -> Vec<u32> {
        self.rows.iter().map(|row| row.id).collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn last_item_id(&self) -> Option<u32> {
        self.rows.last().map(|row| row.id)
    }

    /// Current rows as persisted items, in display order. Rows with a
    /// blank description are skipped; the header never appears.
    pub fn snapshot(&self) -> Vec<LineItem> {
        self.rows.iter().filter_map(ItemRow::to_line_item).collect()
    }

    /// Rebuild the table from a stored snapshot: header back on, counter
    /// back to zero, one row per item in order. An empty snapshot still
    /// leaves one blank row so the table is usable.
    pub fn rebuild_from(&mut self, items: &[LineItem]) {
        self.add_header_row();
        self.next_id = 0;
        for item in items {
            let id = self.add_item_row();
            if let Some(row) = self.row_mut(id) {
                row.apply(item);
            }
        }
        if self.rows.is_empty() {
            self.add_item_row();
        }
    }

    /// Back to the pristine post-init shape: header plus one blank row.
    /// The id counter keeps running; only `rebuild_from` restarts it.
    /// Returns the fresh row's id.
    pub fn reset(&mut self) -> u32 {
        self.add_header_row();
        self.add_item_row()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(description: &str, quantity: &str, condition: &str) -> LineItem {
        LineItem {
            description: description.to_string(),
            quantity: quantity.to_string(),
            condition: condition.to_string(),
            notes: String::new(),
        }
    }

    fn make_rows_with(n: usize) -> ItemRows {
        let mut rows = ItemRows::new();
        rows.add_header_row();
        for _ in 0..n {
            rows.add_item_row();
        }
        rows
    }

    #[test]
    fn test_ids_are_monotonic_within_a_session() {
        let mut rows = make_rows_with(3);
        assert_eq!(rows.item_ids(), vec![0, 1, 2]);

        rows.remove_item_row(1);
        assert_eq!(rows.item_ids(), vec![0, 2]);

        // A retired id is never handed out again.
        let next = rows.add_item_row();
        assert_eq!(next, 3);
        assert_eq!(rows.item_ids(), vec![0, 2, 3]);
    }

    #[test]
    fn test_sole_row_is_cleared_in_place() {
        let mut rows = make_rows_with(1);
        rows.set_description(0, "Box A");
        rows.set_quantity(0, "5");
        rows.set_condition(0, "مستعملة");
        rows.set_notes(0, "خدش بسيط");

        rows.remove_item_row(0);

        assert_eq!(rows.row_count(), 1);
        let row = rows.row(0).unwrap();
        assert_eq!(row.id, 0);
        assert_eq!(row.description, "");
        assert_eq!(row.quantity, "1");
        assert_eq!(row.condition, "جديدة");
        assert_eq!(row.notes, "");
    }

    #[test]
    fn test_remove_unknown_id_is_ignored() {
        let mut rows = make_rows_with(2);
        rows.remove_item_row(99);
        assert_eq!(rows.item_ids(), vec![0, 1]);

        // Unknown id against a sole row leaves it untouched too.
        let mut sole = make_rows_with(1);
        sole.set_description(0, "Box A");
        sole.remove_item_row(99);
        assert_eq!(sole.row(0).unwrap().description, "Box A");
    }

    #[test]
    fn test_snapshot_trims_and_skips_blank_descriptions() {
        let mut rows = make_rows_with(4);
        rows.set_description(0, "  Box A  ");
        rows.set_quantity(0, "3");
        rows.set_description(1, "   ");
        rows.set_description(2, "Box B");
        rows.set_quantity(2, "1");
        rows.set_condition(2, "مستعملة");
        // Row 3 stays fully blank.

        let snapshot = rows.snapshot();
        assert_eq!(
            snapshot,
            vec![
                make_item("Box A", "3", "جديدة"),
                make_item("Box B", "1", "مستعملة"),
            ]
        );
    }

    #[test]
    fn test_snapshot_substitutes_defaults_for_blank_fields() {
        let mut rows = make_rows_with(1);
        rows.set_description(0, "Box A");
        rows.set_quantity(0, "  ");
        rows.set_condition(0, "");
        rows.set_notes(0, "  هش  ");

        let snapshot = rows.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].quantity, "1");
        assert_eq!(snapshot[0].condition, "جديدة");
        assert_eq!(snapshot[0].notes, "هش");
    }

    #[test]
    fn test_rebuild_restarts_the_id_counter() {
        let mut rows = ItemRows::new();
        rows.reset();
        rows.add_item_row();
        rows.add_item_row();

        let items = vec![
            make_item("Box A", "3", "جديدة"),
            make_item("Box B", "1", "مستعملة"),
        ];
        rows.rebuild_from(&items);

        assert!(rows.has_header());
        assert_eq!(rows.item_ids(), vec![0, 1]);
        assert_eq!(rows.row(0).unwrap().description, "Box A");
        assert_eq!(rows.row(1).unwrap().condition, "مستعملة");

        // The next id after rebuilding N rows is N.
        assert_eq!(rows.add_item_row(), 2);
    }

    #[test]
    fn test_rebuild_from_empty_leaves_one_blank_row() {
        let mut rows = make_rows_with(3);
        rows.set_description(0, "Box A");

        rows.rebuild_from(&[]);

        assert!(rows.has_header());
        assert_eq!(rows.item_ids(), vec![0]);
        assert_eq!(rows.row(0).unwrap().description, "");
    }

    #[test]
    fn test_rebuild_fills_blank_quantity_and_condition() {
        let mut rows = ItemRows::new();
        rows.rebuild_from(&[make_item("Box A", "", "")]);

        let row = rows.row(0).unwrap();
        assert_eq!(row.quantity, "1");
        assert_eq!(row.condition, "جديدة");
    }

    #[test]
    fn test_reset_keeps_the_counter_running() {
        let mut rows = ItemRows::new();
        rows.reset();
        rows.add_item_row();
        assert_eq!(rows.item_ids(), vec![0, 1]);

        let fresh = rows.reset();
        assert_eq!(fresh, 2);
        assert_eq!(rows.item_ids(), vec![2]);
        assert!(rows.has_header());
    }

    #[test]
    fn test_header_row_clears_data_rows() {
        let mut rows = make_rows_with(2);
        rows.set_description(0, "Box A");

        rows.add_header_row();

        assert!(rows.has_header());
        assert_eq!(rows.row_count(), 0);
        assert!(rows.snapshot().is_empty());
    }
}
