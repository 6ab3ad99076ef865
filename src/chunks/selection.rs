/// Ordered set of chunk ids marked for a batch action.
///
/// Ids keep the order in which they were selected. Nothing here prunes ids
/// of records that disappeared; callers that care must filter themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Remove `id` if selected, append it otherwise
    pub fn toggle(&mut self, id: &str) {
        if self.contains(id) {
            self.ids.retain(|selected| selected != id);
        } else {
            self.ids.push(id.to_string());
        }
    }

    /// Select every id, or clear when the selection already has as many
    /// entries as there are records.
    ///
    /// The comparison is on counts against the whole record set, not the
    /// visible page.
    pub fn toggle_all<'a, I>(&mut self, all_ids: I)
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: ExactSizeIterator,
    {
        let all_ids = all_ids.into_iter();
        if self.ids.len() == all_ids.len() {
            self.ids.clear();
        } else {
            self.ids = all_ids.map(str::to_string).collect();
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
