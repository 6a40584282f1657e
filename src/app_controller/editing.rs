/// Which reservation, if any, the open booking form is modifying.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditingMode {
    #[default]
    Idle,
    Editing(String),
}

impl EditingMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditingMode::Editing(_))
    }

    /// Returns the current mode and leaves `Idle` behind.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}
