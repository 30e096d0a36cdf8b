use serde::Deserialize;

/// `?confirm=true` query flag every delete endpoint requires.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteConfirmation {
    #[serde(default)]
    pub confirm: bool,
}

impl DeleteConfirmation {
    pub fn is_confirmed(&self) -> bool {
        self.confirm
    }
}
