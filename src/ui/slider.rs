/// A range input mirrored into its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slider {
    pub input_id: &'static str,
    pub label_id: &'static str,
    value: String,
    label: String,
}

impl Slider {
    pub fn new(input_id: &'static str, label_id: &'static str, initial: &str) -> Self {
        Self {
            input_id,
            label_id,
            value: initial.to_string(),
            label: initial.to_string(),
        }
    }

    /// Input event: the label takes the value verbatim.
    pub fn input(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.label.clone_from(&self.value);
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
