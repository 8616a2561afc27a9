use super::render::ResultOutput;

/// Spinner and result-container visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingIndicator {
    pub spinner_visible: bool,
    pub container_visible: bool,
}

impl LoadingIndicator {
    /// Output is cleared only when loading starts, so an error stays up until the next submission.
    pub fn set_loading(&mut self, is_loading: bool, output: &mut ResultOutput) {
        self.spinner_visible = is_loading;
        self.container_visible = true;
        if is_loading {
            *output = ResultOutput::Empty;
        }
    }
}
