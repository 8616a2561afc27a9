//! Element ids and CSS classes the hosting page provides.

pub const API_KEY: &str = "api-key";
pub const RESULT_CONTAINER: &str = "result-container";
pub const RESULT_OUTPUT: &str = "result-output";
pub const SPINNER: &str = "spinner";

pub const CREATIVE_STRENGTH: &str = "creative-strength";
pub const CREATIVE_VALUE: &str = "creative-value";
pub const CONTROL_STRENGTH: &str = "control-strength";
pub const CONTROL_VALUE: &str = "control-value";

pub const T2I_FORM: &str = "t2i-form";
pub const T2I_PROMPT: &str = "t2i-prompt";
pub const T2I_MODEL: &str = "t2i-model";
pub const T2I_SIZE: &str = "t2i-size";

pub const I2I_FORM: &str = "i2i-form";
pub const I2I_IMAGE: &str = "i2i-image";
pub const I2I_PROMPT: &str = "i2i-prompt";

pub const I2V_FORM: &str = "i2v-form";
pub const I2V_IMAGE: &str = "i2v-image";

pub const TEXT_TO_IMAGE_TAB: &str = "t2i";
pub const IMAGE_TO_IMAGE_TAB: &str = "i2i";
pub const IMAGE_TO_VIDEO_TAB: &str = "i2v";

pub const CLASS_TAB_CONTENT: &str = "tab-content";
pub const CLASS_TAB_LINK: &str = "tab-link";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_ERROR: &str = "error";
