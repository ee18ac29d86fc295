// css classes applied to the link button container
pub const LINK_BUTTON_CLASS: &str = "linkButton";
pub const ACTIVE_BUTTON_CLASS: &str = "activeButton";

// suffixes appended to the component element id for its sub-elements
pub const BUTTON_DIV_SUFFIX: &str = "_buttonDiv";
pub const LABEL_DIV_SUFFIX: &str = "_labelDiv";
pub const BUTTON_LINK_SUFFIX: &str = "_buttonLink";

pub const ELEMENT_PATH_SEPARATOR: char = '-';
pub const TRANSLATION_KEY_SEPARATOR: &str = ".";

pub const DEFAULT_HOME_URL: &str = "/";
