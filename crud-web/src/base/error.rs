use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CrudError {
    ConfigInvalid(String),
    ElementInvalid(String),
    Navigation(String),
}

impl fmt::Display for CrudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrudError::ConfigInvalid(msg) => {
                write!(f, "Config Invalid: {}", msg)
            }
            CrudError::ElementInvalid(msg) => {
                write!(f, "Element Invalid: {}", msg)
            }
            CrudError::Navigation(msg) => write!(f, "Navigation: {}", msg),
        }
    }
}

impl std::error::Error for CrudError {}

impl From<serde_yaml::Error> for CrudError {
    fn from(err: serde_yaml::Error) -> Self {
        CrudError::ConfigInvalid(err.to_string())
    }
}

impl From<serde_json::Error> for CrudError {
    fn from(err: serde_json::Error) -> Self {
        CrudError::ConfigInvalid(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = CrudError::ElementInvalid("empty id".to_string());
        assert_eq!(err.to_string(), "Element Invalid: empty id");

        let err = CrudError::Navigation("blocked".to_string());
        assert_eq!(err.to_string(), "Navigation: blocked");
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err =
            serde_yaml::from_str::<Vec<String>>("{ not: [a list").unwrap_err();
        let err: CrudError = yaml_err.into();
        assert!(matches!(err, CrudError::ConfigInvalid(_)));
    }
}
