/// Enum representing the different types of errors that can occur while the map is set up.
///
/// ### Error Codes:
/// - **100–199**: Errors in the `config` module.
/// - **200–299**: Errors in the `data` module.
/// - **600–699**: Errors in the `ui` module.
///
/// Each error is represented by:
/// - `code` (`i32`): The unique error code.
/// - `message` (`String`): A detailed error message.
#[derive(PartialEq)]
pub enum ErrorTypes {
    /// Represents an error with a specific code and message.
    Error { code: i32, message: String },
}

impl ErrorTypes {
    /// Creates a new `ErrorTypes::Error` instance.
    ///
    /// # Arguments:
    /// - `code`: The error code associated with this error.
    /// - `message`: A descriptive message explaining the error.
    pub fn new(code: i32, message: String) -> Self {
        ErrorTypes::Error { code, message }
    }

    /// Retrieves the code and message of the error.
    pub fn get(&self) -> (i32, String) {
        match self {
            ErrorTypes::Error { code, message } => (*code, message.clone()),
        }
    }

    /// Retrieves only the code of the error.
    ///
    /// # Returns:
    /// The error code (`i32`), which identifies the module it came from.
    pub fn code(&self) -> i32 {
        match self {
            ErrorTypes::Error { code, .. } => *code,
        }
    }
}

impl std::fmt::Debug for ErrorTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTypes::Error { code, message } => {
                write!(f, "An error has occured: {:?}, code: [{:?}]", message, code)
            }
        }
    }
}

impl std::fmt::Display for ErrorTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTypes::Error { code, message } => write!(f, "[{}] {}", code, message),
        }
    }
}

impl std::error::Error for ErrorTypes {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_get_returns_code_and_message() {
        let error = ErrorTypes::new(201, "Error reading interest.geojson".to_string());
        assert_eq!(
            error.get(),
            (201, "Error reading interest.geojson".to_string())
        );
        assert_eq!(error.code(), 201);
        assert_eq!(error.to_string(), "[201] Error reading interest.geojson");
    }
}
