use models::ErrorFormat;

/// Unstructured server error kept for a global error banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    pub message: String,
    pub format: ErrorFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreAction {
    LoginSuccess,
    LogoutSuccess,
    SetServerError { message: String, format: ErrorFormat },
    ClearServerError,
}

impl CoreAction {
    pub fn kind(&self) -> &'static str {
        match self {
            CoreAction::LoginSuccess => "core/loginSuccess",
            CoreAction::LogoutSuccess => "core/logoutSuccess",
            CoreAction::SetServerError { .. } => "core/setServerError",
            CoreAction::ClearServerError => "core/clearServerError",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoreState {
    pub is_authenticated: bool,
    pub server_error: Option<ServerError>,
}

impl CoreState {
    pub fn apply(&mut self, action: CoreAction) {
        match action {
            CoreAction::LoginSuccess => {
                self.is_authenticated = true;
            }
            CoreAction::LogoutSuccess => {
                self.is_authenticated = false;
                self.server_error = None;
            }
            CoreAction::SetServerError { message, format } => {
                self.server_error = Some(ServerError { message, format });
            }
            CoreAction::ClearServerError => {
                self.server_error = None;
            }
        }
    }
}
