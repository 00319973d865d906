use serde::{Deserialize, Serialize};

/// Роль пользователя. Определяет, какие действия видны в UI
/// (косметическое ограничение, права проверяет сервер).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Superuser,
    Admin,
    Supervisor,
    Seller,
    /// Любая роль, неизвестная клиенту
    #[serde(other)]
    Other,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Superuser => "superuser",
            UserRole::Admin => "admin",
            UserRole::Supervisor => "supervisor",
            UserRole::Seller => "seller",
            UserRole::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Superuser => "Superuser",
            UserRole::Admin => "Administrator",
            UserRole::Supervisor => "Supervisor",
            UserRole::Seller => "Seller",
            UserRole::Other => "User",
        }
    }
}

/// Текущий пользователь, от имени которого выполняются действия
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: UserRole,
}

impl User {
    pub fn is_superuser(&self) -> bool {
        self.role == UserRole::Superuser
    }

    /// Имя для отображения: полное имя или логин
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}
