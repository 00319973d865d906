use thiserror::Error;

/// Ошибка разбора кода статуса документа
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} status: {code:?}")]
pub struct ParseStatusError {
    pub kind: &'static str,
    pub code: String,
}

/// Трейт для перечислений статусов документов
///
/// Единый контракт для статусов заказов и возвратов: код для обмена
/// (snake_case, как в JSON) и подпись для UI.
pub trait DocumentStatus: Copy + Eq + std::fmt::Debug + 'static {
    /// Имя вида документа для сообщений об ошибках (например, "return")
    const KIND: &'static str;

    /// Все значения в порядке жизненного цикла
    fn all() -> &'static [Self];

    /// Код статуса (например, "partially_invoiced")
    fn code(&self) -> &'static str;

    /// Подпись для UI (например, "Partially Invoiced")
    fn label(&self) -> &'static str;

    /// Терминальный статус: переходов из него нет
    fn is_terminal(&self) -> bool;

    /// Парсинг из кода
    fn from_code(code: &str) -> Result<Self, ParseStatusError> {
        Self::all()
            .iter()
            .copied()
            .find(|s| s.code() == code)
            .ok_or_else(|| ParseStatusError {
                kind: Self::KIND,
                code: code.to_string(),
            })
    }
}
