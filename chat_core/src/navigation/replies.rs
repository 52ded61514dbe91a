//! Canned bot phrases and the button grids shared by several replies.

use earth_corpus::{Button, ButtonRow, FactCorpus};

/// Action that switches free-text input to search.
pub const SEARCH_MODE_ACTION: &str = "search_mode";

/// Action that returns to the main menu.
pub const BACK_MAIN_ACTION: &str = "back_main";

pub const BOT_NAME: &str = "ЗемляБот";
pub const BOT_AVATAR: &str = "🌍";

pub const WELCOME_TEXT: &str = "Добро пожаловать в энциклопедию нашей планеты.\n\nЯ — ЗемляБот. Здесь вы найдёте научные данные, факты и статистику о Земле. Выберите раздел для изучения:";
pub const MENU_TEXT: &str = "Выберите раздел для изучения:";
pub const SEARCH_PROMPT_TEXT: &str = "Введите ключевое слово для поиска по базе знаний.\n\nПримеры: «вулкан», «температура», «кит», «ледник», «кислород»...";
pub const CARD_SUBTITLE: &str = "Ключевые факты и данные";

pub const SEARCH_LABEL: &str = "🔍 Поиск по базе знаний";
pub const MENU_LABEL: &str = "← Главное меню";
pub const NEW_SEARCH_LABEL: &str = "🔍 Новый поиск";

/// Hint shown when free text is not accepted.
pub const BUTTONS_HINT: &str = "Нажимайте на кнопки выше для навигации";

/// Placeholder of the search input.
pub const SEARCH_INPUT_HINT: &str = "Ключевое слово для поиска...";

const MENU_COLUMNS: usize = 3;

/// Main menu: section buttons three to a row, then the search entry.
pub fn welcome_buttons(corpus: &FactCorpus) -> Vec<ButtonRow> {
    let mut rows: Vec<ButtonRow> = corpus
        .sections()
        .chunks(MENU_COLUMNS)
        .map(|chunk| chunk.iter().map(|s| s.menu_button()).collect())
        .collect();
    rows.push(vec![Button::new(SEARCH_LABEL, SEARCH_MODE_ACTION)]);
    rows
}

/// Trailing row under a section card.
pub fn menu_row() -> ButtonRow {
    vec![Button::new(MENU_LABEL, BACK_MAIN_ACTION)]
}

/// Single-row return button under a sub-fact or search reply.
pub fn globe_menu_row() -> ButtonRow {
    vec![Button::new(MENU_LABEL, BACK_MAIN_ACTION).with_emoji(BOT_AVATAR)]
}

/// Retry and return buttons under a search reply.
pub fn search_again_row() -> ButtonRow {
    vec![
        Button::new(NEW_SEARCH_LABEL, SEARCH_MODE_ACTION),
        Button::new(MENU_LABEL, BACK_MAIN_ACTION).with_emoji(BOT_AVATAR),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_buttons_layout() {
        let corpus = FactCorpus::builtin();
        let rows = welcome_buttons(&corpus);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1].len(), 3);

        let labels: Vec<_> = rows[0].iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Биосфера", "Гидросфера", "История"]);
        assert_eq!(rows[1][2].action, "section_climate");

        assert_eq!(rows[2].len(), 1);
        assert_eq!(rows[2][0].action, SEARCH_MODE_ACTION);
        assert!(rows[2][0].emoji.is_none());
    }

    #[test]
    fn test_search_again_row() {
        let row = search_again_row();
        assert_eq!(row[0].action, SEARCH_MODE_ACTION);
        assert_eq!(row[1].action, BACK_MAIN_ACTION);
        assert_eq!(row[1].emoji.as_deref(), Some("🌍"));
    }
}
