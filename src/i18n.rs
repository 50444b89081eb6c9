//! Fixed bilingual string tables.
//!
//! Two locales are supported (Russian and English). Every piece of copy shown
//! in the UI lives in one of the two [`Strings`] tables below; switching the
//! locale swaps the whole table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    /// The other locale
    pub fn toggle(self) -> Self {
        match self {
            Locale::Ru => Locale::En,
            Locale::En => Locale::Ru,
        }
    }

    /// String table for this locale
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::Ru => &RU,
            Locale::En => &EN,
        }
    }

    /// Short uppercase code shown on the locale button ("RU" / "EN")
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ru => "RU",
            Locale::En => "EN",
        }
    }

    /// Name of the language in itself
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::Ru => "Русский",
            Locale::En => "English",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        })
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" | "rus" | "russian" => Ok(Locale::Ru),
            "en" | "eng" | "english" => Ok(Locale::En),
            other => Err(format!("Unknown locale: {} (expected 'ru' or 'en')", other)),
        }
    }
}

/// All user-visible copy for one locale
#[derive(Debug)]
pub struct Strings {
    // Auth gate
    pub title: &'static str,
    pub subtitle: &'static str,
    pub login: &'static str,
    pub register: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub confirm_password: &'static str,
    pub sign_in: &'static str,
    pub sign_up: &'static str,

    // Sections
    pub dashboard: &'static str,
    pub profile: &'static str,
    pub streaming: &'static str,
    pub games: &'static str,
    pub files: &'static str,
    pub settings: &'static str,

    // Preferences
    pub dark_mode: &'static str,
    pub language: &'static str,

    // Panel headings and actions
    pub streaming_platforms: &'static str,
    pub game_library: &'static str,
    pub file_manager: &'static str,
    pub add_platform: &'static str,
    pub add_game: &'static str,
    pub upload_file: &'static str,
    pub privacy: &'static str,
    pub security: &'static str,
    pub logout: &'static str,
    pub welcome_back: &'static str,
    pub recent_files: &'static str,
    pub popular_games: &'static str,
    pub my_platforms: &'static str,

    // Catalog labels
    pub active: &'static str,
    pub hours: &'static str,
    pub playing: &'static str,
    pub completed: &'static str,
    pub launch: &'static str,

    // Files panel
    pub upload_files: &'static str,
    pub drop_hint: &'static str,
    pub select_files: &'static str,

    // Settings panel
    pub analytics: &'static str,
    pub analytics_hint: &'static str,
    pub action_logging: &'static str,
    pub action_logging_hint: &'static str,
    pub two_factor: &'static str,
    pub two_factor_hint: &'static str,
    pub configure_2fa: &'static str,
    pub danger_zone: &'static str,
    pub delete_account: &'static str,

    // Profile panel
    pub on: &'static str,
    pub off: &'static str,

    // Add dialog
    pub name: &'static str,
    pub enter_name: &'static str,
    pub add: &'static str,

    // Notices
    pub login_success: &'static str,
    pub register_success: &'static str,
    pub added_success: &'static str,
    pub fill_in_field: &'static str,
}

pub static RU: Strings = Strings {
    title: "Многофункциональный Веб-Сервис",
    subtitle: "Ваше личное пространство для контента, файлов и развлечений",
    login: "Вход",
    register: "Регистрация",
    email: "Электронная почта",
    password: "Пароль",
    confirm_password: "Подтвердите пароль",
    sign_in: "Войти",
    sign_up: "Зарегистрироваться",

    dashboard: "Панель управления",
    profile: "Профиль",
    streaming: "Стриминг",
    games: "Игры",
    files: "Файлы",
    settings: "Настройки",

    dark_mode: "Темная тема",
    language: "Язык",

    streaming_platforms: "Стриминговые платформы",
    game_library: "Игровая библиотека",
    file_manager: "Файловый менеджер",
    add_platform: "Добавить платформу",
    add_game: "Добавить игру",
    upload_file: "Загрузить файл",
    privacy: "Конфиденциальность",
    security: "2FA Безопасность",
    logout: "Выйти",
    welcome_back: "С возвращением!",
    recent_files: "Недавние файлы",
    popular_games: "Популярные игры",
    my_platforms: "Мои платформы",

    active: "Active",
    hours: "часов",
    playing: "Играю",
    completed: "Пройдено",
    launch: "Запустить",

    upload_files: "Загрузите файлы",
    drop_hint: "Перетащите файлы сюда или нажмите для выбора",
    select_files: "Выбрать файлы",

    analytics: "Сбор аналитики",
    analytics_hint: "Разрешить сбор данных для улучшения сервиса",
    action_logging: "Логирование действий",
    action_logging_hint: "Записывать пользовательские действия",
    two_factor: "Двухфакторная аутентификация",
    two_factor_hint: "Дополнительная защита вашего аккаунта",
    configure_2fa: "Настроить 2FA",
    danger_zone: "Опасная зона",
    delete_account: "Удалить аккаунт",

    on: "Вкл",
    off: "Выкл",

    name: "Название",
    enter_name: "Введите название",
    add: "Добавить",

    login_success: "Успешный вход!",
    register_success: "Регистрация завершена!",
    added_success: "Успешно добавлено!",
    fill_in_field: "Заполните это поле",
};

pub static EN: Strings = Strings {
    title: "Multifunctional Web Service",
    subtitle: "Your personal space for content, files and entertainment",
    login: "Login",
    register: "Register",
    email: "Email",
    password: "Password",
    confirm_password: "Confirm Password",
    sign_in: "Sign In",
    sign_up: "Sign Up",

    dashboard: "Dashboard",
    profile: "Profile",
    streaming: "Streaming",
    games: "Games",
    files: "Files",
    settings: "Settings",

    dark_mode: "Dark Mode",
    language: "Language",

    streaming_platforms: "Streaming Platforms",
    game_library: "Game Library",
    file_manager: "File Manager",
    add_platform: "Add Platform",
    add_game: "Add Game",
    upload_file: "Upload File",
    privacy: "Privacy",
    security: "2FA Security",
    logout: "Logout",
    welcome_back: "Welcome Back!",
    recent_files: "Recent Files",
    popular_games: "Popular Games",
    my_platforms: "My Platforms",

    active: "Active",
    hours: "hours",
    playing: "Playing",
    completed: "Completed",
    launch: "Launch",

    upload_files: "Upload Files",
    drop_hint: "Drag and drop files here or click to select",
    select_files: "Select Files",

    analytics: "Analytics Collection",
    analytics_hint: "Allow data collection to improve service",
    action_logging: "Action Logging",
    action_logging_hint: "Record user actions",
    two_factor: "Two-Factor Authentication",
    two_factor_hint: "Extra protection for your account",
    configure_2fa: "Configure 2FA",
    danger_zone: "Danger Zone",
    delete_account: "Delete Account",

    on: "On",
    off: "Off",

    name: "Name",
    enter_name: "Enter name",
    add: "Add",

    login_success: "Login successful!",
    register_success: "Registration complete!",
    added_success: "Successfully added!",
    fill_in_field: "Please fill in this field",
};

impl Strings {
    /// Brand shown in the top bar: the first word of the title
    pub fn brand(&self) -> &'static str {
        self.title.split(' ').next().unwrap_or(self.title)
    }
}
