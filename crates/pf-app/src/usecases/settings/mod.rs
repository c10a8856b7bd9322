mod apply_theme;
mod language;

pub use apply_theme::{ApplyThemeSetting, ThemeChange};
pub use language::{ResolveLanguage, SetLanguage};
