#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Clinical,
    Night,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Clinical => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Clinical,
        }
    }
}

pub struct ThemeDefinition {
    pub css: &'static str,
    pub label: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Clinical => ThemeDefinition {
            css: CLINICAL_THEME,
            label: "Night mode",
        },
        ThemeMode::Night => ThemeDefinition {
            css: NIGHT_THEME,
            label: "Day mode",
        },
    }
}

const CLINICAL_THEME: &str = r#"
:root {
    --color-bg-primary: #f8fafc;
    --color-bg-surface: #ffffff;
    --color-bg-overlay: rgba(15, 23, 42, 0.45);
    --color-text-primary: #1e293b;
    --color-text-muted: #64748b;
    --color-border: #e2e8f0;
    --color-accent: #0d9488;
    --color-accent-soft: #ccfbf1;
    --color-chat-user-bg: #0d9488;
    --color-chat-user-text: #ffffff;
    --color-chat-model-bg: #ffffff;
    --color-chat-model-text: #334155;
    --color-error-bg: #fee2e2;
    --color-error-text: #dc2626;
    --color-listening: #ef4444;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;

const NIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #0f172a;
    --color-bg-surface: #1e293b;
    --color-bg-overlay: rgba(0, 0, 0, 0.6);
    --color-text-primary: #f1f5f9;
    --color-text-muted: #94a3b8;
    --color-border: #334155;
    --color-accent: #2dd4bf;
    --color-accent-soft: #134e4a;
    --color-chat-user-bg: #0f766e;
    --color-chat-user-text: #f0fdfa;
    --color-chat-model-bg: #1e293b;
    --color-chat-model-text: #e2e8f0;
    --color-error-bg: #450a0a;
    --color-error-text: #fca5a5;
    --color-listening: #f87171;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_alternates() {
        assert_eq!(ThemeMode::Clinical.toggled(), ThemeMode::Night);
        assert_eq!(ThemeMode::Night.toggled().toggled(), ThemeMode::Night);
        assert!(theme_definition(ThemeMode::Night).css.contains("--color-accent"));
    }
}
